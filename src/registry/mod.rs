//! Per-document class cache with stylesheet change detection.

mod core;

pub use core::{RegistryConfig, StyleRegistry};
