mod core;

pub use core::{RendererSettings, StylesheetRenderer};
