mod types;

pub use types::{Result, StyleError};
