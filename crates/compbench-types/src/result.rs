//! Result type alias for compbench operations

use crate::Error;

/// Result type alias for compbench operations
pub type Result<T> = std::result::Result<T, Error>;
