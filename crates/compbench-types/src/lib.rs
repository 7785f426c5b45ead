//! Core type system and error handling for compbench
//!
//! This crate provides the foundational types shared by the compbench
//! workspace:
//!
//! - **Error handling**: the error taxonomy with severity and fatality
//! - **Configuration values**: level hints and verbosity tiers
//!
//! # Features
//!
//! - `std` (default): Enable standard library features
//! - `serde`: Enable serialization support
//!
//! # Examples
//!
//! ```rust
//! use compbench_types::{Error, LevelHint, Result};
//!
//! fn pick_level(raw: i32) -> Result<LevelHint> {
//!     if raw > 100 {
//!         return Err(Error::config("level out of range"));
//!     }
//!     Ok(LevelHint::new(raw))
//! }
//!
//! assert!(pick_level(-1).unwrap().is_default());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use config::{LevelHint, Verbosity};
pub use error::{Error, ErrorKind, ErrorSeverity};
pub use result::Result;
