//! Helper Utilities
//!
//! Common utilities used across the application.

mod format;
mod fs;

pub use format::*;
pub use fs::*;
