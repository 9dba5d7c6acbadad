//! # Cleaner
//!
//! This module finds the source files in a directory and removes the
//! executables compiled from them.

pub mod candidate;
mod delete;
pub mod errors;

pub use delete::{CleanReport, run};
pub use errors::{CleanerError, DeletionError};
