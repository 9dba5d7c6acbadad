//! # Error Types
//!
//! This module defines the error types used throughout the [`cleaner`]
//! module.
//!
//! [`cleaner`]: crate::cleaner

use std::{io, path::PathBuf};

use crate::cleaner::CleanReport;

/// Errors that end a cleaning run.
#[derive(thiserror::Error, Debug)]
pub enum CleanerError {
    /// Failed to list the directory being cleaned.
    #[error("Failed to read '{path}': {error}")]
    IoRead {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Failed to write the start notice.
    #[error("Failed to write status notice: {error}")]
    Notice {
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Failed to write the completion notice. Every candidate was already
    /// processed, so the report is kept.
    #[error("Failed to write completion notice: {error}")]
    Completion {
        /// The underlying I/O error.
        #[source]
        error: io::Error,
        /// What the run did before the notice failed.
        report: CleanReport,
    },
}

/// A single executable that passed the regular-file check but could not be
/// removed. Recorded in the run's report; never ends the run.
#[derive(thiserror::Error, Debug)]
#[error("Failed to delete '{path}': {error}")]
pub struct DeletionError {
    /// The executable that could not be removed.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub error: io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a deletion error names the path and the cause.
    #[test]
    fn test_deletion_error_message() {
        let error = DeletionError {
            path: PathBuf::from("./main"),
            error: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to delete './main': permission denied"
        );
    }

    /// Tests that a listing error names the directory once.
    #[test]
    fn test_listing_error_message() {
        let error = CleanerError::IoRead {
            path: PathBuf::from("."),
            error: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "Failed to read '.': not found");
    }
}
