//! # Delete Operations
//!
//! This module removes the executables compiled from the source files in a
//! directory. Only the derived executable paths are ever removed; the source
//! files are left untouched.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::debug;
use walkdir::WalkDir;

use crate::{
    cleaner::{
        candidate::Candidate,
        errors::{CleanerError, DeletionError},
    },
    constants::{COMPLETION_MESSAGE, START_MESSAGE},
};

/// The outcome of one cleaning run.
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Executables removed, in processing order.
    pub deleted: Vec<PathBuf>,
    /// Executables that could not be removed, in processing order.
    pub errors: Vec<DeletionError>,
}

impl CleanReport {
    /// The number of executables removed.
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }
}

/// Removes every regular file in `directory` whose name is a source file's
/// name with the suffix stripped.
///
/// A start notice is written to `out` before the directory is listed and a
/// completion notice after every candidate has been processed. Deletion
/// failures are collected in the report and do not stop the run.
///
/// # Arguments
///
/// - `directory` - The directory to clean; not descended into.
/// - `out` - Receives the two status notices.
///
/// # Returns
///
/// A [`CleanReport`] on success, or a [`CleanerError`] if the directory
/// cannot be listed or a notice cannot be written.
pub fn run<W: Write>(directory: &Path, out: &mut W) -> Result<CleanReport, CleanerError> {
    writeln!(out, "{START_MESSAGE}").map_err(|error| CleanerError::Notice { error })?;

    let candidates = list_candidates(directory)?;
    let mut report = CleanReport::default();
    for candidate in candidates {
        clean_candidate(directory, candidate, &mut report);
    }

    debug!(
        deleted = report.deleted_count(),
        failed = report.errors.len(),
        "finished cleaning {}",
        directory.display()
    );

    if let Err(error) = writeln!(out, "{COMPLETION_MESSAGE}") {
        return Err(CleanerError::Completion { error, report });
    }
    Ok(report)
}

/// Lists the entries directly inside `directory` that are source files.
///
/// # Returns
///
/// The candidates sorted by source name, or [`CleanerError::IoRead`] if
/// `directory` is missing, unreadable, or not a directory.
fn list_candidates(directory: &Path) -> Result<Vec<Candidate>, CleanerError> {
    let mut candidates = Vec::new();

    let entries = WalkDir::new(directory)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.map_err(|error| CleanerError::IoRead {
            path: directory.to_path_buf(),
            error: error.into(),
        })?;

        // The root itself. Anything but a directory has no entries to list.
        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                return Err(CleanerError::IoRead {
                    path: directory.to_path_buf(),
                    error: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
                });
            }
            continue;
        }

        if let Some(candidate) = Candidate::from_source_name(entry.file_name()) {
            candidates.push(candidate);
        }
    }

    Ok(candidates)
}

/// Deletes the candidate's executable if it is a regular file.
///
/// # Side Effects
///
/// - Pushes the removed path, or the failure, onto `report`.
fn clean_candidate(directory: &Path, candidate: Candidate, report: &mut CleanReport) {
    let executable = directory.join(&candidate.executable_name);

    if !is_regular_file(&executable) {
        debug!(
            source = ?candidate.source_name,
            "no executable at {}",
            executable.display()
        );
        return;
    }

    match fs::remove_file(&executable) {
        Ok(()) => {
            debug!(source = ?candidate.source_name, "deleted {}", executable.display());
            report.deleted.push(executable);
        }
        Err(error) => {
            debug!(
                source = ?candidate.source_name,
                "failed to delete {}: {}",
                executable.display(),
                error
            );
            report.errors.push(DeletionError {
                path: executable,
                error,
            });
        }
    }
}

/// Checks that `path` is a regular file itself, not a directory, a symlink
/// or a special file.
fn is_regular_file(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|metadata| metadata.file_type().is_file())
}
