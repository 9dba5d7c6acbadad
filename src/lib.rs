//! # Executable cleaner
//!
//! Removes the executables that `rustc` leaves next to single-file Rust
//! programs, e.g. `calculator` next to `calculator.rs`.

pub mod cleaner;
mod cli;
pub mod constants;
mod logging;

use std::{io, path::Path, process::ExitCode};

use clap::Parser;

use crate::{
    cleaner::{CleanReport, CleanerError},
    cli::Cli,
};

/// Cleans the current working directory.
///
/// Parses the (empty) command line, sets up diagnostics, then runs the
/// cleaner on `.`. Deletion failures are printed to standard error after the
/// run and do not change the exit code.
///
/// # Returns
///
/// [`ExitCode::SUCCESS`] when the directory was processed, or
/// [`ExitCode::FAILURE`] if it could not be listed or a status notice could
/// not be written.
pub fn run() -> ExitCode {
    let _cli = Cli::parse();
    logging::init();

    let directory = Path::new(".");
    let mut stdout = io::stdout().lock();
    match cleaner::run(directory, &mut stdout) {
        Ok(report) => {
            print_deletion_errors(&report);
            ExitCode::SUCCESS
        }
        Err(error) => {
            if let CleanerError::Completion { report, .. } = &error {
                print_deletion_errors(report);
            }
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Prints one line per executable that could not be removed.
fn print_deletion_errors(report: &CleanReport) {
    for error in &report.errors {
        eprintln!("{error}");
    }
}
