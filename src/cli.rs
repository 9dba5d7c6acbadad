//! # CLI
//!
//! This module defines the command line surface of the tool. It takes no
//! arguments; clap still provides `--help` and `--version` and rejects
//! anything else.

use clap::Parser;

/// This struct represents the top-level CLI entry point for the tool.
#[derive(Parser)]
#[command(
    version,
    about = "Deletes the executables compiled from the .rs files in the current directory",
    long_about = None
)]
pub struct Cli {}
