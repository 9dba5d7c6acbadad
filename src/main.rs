//! Command-line entry point for `clean-executables`.

use std::process::ExitCode;

fn main() -> ExitCode {
    clean_executables::run()
}
