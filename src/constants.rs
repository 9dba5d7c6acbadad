//! # Constants
//!
//! Fixed values shared by the cleaner and the binary.

/// Suffix identifying a source file. The executable name is the source name
/// with this suffix removed.
pub const SOURCE_SUFFIX: &str = ".rs";

/// Printed to standard output before any candidate is processed.
pub const START_MESSAGE: &str = "Cleaning executables...";

/// Printed to standard output once every candidate has been processed.
pub const COMPLETION_MESSAGE: &str = "Done.";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
