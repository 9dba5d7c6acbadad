//! # Candidates
//!
//! A candidate pairs a source file name with the executable name derived from
//! it. It lives for one cleanup decision and is dropped afterwards.
//!
//! Names are kept as OS strings, so a file name that is not valid UTF-8 is
//! matched like any other.

use std::ffi::{OsStr, OsString};

use crate::constants::SOURCE_SUFFIX;

/// One source file and the executable `rustc` would have produced from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The source file name, e.g. `calculator.rs`.
    pub source_name: OsString,
    /// The source name without [`SOURCE_SUFFIX`], e.g. `calculator`.
    pub executable_name: OsString,
}

impl Candidate {
    /// Builds a candidate from a directory entry's file name.
    ///
    /// # Returns
    ///
    /// `None` if `source_name` does not end with [`SOURCE_SUFFIX`].
    pub fn from_source_name(source_name: &OsStr) -> Option<Candidate> {
        executable_name(source_name).map(|executable_name| Candidate {
            source_name: source_name.to_os_string(),
            executable_name: executable_name.to_os_string(),
        })
    }
}

/// Strips exactly one trailing [`SOURCE_SUFFIX`] from `source_name`.
///
/// The match is anchored to the end of the name. A name that is just the
/// suffix yields an empty executable name.
pub fn executable_name(source_name: &OsStr) -> Option<&OsStr> {
    let stem = source_name
        .as_encoded_bytes()
        .strip_suffix(SOURCE_SUFFIX.as_bytes())?;

    // SAFETY: `stem` comes from `as_encoded_bytes` and ends right before the
    // suffix, a non-empty UTF-8 substring, which is a valid split point.
    Some(unsafe { OsStr::from_encoded_bytes_unchecked(stem) })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strips the suffix from a UTF-8 name.
    fn strip(name: &str) -> Option<&str> {
        executable_name(OsStr::new(name)).and_then(OsStr::to_str)
    }

    /// Tests that the suffix is stripped from a plain source name.
    #[test]
    fn test_strip_suffix() {
        assert_eq!(strip("calculator.rs"), Some("calculator"));
        assert_eq!(strip("linked-list.rs"), Some("linked-list"));
    }

    /// Tests that `.rs` in the middle of a name is not a match.
    #[test]
    fn test_suffix_is_anchored() {
        assert_eq!(strip("main.rs.bak"), None);
        assert_eq!(strip("notes.rst"), None);
        assert_eq!(strip("main"), None);
    }

    /// Tests that only one trailing occurrence is removed.
    #[test]
    fn test_strip_once() {
        assert_eq!(strip("main.rs.rs"), Some("main.rs"));
    }

    /// Tests that a bare `.rs` name produces an empty executable name.
    #[test]
    fn test_bare_suffix() {
        assert_eq!(strip(".rs"), Some(""));
    }

    /// Tests that the match is case sensitive.
    #[test]
    fn test_case_sensitive() {
        assert_eq!(strip("main.RS"), None);
    }

    /// Tests that non-ASCII UTF-8 names keep their stem intact.
    #[test]
    fn test_unicode_name() {
        assert_eq!(strip("café.rs"), Some("café"));
    }

    /// Tests that a name which is not valid UTF-8 is still stripped.
    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let source = OsStr::from_bytes(b"caf\xe9.rs");
        assert_eq!(
            executable_name(source),
            Some(OsStr::from_bytes(b"caf\xe9"))
        );
    }

    /// Tests that a candidate carries both names.
    #[test]
    fn test_candidate_from_source_name() {
        let candidate = Candidate::from_source_name(OsStr::new("binary-tree.rs"));
        assert_eq!(
            candidate,
            Some(Candidate {
                source_name: OsString::from("binary-tree.rs"),
                executable_name: OsString::from("binary-tree"),
            })
        );
        assert_eq!(Candidate::from_source_name(OsStr::new("Cargo.toml")), None);
    }
}
