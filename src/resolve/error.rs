//! Resolution error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while turning inputs into files.
///
/// These are passed to the caller as-is: the original pattern or I/O error
/// is kept as the `source` so nothing is lost in translation.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid glob pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to read a path matched by a glob pattern")]
    Glob(#[from] glob::GlobError),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_resolve_error_display() {
        let io_err = ResolveError::Io(
            PathBuf::from("assets"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("assets"));
        assert!(io_err.source().is_some());
    }

    #[test]
    fn test_pattern_error_keeps_source() {
        let source = glob::Pattern::new("a/***").unwrap_err();
        let err = ResolveError::Pattern {
            pattern: "a/***".to_string(),
            source,
        };
        assert!(err.to_string().contains("a/***"));
        assert!(err.source().is_some());
    }
}
