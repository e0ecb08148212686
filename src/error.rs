//! Error types for engage-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in engage-viz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing error while loading the record table.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A `Likes` cell failed to parse as a non-negative integer.
    #[error("Invalid likes value {value:?} in row {row}")]
    InvalidLikes {
        /// Raw cell contents.
        value: String,
        /// 1-based data row number.
        row: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// A grouping key yielded zero distinct values for the named axis.
    #[error("Empty domain for axis {axis:?}")]
    EmptyDomain {
        /// Which categorical axis has no labels.
        axis: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyDomain { axis: "AgeGroup" };
        assert!(err.to_string().contains("AgeGroup"));
    }

    #[test]
    fn test_invalid_likes_display() {
        let err = Error::InvalidLikes {
            value: "lots".to_string(),
            row: 7,
        };
        assert!(err.to_string().contains("lots"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
