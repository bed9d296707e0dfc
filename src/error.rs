//! Error types for binlog temporal decoding.

use std::panic::Location;
use thiserror::Error;

use crate::protocol::types::FieldType;

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for descriptor construction and value decoding.
///
/// None of these are recoverable locally: temporal fields carry no
/// self-delimiting marker, so the caller has to abandon the current event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer bytes remain than the encoding requires.
    #[error("Buffer truncated: need {needed} bytes, have {available} (read at {location})")]
    TruncatedBuffer {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// A fractional-second type was constructed from an empty metadata slice.
    #[error("Metadata has too few bytes for {field_type}")]
    MetadataTooShort { field_type: FieldType },

    /// The metadata precision byte is outside 0..=6.
    #[error("Invalid fractional-second precision {precision} for {field_type} (expected 0-6)")]
    InvalidPrecision { field_type: FieldType, precision: u8 },

    /// The wire type tag is not one of the temporal types.
    #[error("Unsupported temporal field type: {type_num}")]
    UnsupportedType { type_num: u8 },
}

impl Error {
    /// Create a truncated-buffer error recorded at the caller's location.
    #[track_caller]
    pub fn truncated(needed: usize, available: usize) -> Self {
        Self::TruncatedBuffer {
            needed,
            available,
            location: Location::caller(),
        }
    }

    /// Whether this error came from a short row buffer rather than bad schema metadata.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::TruncatedBuffer { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_message() {
        let err = Error::truncated(5, 2);
        assert!(err.is_truncated());
        let msg = err.to_string();
        assert!(msg.starts_with("Buffer truncated: need 5 bytes, have 2"));
        assert!(msg.contains("error.rs"));
    }

    #[test]
    fn test_invalid_precision_message() {
        let err = Error::InvalidPrecision {
            field_type: FieldType::DateTime2,
            precision: 7,
        };
        assert!(!err.is_truncated());
        assert_eq!(
            err.to_string(),
            "Invalid fractional-second precision 7 for DATETIME2 (expected 0-6)"
        );
    }
}
