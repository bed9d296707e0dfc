//! Fractional-second handling shared by TIME2, TIMESTAMP2 and DATETIME2.
//!
//! Each of these types is a fixed-width packed integer followed by 0 to 3
//! big-endian bytes of fractional seconds. The number of trailing bytes is
//! derived from the precision byte in the table map metadata:
//!
//! | Precision | Extra bytes | Scale to microseconds |
//! |-----------|-------------|-----------------------|
//! | 0         | 0           | -                     |
//! | 1, 2      | 1           | x 10,000              |
//! | 3, 4      | 2           | x 100                 |
//! | 5, 6      | 3           | x 1                   |

use crate::error::{Error, Result};
use crate::protocol::buffer::{be_i16, be_i24, be_i8, read_array, read_slice};
use crate::protocol::constants::MAX_FRACTIONAL_PRECISION;
use crate::protocol::types::FieldType;

/// Fractional-second precision (0-6) of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FractionalPrecision(u8);

impl FractionalPrecision {
    /// Returns `None` if `precision` is above 6.
    pub fn new(precision: u8) -> Option<Self> {
        (precision <= MAX_FRACTIONAL_PRECISION).then_some(Self(precision))
    }

    /// Consume the precision byte for `field_type` from the metadata stream.
    ///
    /// Returns the precision and the rest of the metadata.
    pub fn from_metadata(field_type: FieldType, metadata: &[u8]) -> Result<(Self, &[u8])> {
        let (&precision, remaining) = metadata
            .split_first()
            .ok_or(Error::MetadataTooShort { field_type })?;
        let precision = Self::new(precision).ok_or(Error::InvalidPrecision {
            field_type,
            precision,
        })?;
        Ok((precision, remaining))
    }

    /// The precision as stored in metadata.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Number of fractional bytes following the fixed part.
    pub fn extra_bytes(self) -> usize {
        (usize::from(self.0) + 1) / 2
    }

    /// Interpret the trailing fractional bytes as microseconds.
    fn fraction_micros(self, bytes: &[u8]) -> i32 {
        debug_assert_eq!(bytes.len(), self.extra_bytes());
        match (self.extra_bytes(), bytes) {
            (1, &[a]) => i32::from(be_i8(&[a])) * 10_000,
            (2, &[a, b]) => i32::from(be_i16(&[a, b])) * 100,
            (3, &[a, b, c]) => be_i24(&[a, b, c]),
            _ => 0,
        }
    }

    /// Read one value: the `N`-byte fixed part, the fraction in
    /// microseconds, and the unread remainder.
    #[track_caller]
    pub fn read<const N: usize>(self, data: &[u8]) -> Result<(&[u8; N], i32, &[u8])> {
        let (raw, remaining) = read_slice(data, N + self.extra_bytes())?;
        let (fixed, fraction) = read_array::<N>(raw)?;
        Ok((fixed, self.fraction_micros(fraction), remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_bytes() {
        let expected = [0, 1, 1, 2, 2, 3, 3];
        for (p, want) in expected.iter().enumerate() {
            let fsp = FractionalPrecision::new(p as u8).unwrap();
            assert_eq!(fsp.extra_bytes(), *want, "precision {}", p);
            assert_eq!(fsp.value(), p as u8);
        }
    }

    #[test]
    fn test_new_rejects_above_six() {
        assert!(FractionalPrecision::new(6).is_some());
        assert!(FractionalPrecision::new(7).is_none());
        assert!(FractionalPrecision::new(255).is_none());
    }

    #[test]
    fn test_from_metadata() {
        let meta = [3u8, 6, 0];
        let (fsp, rest) = FractionalPrecision::from_metadata(FieldType::Time2, &meta).unwrap();
        assert_eq!(fsp.value(), 3);
        assert_eq!(rest, &[6, 0]);
    }

    #[test]
    fn test_from_metadata_empty() {
        let err = FractionalPrecision::from_metadata(FieldType::DateTime2, &[]).unwrap_err();
        assert_eq!(
            err,
            Error::MetadataTooShort {
                field_type: FieldType::DateTime2
            }
        );
    }

    #[test]
    fn test_from_metadata_invalid() {
        let err = FractionalPrecision::from_metadata(FieldType::Timestamp2, &[9]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPrecision {
                field_type: FieldType::Timestamp2,
                precision: 9
            }
        );
    }

    #[test]
    fn test_fraction_micros_scaling() {
        let p2 = FractionalPrecision::new(2).unwrap();
        assert_eq!(p2.fraction_micros(&[12]), 120_000);

        let p4 = FractionalPrecision::new(4).unwrap();
        assert_eq!(p4.fraction_micros(&[0x01, 0xF4]), 50_000);

        let p6 = FractionalPrecision::new(6).unwrap();
        assert_eq!(p6.fraction_micros(&[0x0F, 0x42, 0x3F]), 999_999);

        let p0 = FractionalPrecision::new(0).unwrap();
        assert_eq!(p0.fraction_micros(&[]), 0);
    }

    #[test]
    fn test_fraction_is_signed() {
        let p1 = FractionalPrecision::new(1).unwrap();
        assert_eq!(p1.fraction_micros(&[0xFF]), -10_000);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_fraction_width_must_match_precision() {
        let p6 = FractionalPrecision::new(6).unwrap();
        p6.fraction_micros(&[0x01]);
    }

    #[test]
    fn test_read_splits_fixed_and_fraction() {
        let fsp = FractionalPrecision::new(3).unwrap();
        let data = [0xAA, 0xBB, 0xCC, 0x00, 0x07, 0xEE];
        let (fixed, usec, rest) = fsp.read::<3>(&data).unwrap();
        assert_eq!(fixed, &[0xAA, 0xBB, 0xCC]);
        assert_eq!(usec, 700);
        assert_eq!(rest, &[0xEE]);
    }

    #[test]
    fn test_read_truncated() {
        let fsp = FractionalPrecision::new(6).unwrap();
        match fsp.read::<5>(&[0u8; 7]) {
            Err(Error::TruncatedBuffer {
                needed, available, ..
            }) => {
                assert_eq!(needed, 8);
                assert_eq!(available, 7);
            }
            other => panic!("Expected TruncatedBuffer, got {:?}", other),
        }
    }
}
