//! Temporal column wire types.
//!
//! Only the temporal subset of the binlog column types is represented here;
//! every other type tag is rejected with `Error::UnsupportedType`.
//!
//! Note: Nullability is a column property, not a type property.

use crate::error::{Error, Result};
use crate::protocol::constants::{
    DATETIME2_FIXED_SIZE, DATETIME_SIZE, DATE_SIZE, MYSQL_TYPE_DATE, MYSQL_TYPE_DATETIME,
    MYSQL_TYPE_DATETIME2, MYSQL_TYPE_TIME, MYSQL_TYPE_TIME2, MYSQL_TYPE_TIMESTAMP,
    MYSQL_TYPE_TIMESTAMP2, MYSQL_TYPE_YEAR, TIME2_FIXED_SIZE, TIMESTAMP2_FIXED_SIZE,
    TIMESTAMP_SIZE, TIME_SIZE, YEAR_SIZE,
};

/// Temporal column type as tagged in the table map event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// YEAR - one byte offset from 1900.
    Year,
    /// DATE - packed day/month/year, 3 bytes.
    Date,
    /// TIME - legacy decimal-packed HHMMSS, 3 bytes.
    Time,
    /// TIMESTAMP - legacy seconds since epoch, 4 bytes.
    Timestamp,
    /// DATETIME - legacy decimal-packed YYYYMMDDHHMMSS, 8 bytes.
    DateTime,
    /// TIME2 - bit-packed time with fractional seconds.
    Time2,
    /// TIMESTAMP2 - big-endian seconds with fractional seconds.
    Timestamp2,
    /// DATETIME2 - bit-packed datetime with fractional seconds.
    DateTime2,
}

impl FieldType {
    /// Create from the raw column type byte.
    ///
    /// Returns `Err(Error::UnsupportedType)` for non-temporal types.
    pub fn from_raw(type_num: u8) -> Result<Self> {
        match type_num {
            MYSQL_TYPE_YEAR => Ok(FieldType::Year),
            MYSQL_TYPE_DATE => Ok(FieldType::Date),
            MYSQL_TYPE_TIME => Ok(FieldType::Time),
            MYSQL_TYPE_TIMESTAMP => Ok(FieldType::Timestamp),
            MYSQL_TYPE_DATETIME => Ok(FieldType::DateTime),
            MYSQL_TYPE_TIME2 => Ok(FieldType::Time2),
            MYSQL_TYPE_TIMESTAMP2 => Ok(FieldType::Timestamp2),
            MYSQL_TYPE_DATETIME2 => Ok(FieldType::DateTime2),
            _ => Err(Error::UnsupportedType { type_num }),
        }
    }

    /// Get the raw column type byte.
    pub fn type_num(&self) -> u8 {
        match self {
            FieldType::Year => MYSQL_TYPE_YEAR,
            FieldType::Date => MYSQL_TYPE_DATE,
            FieldType::Time => MYSQL_TYPE_TIME,
            FieldType::Timestamp => MYSQL_TYPE_TIMESTAMP,
            FieldType::DateTime => MYSQL_TYPE_DATETIME,
            FieldType::Time2 => MYSQL_TYPE_TIME2,
            FieldType::Timestamp2 => MYSQL_TYPE_TIMESTAMP2,
            FieldType::DateTime2 => MYSQL_TYPE_DATETIME2,
        }
    }

    /// Whether the type carries a precision byte in the table map metadata.
    pub fn is_fractional(&self) -> bool {
        matches!(
            self,
            FieldType::Time2 | FieldType::Timestamp2 | FieldType::DateTime2
        )
    }

    /// Width of the fixed part in bytes, excluding any fractional bytes.
    pub fn fixed_size(&self) -> usize {
        match self {
            FieldType::Year => YEAR_SIZE,
            FieldType::Date => DATE_SIZE,
            FieldType::Time => TIME_SIZE,
            FieldType::Timestamp => TIMESTAMP_SIZE,
            FieldType::DateTime => DATETIME_SIZE,
            FieldType::Time2 => TIME2_FIXED_SIZE,
            FieldType::Timestamp2 => TIMESTAMP2_FIXED_SIZE,
            FieldType::DateTime2 => DATETIME2_FIXED_SIZE,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Year => write!(f, "YEAR"),
            FieldType::Date => write!(f, "DATE"),
            FieldType::Time => write!(f, "TIME"),
            FieldType::Timestamp => write!(f, "TIMESTAMP"),
            FieldType::DateTime => write!(f, "DATETIME"),
            FieldType::Time2 => write!(f, "TIME2"),
            FieldType::Timestamp2 => write!(f, "TIMESTAMP2"),
            FieldType::DateTime2 => write!(f, "DATETIME2"),
        }
    }
}
