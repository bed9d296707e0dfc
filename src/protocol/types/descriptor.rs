//! Per-column field descriptors.
//!
//! A descriptor is built once per column when the table map is seen and then
//! reused for every row image of that table. It is `Copy`, holds no
//! references and never changes after construction, so one descriptor set can
//! be shared freely across threads decoding different events.

use tracing::{event, Level};

use crate::error::Result;
use crate::protocol::buffer::read_array;
use crate::protocol::constants::{
    DATETIME2_FIXED_SIZE, DATETIME_SIZE, DATE_SIZE, TIME2_FIXED_SIZE, TIMESTAMP2_FIXED_SIZE,
    TIMESTAMP_SIZE, TIME_SIZE, YEAR_SIZE,
};
use crate::protocol::decode::{
    decode_date, decode_datetime, decode_datetime2, decode_time, decode_time2, decode_timestamp,
    decode_timestamp2, decode_year, FractionalPrecision,
};

use super::column::NullableColumn;
use super::field_type::FieldType;
use super::value::TemporalValue;

/// How the column's bytes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Codec {
    Year,
    Date,
    Time,
    Timestamp,
    DateTime,
    Time2(FractionalPrecision),
    Timestamp2(FractionalPrecision),
    DateTime2(FractionalPrecision),
}

/// Parser for one temporal column of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    nullable: NullableColumn,
    codec: Codec,
}

impl FieldDescriptor {
    /// Descriptor for a YEAR column.
    pub fn year(nullable: NullableColumn) -> Self {
        Self::fixed(Codec::Year, nullable)
    }

    /// Descriptor for a DATE column.
    pub fn date(nullable: NullableColumn) -> Self {
        Self::fixed(Codec::Date, nullable)
    }

    /// Descriptor for a legacy TIME column.
    pub fn time(nullable: NullableColumn) -> Self {
        Self::fixed(Codec::Time, nullable)
    }

    /// Descriptor for a legacy TIMESTAMP column.
    pub fn timestamp(nullable: NullableColumn) -> Self {
        Self::fixed(Codec::Timestamp, nullable)
    }

    /// Descriptor for a legacy DATETIME column.
    pub fn datetime(nullable: NullableColumn) -> Self {
        Self::fixed(Codec::DateTime, nullable)
    }

    /// Descriptor for a TIME2 column.
    ///
    /// Consumes the precision byte from `metadata` and returns the rest.
    pub fn time2(nullable: NullableColumn, metadata: &[u8]) -> Result<(Self, &[u8])> {
        Self::fractional(FieldType::Time2, Codec::Time2, nullable, metadata)
    }

    /// Descriptor for a TIMESTAMP2 column.
    ///
    /// Consumes the precision byte from `metadata` and returns the rest.
    pub fn timestamp2(nullable: NullableColumn, metadata: &[u8]) -> Result<(Self, &[u8])> {
        Self::fractional(FieldType::Timestamp2, Codec::Timestamp2, nullable, metadata)
    }

    /// Descriptor for a DATETIME2 column.
    ///
    /// Consumes the precision byte from `metadata` and returns the rest.
    pub fn datetime2(nullable: NullableColumn, metadata: &[u8]) -> Result<(Self, &[u8])> {
        Self::fractional(FieldType::DateTime2, Codec::DateTime2, nullable, metadata)
    }

    /// Descriptor for any temporal column type.
    ///
    /// Legacy types carry no metadata and return `metadata` untouched.
    ///
    /// # Errors
    /// `Error::MetadataTooShort` or `Error::InvalidPrecision` for the
    /// fractional-second types.
    pub fn new(
        field_type: FieldType,
        nullable: NullableColumn,
        metadata: &[u8],
    ) -> Result<(Self, &[u8])> {
        match field_type {
            FieldType::Year => Ok((Self::year(nullable), metadata)),
            FieldType::Date => Ok((Self::date(nullable), metadata)),
            FieldType::Time => Ok((Self::time(nullable), metadata)),
            FieldType::Timestamp => Ok((Self::timestamp(nullable), metadata)),
            FieldType::DateTime => Ok((Self::datetime(nullable), metadata)),
            FieldType::Time2 => Self::time2(nullable, metadata),
            FieldType::Timestamp2 => Self::timestamp2(nullable, metadata),
            FieldType::DateTime2 => Self::datetime2(nullable, metadata),
        }
    }

    fn fixed(codec: Codec, nullable: NullableColumn) -> Self {
        let descriptor = Self { nullable, codec };
        event!(
            Level::TRACE,
            field_type = %descriptor.field_type(),
            nullable = descriptor.is_nullable(),
            "created field descriptor"
        );
        descriptor
    }

    fn fractional(
        field_type: FieldType,
        codec: fn(FractionalPrecision) -> Codec,
        nullable: NullableColumn,
        metadata: &[u8],
    ) -> Result<(Self, &[u8])> {
        let (precision, remaining) = FractionalPrecision::from_metadata(field_type, metadata)?;
        let descriptor = Self {
            nullable,
            codec: codec(precision),
        };
        event!(
            Level::TRACE,
            %field_type,
            nullable = descriptor.is_nullable(),
            precision = precision.value(),
            needed_bytes = descriptor.needed_bytes(),
            "created field descriptor"
        );
        Ok((descriptor, remaining))
    }

    /// The column's wire type.
    pub fn field_type(&self) -> FieldType {
        match self.codec {
            Codec::Year => FieldType::Year,
            Codec::Date => FieldType::Date,
            Codec::Time => FieldType::Time,
            Codec::Timestamp => FieldType::Timestamp,
            Codec::DateTime => FieldType::DateTime,
            Codec::Time2(_) => FieldType::Time2,
            Codec::Timestamp2(_) => FieldType::Timestamp2,
            Codec::DateTime2(_) => FieldType::DateTime2,
        }
    }

    /// The column's nullability marker.
    pub fn nullable(&self) -> NullableColumn {
        self.nullable
    }

    /// Whether the column may be NULL. Advisory only; decoding ignores it.
    pub fn is_nullable(&self) -> bool {
        self.nullable.is_nullable()
    }

    /// Fractional-second precision, for the `*2` types.
    pub fn precision(&self) -> Option<FractionalPrecision> {
        match self.codec {
            Codec::Time2(p) | Codec::Timestamp2(p) | Codec::DateTime2(p) => Some(p),
            _ => None,
        }
    }

    /// Exact number of bytes one value occupies in the row image.
    pub fn needed_bytes(&self) -> usize {
        self.field_type().fixed_size() + self.precision().map_or(0, |p| p.extra_bytes())
    }

    /// Decode the next value from `data`.
    ///
    /// Returns the value and the bytes after it. Nothing is consumed on error.
    ///
    /// # Errors
    /// `Error::TruncatedBuffer` if `data` is shorter than `needed_bytes()`.
    #[track_caller]
    pub fn parse_value<'a>(&self, data: &'a [u8]) -> Result<(TemporalValue, &'a [u8])> {
        let (value, remaining) = match self.codec {
            Codec::Year => {
                let (b, rest) = read_array::<YEAR_SIZE>(data)?;
                (decode_year(b), rest)
            }
            Codec::Date => {
                let (b, rest) = read_array::<DATE_SIZE>(data)?;
                (decode_date(b), rest)
            }
            Codec::Time => {
                let (b, rest) = read_array::<TIME_SIZE>(data)?;
                (decode_time(b), rest)
            }
            Codec::Timestamp => {
                let (b, rest) = read_array::<TIMESTAMP_SIZE>(data)?;
                (decode_timestamp(b), rest)
            }
            Codec::DateTime => {
                let (b, rest) = read_array::<DATETIME_SIZE>(data)?;
                (decode_datetime(b), rest)
            }
            Codec::Time2(p) => {
                let (fixed, usec, rest) = p.read::<TIME2_FIXED_SIZE>(data)?;
                (decode_time2(fixed, usec), rest)
            }
            Codec::Timestamp2(p) => {
                let (fixed, usec, rest) = p.read::<TIMESTAMP2_FIXED_SIZE>(data)?;
                (decode_timestamp2(fixed, usec), rest)
            }
            Codec::DateTime2(p) => {
                let (fixed, usec, rest) = p.read::<DATETIME2_FIXED_SIZE>(data)?;
                (decode_datetime2(fixed, usec), rest)
            }
        };

        event!(
            Level::TRACE,
            field_type = %self.field_type(),
            consumed = data.len() - remaining.len(),
            "decoded temporal value"
        );
        Ok((value, remaining))
    }
}
