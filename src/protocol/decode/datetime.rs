//! DATETIME and DATETIME2 decoders.
//!
//! DATETIME (legacy) is an 8-byte little-endian integer holding
//! `YYYYMMDDHHMMSS` in decimal.
//!
//! DATETIME2 is a 5-byte big-endian integer followed by the fractional bytes.
//! After removing `DATETIMEF_INT_OFS` the value is packed as:
//! - bits [39:22]: `year * 13 + month`
//! - bits [21:17]: day
//! - bits [16:12]: hour
//! - bits [11:6]: minute
//! - bits [5:0]: second

use crate::protocol::buffer::{be_u40, le_u64};
use crate::protocol::constants::DATETIMEF_INT_OFS;
use crate::protocol::types::{DateTimeParts, TemporalValue};

const UINT40_MASK: u64 = 0xFF_FFFF_FFFF;

/// Decode a legacy DATETIME column.
pub fn decode_datetime(data: &[u8; 8]) -> TemporalValue {
    let val = le_u64(data);
    let d = val / 1_000_000;
    let t = val % 1_000_000;
    TemporalValue::DateTime(
        DateTimeParts::date(
            (d / 10000) as u32,
            (d % 10000 / 100) as u8,
            (d % 100) as u8,
        )
        .with_time(
            (t / 10000) as u32,
            (t % 10000 / 100) as u8,
            (t % 100) as u8,
            0,
        ),
    )
}

/// Decode a DATETIME2 column from its fixed part and fraction in microseconds.
///
/// Packed values below the offset wrap within 40 bits. A negative fraction
/// is carried into the whole seconds.
pub fn decode_datetime2(fixed: &[u8; 5], microsecond: i32) -> TemporalValue {
    let ymdhms = be_u40(fixed).wrapping_sub(DATETIMEF_INT_OFS) & UINT40_MASK;

    let ymd = ymdhms >> 17;
    let ym = ymd >> 5;
    let hms = ymdhms % (1 << 17);

    let day = ymd % (1 << 5);
    let month = ym % 13;
    let year = ym / 13;

    let second = hms % (1 << 6);
    let minute = (hms >> 6) % (1 << 6);
    let hour = hms >> 12;

    TemporalValue::DateTime(
        DateTimeParts::date(year as u32, month as u8, day as u8).with_time(
            hour as u32,
            minute as u8,
            second as u8,
            microsecond,
        )
        .carry_fraction(),
    )
}
