//! TIMESTAMP and TIMESTAMP2 decoders.
//!
//! TIMESTAMP is a 4-byte little-endian count of seconds since the Unix epoch.
//! TIMESTAMP2 is a 4-byte big-endian signed count of seconds followed by the
//! fractional bytes. Both decode to a UTC instant.

use crate::protocol::buffer::{be_i32, le_u32};
use crate::protocol::types::TemporalValue;
use chrono::{TimeZone, Utc};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MICRO: i64 = 1_000;

/// Decode a legacy TIMESTAMP column.
pub fn decode_timestamp(data: &[u8; 4]) -> TemporalValue {
    let seconds = i64::from(le_u32(data));
    TemporalValue::Timestamp(Utc.timestamp_nanos(seconds * NANOS_PER_SECOND))
}

/// Decode a TIMESTAMP2 column from its fixed part and fraction in microseconds.
pub fn decode_timestamp2(fixed: &[u8; 4], microsecond: i32) -> TemporalValue {
    // i32 seconds scaled to nanoseconds stay well inside i64.
    let nanos = i64::from(be_i32(fixed)) * NANOS_PER_SECOND
        + i64::from(microsecond) * NANOS_PER_MICRO;
    TemporalValue::Timestamp(Utc.timestamp_nanos(nanos))
}
