//! TIME and TIME2 decoders.
//!
//! TIME (legacy) is a 3-byte little-endian integer holding `HHMMSS` in
//! decimal, with zero standing for the `00:00:00` placeholder.
//!
//! TIME2 is a 3-byte big-endian bit field followed by the fractional bytes:
//! - bits [23:12]: hour (10 bits used)
//! - bits [11:6]: minute
//! - bits [5:0]: second
//!
//! The fixed part is unpacked as-is. Negative durations are stored by the
//! server relative to a centering offset, which is not removed here: the
//! raw bit fields come back unchanged.

use crate::protocol::buffer::{be_u24, le_u24};
use crate::protocol::types::{DateTimeParts, TemporalValue};

/// Decode a legacy TIME column.
pub fn decode_time(data: &[u8; 3]) -> TemporalValue {
    let packed = le_u24(data);
    if packed == 0 {
        return TemporalValue::ZeroTime;
    }
    TemporalValue::Time(DateTimeParts::time(
        packed / 10000,
        (packed % 10000 / 100) as u8,
        (packed % 100) as u8,
        0,
    ))
}

/// Decode a TIME2 column from its fixed part and fraction in microseconds.
///
/// A negative fraction is carried into the whole seconds.
pub fn decode_time2(fixed: &[u8; 3], microsecond: i32) -> TemporalValue {
    let hms = be_u24(fixed);
    let hour = (hms >> 12) % (1 << 10);
    let minute = (hms >> 6) % (1 << 6);
    let second = hms % (1 << 6);
    TemporalValue::Time(DateTimeParts::time(
        hour,
        minute as u8,
        second as u8,
        microsecond,
    )
    .carry_fraction())
}
