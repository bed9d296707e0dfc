//! YEAR and DATE decoders.
//!
//! YEAR is a single byte holding the offset from 1900.
//!
//! DATE is a 3-byte little-endian integer with the calendar fields packed as
//! `year * 512 + month * 32 + day`:
//! - bits [23:9]: year
//! - bits [8:5]: month
//! - bits [4:0]: day
//!
//! An all-zero DATE is the `0000-00-00` placeholder, not a calendar date.

use crate::protocol::buffer::le_u24;
use crate::protocol::constants::YEAR_BASE;
use crate::protocol::types::{DateTimeParts, TemporalValue};

/// Decode a YEAR column.
pub fn decode_year(data: &[u8; 1]) -> TemporalValue {
    TemporalValue::Year(DateTimeParts::date(u32::from(data[0]) + YEAR_BASE, 0, 0))
}

/// Decode a DATE column.
pub fn decode_date(data: &[u8; 3]) -> TemporalValue {
    let packed = le_u24(data);
    if packed == 0 {
        return TemporalValue::ZeroDate;
    }
    TemporalValue::Date(DateTimeParts::date(
        packed / (16 * 32),
        (packed / 32 % 16) as u8,
        (packed % 32) as u8,
    ))
}
