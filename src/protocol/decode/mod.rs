//! Temporal type decoders for binlog row images.
//!
//! Each decoder is a pure function over a fixed-width byte array. Slicing
//! the array off the row cursor (and reading the fractional part, for the
//! `*2` types) is done by `FieldDescriptor`.
//!
//! | Type       | Module      | Width            |
//! |------------|-------------|------------------|
//! | YEAR       | `date`      | 1                |
//! | DATE       | `date`      | 3                |
//! | TIME       | `time`      | 3                |
//! | TIME2      | `time`      | 3 + fraction     |
//! | TIMESTAMP  | `timestamp` | 4                |
//! | TIMESTAMP2 | `timestamp` | 4 + fraction     |
//! | DATETIME   | `datetime`  | 8                |
//! | DATETIME2  | `datetime`  | 5 + fraction     |

mod date;
mod datetime;
mod fraction;
mod time;
mod timestamp;

pub use date::{decode_date, decode_year};
pub use datetime::{decode_datetime, decode_datetime2};
pub use fraction::FractionalPrecision;
pub use time::{decode_time, decode_time2};
pub use timestamp::{decode_timestamp, decode_timestamp2};
