//! Binlog wire constants for temporal columns.
//!
//! Type numbers match the column type bytes carried by the table map event.

// Column type numbers
pub const MYSQL_TYPE_TIMESTAMP: u8 = 7;
pub const MYSQL_TYPE_DATE: u8 = 10;
pub const MYSQL_TYPE_TIME: u8 = 11;
pub const MYSQL_TYPE_DATETIME: u8 = 12;
pub const MYSQL_TYPE_YEAR: u8 = 13;
pub const MYSQL_TYPE_TIMESTAMP2: u8 = 17;
pub const MYSQL_TYPE_DATETIME2: u8 = 18;
pub const MYSQL_TYPE_TIME2: u8 = 19;

// Legacy fixed widths
pub const YEAR_SIZE: usize = 1;
pub const DATE_SIZE: usize = 3;
pub const TIME_SIZE: usize = 3;
pub const TIMESTAMP_SIZE: usize = 4;
pub const DATETIME_SIZE: usize = 8;

// Fixed part widths of the fractional-second encodings
pub const TIME2_FIXED_SIZE: usize = 3;
pub const TIMESTAMP2_FIXED_SIZE: usize = 4;
pub const DATETIME2_FIXED_SIZE: usize = 5;

/// YEAR is stored as an offset from this year.
pub const YEAR_BASE: u32 = 1900;

/// Sign-centering offset of the packed DATETIME2 integer (DATETIMEF_INT_OFS).
pub const DATETIMEF_INT_OFS: u64 = 0x80_0000_0000;

/// Largest supported fractional-second precision.
pub const MAX_FRACTIONAL_PRECISION: u8 = 6;
