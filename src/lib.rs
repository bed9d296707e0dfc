//! Temporal column decoding for MySQL binlog row events.
//!
//! Turns the row-image bytes of YEAR, DATE, TIME, TIMESTAMP, DATETIME and
//! their fractional-second `*2` variants into structured values. Column
//! types and metadata come from the table map event; this crate builds one
//! [`FieldDescriptor`] per column and each descriptor consumes exactly one
//! value's worth of bytes per call.
//!
//! # Example
//!
//! ```
//! use mysql_binlog_temporal::{ColumnDef, FieldType, Result, TableSchema};
//!
//! fn main() -> Result<()> {
//!     // DATETIME2(0) followed by YEAR; one metadata byte for the DATETIME2.
//!     let columns = [
//!         ColumnDef::new(FieldType::DateTime2).not_null(),
//!         ColumnDef::new(FieldType::Year),
//!     ];
//!     let (schema, _) = TableSchema::from_columns(&columns, &[0])?;
//!
//!     let row = [0x99, 0xA6, 0x9E, 0xC7, 0x80, 120];
//!     let mut cursor = &row[..];
//!     for descriptor in &schema {
//!         let (value, rest) = descriptor.parse_value(cursor)?;
//!         println!("{}: {}", descriptor.field_type(), value);
//!         cursor = rest;
//!     }
//!     assert!(cursor.is_empty());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;

// Re-export main types
pub use error::{Error, Result};
pub use protocol::buffer::ReadBuffer;
pub use protocol::decode::FractionalPrecision;
pub use protocol::types::{
    ColumnDef, DateTimeParts, FieldDescriptor, FieldType, NullableColumn, TableSchema,
    TemporalValue,
};
