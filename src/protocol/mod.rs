//! Binlog row-image decoding for temporal columns.

pub mod buffer;
pub mod constants;
pub mod decode;
pub mod types;

pub use buffer::ReadBuffer;
pub use decode::FractionalPrecision;
pub use types::{
    ColumnDef, DateTimeParts, FieldDescriptor, FieldType, NullableColumn, TableSchema,
    TemporalValue,
};
