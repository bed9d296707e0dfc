//! Temporal column types, descriptors and decoded values.

mod column;
mod descriptor;
mod field_type;
mod value;

pub use column::{ColumnDef, NullableColumn, TableSchema};
pub use descriptor::FieldDescriptor;
pub use field_type::FieldType;
pub use value::{DateTimeParts, TemporalValue};
