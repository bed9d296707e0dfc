//! Column definitions and per-table descriptor sets.
//!
//! A table map event lists each column's type byte, a packed metadata
//! block, and a nullability bitmap. `TableSchema` turns the temporal
//! columns of such a table into descriptors, consuming the metadata block
//! column by column in declaration order.

use crate::error::Result;

use super::descriptor::FieldDescriptor;
use super::field_type::FieldType;

/// Nullability marker carried alongside a column descriptor.
///
/// Advisory only: whether a value is actually present is decided by the
/// row's null bitmap before the descriptor is consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NullableColumn {
    #[default]
    Nullable,
    NotNullable,
}

impl NullableColumn {
    /// Whether NULL values are allowed.
    pub fn is_nullable(self) -> bool {
        self == NullableColumn::Nullable
    }
}

impl From<bool> for NullableColumn {
    fn from(nullable: bool) -> Self {
        if nullable {
            NullableColumn::Nullable
        } else {
            NullableColumn::NotNullable
        }
    }
}

/// A column as declared by the table map event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column wire type.
    pub field_type: FieldType,
    /// Whether NULL values are allowed.
    pub nullable: NullableColumn,
}

impl ColumnDef {
    /// Create a nullable column definition.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            nullable: NullableColumn::Nullable,
        }
    }

    /// Create a column definition from the raw type byte.
    pub fn from_raw(type_num: u8, nullable: bool) -> Result<Self> {
        Ok(Self {
            field_type: FieldType::from_raw(type_num)?,
            nullable: nullable.into(),
        })
    }

    /// Set nullability.
    pub fn with_nullable(mut self, nullable: NullableColumn) -> Self {
        self.nullable = nullable;
        self
    }

    /// Mark the column NOT NULL.
    pub fn not_null(self) -> Self {
        self.with_nullable(NullableColumn::NotNullable)
    }
}

/// Ordered descriptors for the temporal columns of one table.
///
/// Replaced wholesale when a new table map event for the table arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    descriptors: Vec<FieldDescriptor>,
}

impl TableSchema {
    /// Build descriptors for `columns`, reading precision bytes from `metadata`.
    ///
    /// Returns the schema and whatever metadata was left unread.
    pub fn from_columns<'a>(
        columns: &[ColumnDef],
        metadata: &'a [u8],
    ) -> Result<(Self, &'a [u8])> {
        let mut descriptors = Vec::with_capacity(columns.len());
        let mut remaining = metadata;
        for column in columns {
            let (descriptor, rest) =
                FieldDescriptor::new(column.field_type, column.nullable, remaining)?;
            descriptors.push(descriptor);
            remaining = rest;
        }
        Ok((Self { descriptors }, remaining))
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Get descriptor by column index.
    pub fn get(&self, index: usize) -> Option<&FieldDescriptor> {
        self.descriptors.get(index)
    }

    /// All descriptors in declaration order.
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Iterate over descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.descriptors.iter()
    }

    /// Total row-image width of all columns.
    pub fn needed_bytes(&self) -> usize {
        self.descriptors.iter().map(|d| d.needed_bytes()).sum()
    }
}

impl<'a> IntoIterator for &'a TableSchema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn make_test_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new(FieldType::Date).not_null(),
            ColumnDef::new(FieldType::DateTime2),
            ColumnDef::new(FieldType::Year),
            ColumnDef::new(FieldType::Time2).not_null(),
        ]
    }

    #[test]
    fn test_nullable_column_from_bool() {
        assert_eq!(NullableColumn::from(true), NullableColumn::Nullable);
        assert_eq!(NullableColumn::from(false), NullableColumn::NotNullable);
        assert!(NullableColumn::default().is_nullable());
    }

    #[test]
    fn test_column_def_from_raw() {
        let col = ColumnDef::from_raw(18, false).unwrap();
        assert_eq!(col.field_type, FieldType::DateTime2);
        assert_eq!(col.nullable, NullableColumn::NotNullable);

        assert!(matches!(
            ColumnDef::from_raw(3, true),
            Err(Error::UnsupportedType { type_num: 3 })
        ));
    }

    #[test]
    fn test_table_schema_from_columns() {
        let metadata = [6u8, 0, 0xEE];
        let (schema, rest) = TableSchema::from_columns(&make_test_columns(), &metadata).unwrap();

        assert_eq!(rest, &[0xEE]);
        assert_eq!(schema.len(), 4);
        assert!(!schema.get(0).unwrap().is_nullable());
        assert_eq!(schema.get(1).unwrap().needed_bytes(), 8);
        assert_eq!(schema.get(3).unwrap().needed_bytes(), 3);
        assert_eq!(schema.needed_bytes(), 3 + 8 + 1 + 3);

        let types: Vec<FieldType> = schema.iter().map(|d| d.field_type()).collect();
        assert_eq!(
            types,
            vec![
                FieldType::Date,
                FieldType::DateTime2,
                FieldType::Year,
                FieldType::Time2
            ]
        );
    }

    #[test]
    fn test_table_schema_metadata_exhausted() {
        let err = TableSchema::from_columns(&make_test_columns(), &[6]).unwrap_err();
        assert_eq!(
            err,
            Error::MetadataTooShort {
                field_type: FieldType::Time2
            }
        );
    }

    #[test]
    fn test_table_schema_empty() {
        let (schema, rest) = TableSchema::from_columns(&[], &[1, 2]).unwrap();
        assert!(schema.is_empty());
        assert_eq!(rest, &[1, 2]);
    }
}
