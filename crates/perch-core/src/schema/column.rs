use super::Type;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column within its table.
    pub id: ColumnId,

    /// The store-side identifier of the column.
    pub name: String,

    /// The host-language property the column binds against at execution
    /// time.
    pub property: String,

    /// The store storage type of the column.
    pub storage_ty: Type,

    /// Whether or not the column is nullable.
    pub nullable: bool,

    /// True if the store computes this column's value itself. Such columns
    /// are never written by an upsert.
    pub generated_always: bool,

    /// True if the column holds a large object. The store's driver cannot
    /// bind large objects as placeholders in the full and batch paths.
    pub large_object: bool,

    /// True if the column is part of the table's primary key.
    pub primary_key: bool,
}

/// Position of a column in its table's declaration order.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId(pub usize);

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({})", self.0)
    }
}
