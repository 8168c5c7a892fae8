use super::{Column, ColumnId};
use crate::Result;

/// A store table, loaded once per generation run and read-only afterward.
///
/// Column order is declaration order and determines clause ordering in every
/// synthesized statement; it must be stable for reproducible output.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Runtime-qualified name of the table.
    pub name: String,

    /// The table's columns, in declaration order.
    pub columns: Vec<Column>,

    pub primary_key: PrimaryKey,

    /// Non-generated-always columns, in declaration order.
    writable: Vec<ColumnId>,

    /// Non-generated-always, non-large-object columns, in declaration
    /// order.
    writable_without_lobs: Vec<ColumnId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKey {
    pub columns: Vec<ColumnId>,
}

impl Table {
    /// Builds a table from its declared columns, stamping ids by position
    /// and precomputing the writable views.
    pub fn new(name: impl Into<String>, mut columns: Vec<Column>) -> Result<Table> {
        for (index, column) in columns.iter_mut().enumerate() {
            column.id = ColumnId(index);
        }

        let primary_key = PrimaryKey {
            columns: columns
                .iter()
                .filter(|column| column.primary_key)
                .map(ColumnId::from)
                .collect(),
        };

        let writable = columns
            .iter()
            .filter(|column| !column.generated_always)
            .map(ColumnId::from)
            .collect();

        let writable_without_lobs = columns
            .iter()
            .filter(|column| !column.generated_always && !column.large_object)
            .map(ColumnId::from)
            .collect();

        let table = Table {
            name: name.into(),
            columns,
            primary_key,
            writable,
            writable_without_lobs,
        };

        table.verify()?;
        Ok(table)
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().0]
    }

    /// All columns a write may supply. Used by the selective variant, which
    /// tolerates large objects.
    pub fn writable_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.writable.iter().map(|id| &self.columns[id.0])
    }

    /// Writable columns the driver can bind as placeholders in the full and
    /// batch paths.
    pub fn writable_columns_without_lobs(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.writable_without_lobs.iter().map(|id| &self.columns[id.0])
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key.columns.iter().map(|id| &self.columns[id.0])
    }
}
