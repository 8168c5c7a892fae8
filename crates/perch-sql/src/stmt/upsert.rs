use super::*;

use perch_core::schema::Table;

/// Full-record upsert: every eligible column is always present, so the
/// clauses carry no conditionality.
///
/// Large-object columns are excluded because the store's driver does not
/// support them as placeholders in this path.
#[derive(Debug, Clone, PartialEq)]
pub struct Upsert {
    /// Qualified name of the target table
    pub table: Name,

    /// Ordered insert-column clause
    pub columns: Fragment,

    /// Ordered value clause, positionally aligned with `columns`
    pub values: Fragment,
}

impl Upsert {
    pub fn from_table(table: &Table) -> Upsert {
        Upsert {
            table: Name::from(&table.name),
            columns: clause::identifier_list(table.writable_columns_without_lobs()),
            values: clause::placeholder_list(table.writable_columns_without_lobs()),
        }
    }
}

impl Statement {
    pub fn upsert(table: &Table) -> Self {
        Upsert::from_table(table).into()
    }
}

impl From<Upsert> for Statement {
    fn from(value: Upsert) -> Self {
        Self::Upsert(value)
    }
}
