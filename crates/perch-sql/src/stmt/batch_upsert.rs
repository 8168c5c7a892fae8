use super::*;

use perch_core::schema::Table;

/// Multi-row upsert expressed as a single statement.
///
/// The store has no native multi-row insert syntax, so N rows are written
/// as N `select` projections joined by ` union all ` feeding one upsert
/// target. The projection is a template; the serializer expands it once per
/// input row.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchUpsert {
    /// Qualified name of the target table
    pub table: Name,

    /// Ordered insert-column clause
    pub columns: Fragment,

    /// Per-row value projection, positionally aligned with `columns`
    pub projection: Fragment,
}

impl BatchUpsert {
    pub fn from_table(table: &Table) -> BatchUpsert {
        BatchUpsert {
            table: Name::from(&table.name),
            columns: clause::identifier_list(table.writable_columns_without_lobs()),
            projection: clause::row_projection(table.writable_columns_without_lobs()),
        }
    }
}

impl Statement {
    pub fn batch_upsert(table: &Table) -> Self {
        BatchUpsert::from_table(table).into()
    }
}

impl From<BatchUpsert> for Statement {
    fn from(value: BatchUpsert) -> Self {
        Self::BatchUpsert(value)
    }
}
