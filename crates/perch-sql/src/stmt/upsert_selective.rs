use super::*;

use perch_core::schema::Table;

/// Null-aware upsert: the only variant that tolerates partially-populated
/// records.
///
/// The identifier, value and assignment clauses are derived from the same
/// column sequence, so a given record's null-pattern includes the same
/// columns at the same relative positions in all three. Large-object
/// columns are eligible here.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertSelective {
    /// Qualified name of the target table
    pub table: Name,

    /// Guarded insert-column clause
    pub columns: Fragment,

    /// Guarded value clause, mirroring `columns`
    pub values: Fragment,

    /// Guarded `identifier = placeholder` clause, rendered after the value
    /// clause
    pub assignments: Fragment,
}

impl UpsertSelective {
    pub fn from_table(table: &Table) -> UpsertSelective {
        UpsertSelective {
            table: Name::from(&table.name),
            columns: clause::selective_identifier_list(table.writable_columns()),
            values: clause::selective_value_list(table.writable_columns()),
            assignments: clause::selective_assignment_list(table.writable_columns()),
        }
    }
}

impl Statement {
    pub fn upsert_selective(table: &Table) -> Self {
        UpsertSelective::from_table(table).into()
    }
}

impl From<UpsertSelective> for Statement {
    fn from(value: UpsertSelective) -> Self {
        Self::UpsertSelective(value)
    }
}
