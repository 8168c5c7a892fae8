use crate::MapperMethod;

use perch_core::schema::Table;
use perch_sql::stmt::{BatchUpsert, UpsertSelective};

/// Interception points run before a variant is attached to the mapper.
///
/// A hook may mutate the candidate method and statement in place, or return
/// `false` to veto the variant. A vetoed variant is omitted entirely — both
/// its method and its statement — without affecting the other variants. The
/// plain `upsert` variant is always attached and is not subject to veto.
pub trait UpsertHook {
    fn upsert_selective(
        &self,
        method: &mut MapperMethod,
        statement: &mut UpsertSelective,
        table: &Table,
    ) -> bool {
        let _ = (method, statement, table);
        true
    }

    fn batch_upsert(
        &self,
        method: &mut MapperMethod,
        statement: &mut BatchUpsert,
        table: &Table,
    ) -> bool {
        let _ = (method, statement, table);
        true
    }
}

/// The hook used when the caller installs none: accepts every variant
/// unchanged.
#[derive(Debug, Default)]
pub struct AcceptAll;

impl UpsertHook for AcceptAll {}
