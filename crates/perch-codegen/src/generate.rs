use crate::{MapperMethod, UpsertHook};

use perch_core::{driver::Capability, schema::Table, Error, Result};
use perch_sql::stmt::{BatchUpsert, Statement, Upsert, UpsertSelective};

use tracing::debug;

/// Everything generated for one table: method contracts and the statement
/// bodies they execute, in matching order. The host renderer merges both
/// into its output artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapper {
    pub methods: Vec<MapperMethod>,
    pub statements: Vec<Statement>,
}

/// Generates the upsert mapper for `table` against the store described by
/// `capability`, running `hook` before the selective and batch variants are
/// attached.
///
/// Synthesis is pure over its inputs: tables can be processed in parallel
/// by the caller, and a failure aborts this table only.
pub fn generate(table: &Table, capability: &Capability, hook: &dyn UpsertHook) -> Result<Mapper> {
    // The engine targets upsert-speaking stores only; anything else is a
    // configuration mismatch, not a degraded mode.
    if !capability.upsert_into {
        return Err(Error::unsupported_feature(format!(
            "store profile for table `{}` does not speak `upsert into`",
            table.name
        )));
    }

    let mut methods = Vec::with_capacity(3);
    let mut statements = Vec::with_capacity(3);

    methods.push(MapperMethod::upsert());
    statements.push(Statement::from(Upsert::from_table(table)));
    debug!(table = %table.name, "attached upsert variant");

    let mut method = MapperMethod::upsert_selective();
    let mut statement = UpsertSelective::from_table(table);
    if hook.upsert_selective(&mut method, &mut statement, table) {
        methods.push(method);
        statements.push(statement.into());
        debug!(table = %table.name, "attached upsertSelective variant");
    } else {
        debug!(table = %table.name, "hook vetoed upsertSelective variant");
    }

    let mut method = MapperMethod::batch_upsert();
    let mut statement = BatchUpsert::from_table(table);
    if hook.batch_upsert(&mut method, &mut statement, table) {
        methods.push(method);
        statements.push(statement.into());
        debug!(table = %table.name, "attached batchUpsert variant");
    } else {
        debug!(table = %table.name, "hook vetoed batchUpsert variant");
    }

    Ok(Mapper {
        methods,
        statements,
    })
}
