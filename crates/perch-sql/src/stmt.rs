mod batch_upsert;
pub use batch_upsert::BatchUpsert;

pub mod clause;

mod fragment;
pub use fragment::{Conditional, Fragment, List, ParamRef, ParamScope};

mod name;
pub use name::Name;

mod upsert;
pub use upsert::Upsert;

mod upsert_selective;
pub use upsert_selective::UpsertSelective;

pub use perch_core::stmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Upsert(Upsert),
    UpsertSelective(UpsertSelective),
    BatchUpsert(BatchUpsert),
}

impl Statement {
    /// The statement's host-facing name, used as the mapper method and
    /// statement id.
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Upsert(_) => "upsert",
            Statement::UpsertSelective(_) => "upsertSelective",
            Statement::BatchUpsert(_) => "batchUpsert",
        }
    }
}
