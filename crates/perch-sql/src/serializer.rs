#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Period;

mod fragment;

mod input;
pub use input::Input;

mod name;

mod params;
pub use params::{Params, Placeholder};

mod stmt;

use crate::stmt::Statement;

use perch_core::{driver::Capability, stmt::Record, Error, Result};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Capability profile of the store the statement targets. Drives
    /// placeholder style.
    capability: &'a Capability,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Record the single-record variants bind against
    record: Option<&'a Record>,

    /// Row sequence the batch variant expands over
    rows: &'a [Record],

    /// Current row while a batch block is being expanded
    row: Option<&'a Record>,
}

impl<'a> Serializer<'a> {
    pub fn new(capability: &'a Capability) -> Serializer<'a> {
        Serializer { capability }
    }

    /// Serializes against the Phoenix capability profile.
    pub fn phoenix() -> Serializer<'static> {
        Serializer {
            capability: &Capability::PHOENIX,
        }
    }

    /// Renders `stmt` against `input`, pushing each bound value through
    /// `params` in placeholder order.
    ///
    /// The single-record variants require [`Input::Record`]; the batch
    /// variant requires [`Input::Rows`].
    pub fn serialize(
        &self,
        stmt: &Statement,
        input: &Input<'_>,
        params: &mut impl Params,
    ) -> Result<String> {
        match (stmt, input) {
            (Statement::BatchUpsert(_), Input::Record(_)) => {
                return Err(Error::invalid_statement(
                    "batch upsert binds an ordered row sequence, not a single record",
                ));
            }
            (Statement::Upsert(_) | Statement::UpsertSelective(_), Input::Rows(_)) => {
                return Err(Error::invalid_statement(
                    "single-record upsert binds one record, not a row sequence",
                ));
            }
            _ => {}
        }

        let (record, rows) = match input {
            Input::Record(record) => (Some(*record), &[][..]),
            Input::Rows(rows) => (None, *rows),
        };

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            record,
            rows,
            row: None,
        };

        stmt.to_sql(&mut fmt);

        Ok(ret)
    }
}
