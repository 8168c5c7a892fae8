/// A callable mapper method signature.
///
/// These are data, not code: the host generator owns rendering them into
/// its target language, alongside the statement bodies they execute.
#[derive(Debug, Clone, PartialEq)]
pub struct MapperMethod {
    /// Method name on the generated mapper; matches the statement name.
    pub name: String,

    /// The single declared parameter.
    pub param: MethodParam,

    pub returns: Returns,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodParam {
    pub name: String,
    pub shape: ParamShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape {
    /// One record of the given shape.
    Record(RecordShape),

    /// An ordered record sequence bound as a single aggregate parameter,
    /// so the batch statement can expand it positionally.
    RecordList(RecordShape),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// The record type carrying every writable field.
    AllFields,

    /// The record type excluding large-object fields.
    WithoutLobs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    /// Count of rows written.
    RowCount,
}

impl MapperMethod {
    /// `upsert(record) -> row count`, record shape without large objects.
    pub fn upsert() -> MapperMethod {
        MapperMethod {
            name: "upsert".to_string(),
            param: MethodParam {
                name: "record".to_string(),
                shape: ParamShape::Record(RecordShape::WithoutLobs),
            },
            returns: Returns::RowCount,
        }
    }

    /// `upsertSelective(record) -> row count`, all-fields record shape.
    pub fn upsert_selective() -> MapperMethod {
        MapperMethod {
            name: "upsertSelective".to_string(),
            param: MethodParam {
                name: "record".to_string(),
                shape: ParamShape::Record(RecordShape::AllFields),
            },
            returns: Returns::RowCount,
        }
    }

    /// `batchUpsert(list) -> row count`, one aggregate list parameter.
    pub fn batch_upsert() -> MapperMethod {
        MapperMethod {
            name: "batchUpsert".to_string(),
            param: MethodParam {
                name: "list".to_string(),
                shape: ParamShape::RecordList(RecordShape::WithoutLobs),
            },
            returns: Returns::RowCount,
        }
    }
}
