use perch_core::stmt::Record;

/// Runtime binding a statement is rendered against.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// A single record, for the full and selective variants.
    Record(&'a Record),

    /// An ordered row sequence, for the batch variant.
    Rows(&'a [Record]),
}
