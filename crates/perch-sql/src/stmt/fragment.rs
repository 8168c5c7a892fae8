/// A node of the composable SQL-fragment tree.
///
/// Statements are fragment trees so a host renderer can walk the structure
/// instead of re-parsing text; the serializer in this crate is one such
/// walker.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Text passed through verbatim.
    Literal(String),

    /// A bound-parameter placeholder.
    Param(ParamRef),

    /// Children joined by a separator and wrapped in a prefix/suffix.
    List(List),

    /// A body emitted only when the guarded property is non-null at
    /// statement-execution time.
    Conditional(Conditional),
}

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub separator: &'static str,

    /// Items in clause order. Conditional items that fail their guard do
    /// not participate in separator placement.
    pub items: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// Host property whose non-nullness gates the body.
    pub property: String,

    pub body: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamRef {
    /// Host property the placeholder binds.
    pub property: String,

    pub scope: ParamScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamScope {
    /// Binds against the statement's single input record.
    Record,

    /// Binds against the current row of a batch input.
    Row,
}

impl Fragment {
    pub fn literal(text: impl Into<String>) -> Fragment {
        Fragment::Literal(text.into())
    }

    pub fn param(property: impl Into<String>, scope: ParamScope) -> Fragment {
        Fragment::Param(ParamRef {
            property: property.into(),
            scope,
        })
    }
}

impl From<List> for Fragment {
    fn from(value: List) -> Self {
        Fragment::List(value)
    }
}

impl From<Conditional> for Fragment {
    fn from(value: Conditional) -> Self {
        Fragment::Conditional(value)
    }
}
