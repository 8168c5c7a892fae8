//! Clause builders: reusable fragments over an ordered column sequence.
//!
//! All builders preserve the input order, which is what keeps identifier,
//! placeholder and projection clauses positionally zipped. An empty input
//! yields an empty parenthesized list `()` rather than an error.

use super::{Conditional, Fragment, List, ParamScope};

use perch_core::schema::Column;

/// Parenthesized, comma-separated store identifiers: the statement's column
/// clause.
pub fn identifier_list<'a>(columns: impl IntoIterator<Item = &'a Column>) -> Fragment {
    List {
        prefix: "(",
        suffix: ")",
        separator: ", ",
        items: columns
            .into_iter()
            .map(|column| Fragment::literal(&column.name))
            .collect(),
    }
    .into()
}

/// Parenthesized placeholder list, one per column, aligned positionally with
/// [`identifier_list`].
pub fn placeholder_list<'a>(columns: impl IntoIterator<Item = &'a Column>) -> Fragment {
    List {
        prefix: "(",
        suffix: ")",
        separator: ", ",
        items: columns
            .into_iter()
            .map(|column| Fragment::param(&column.property, ParamScope::Record))
            .collect(),
    }
    .into()
}

/// Identifier clause of the selective variant: each identifier appears only
/// when its property is non-null at execution time.
pub fn selective_identifier_list<'a>(columns: impl IntoIterator<Item = &'a Column>) -> Fragment {
    List {
        prefix: "(",
        suffix: ")",
        separator: ", ",
        items: columns
            .into_iter()
            .map(|column| {
                Conditional {
                    property: column.property.clone(),
                    body: vec![Fragment::literal(&column.name)],
                }
                .into()
            })
            .collect(),
    }
    .into()
}

/// Value clause of the selective variant, mirroring
/// [`selective_identifier_list`] with placeholders: the same guard on the
/// same property keeps both clauses index-aligned for any null-pattern.
pub fn selective_value_list<'a>(columns: impl IntoIterator<Item = &'a Column>) -> Fragment {
    List {
        prefix: "(",
        suffix: ")",
        separator: ", ",
        items: columns
            .into_iter()
            .map(|column| {
                Conditional {
                    property: column.property.clone(),
                    body: vec![Fragment::param(&column.property, ParamScope::Record)],
                }
                .into()
            })
            .collect(),
    }
    .into()
}

/// `identifier = placeholder` pairs under the same guards as the selective
/// identifier/value clauses, for the upsert-as-assignment reading of the
/// statement.
pub fn selective_assignment_list<'a>(columns: impl IntoIterator<Item = &'a Column>) -> Fragment {
    List {
        prefix: "",
        suffix: "",
        separator: ", ",
        items: columns
            .into_iter()
            .map(|column| {
                Conditional {
                    property: column.property.clone(),
                    body: vec![
                        Fragment::literal(format!("{} = ", column.name)),
                        Fragment::param(&column.property, ParamScope::Record),
                    ],
                }
                .into()
            })
            .collect(),
    }
    .into()
}

/// One batch row expressed as a `select` of placeholders bound against the
/// current row; the serializer renders it once per input row.
pub fn row_projection<'a>(columns: impl IntoIterator<Item = &'a Column>) -> Fragment {
    List {
        prefix: "select ",
        suffix: "",
        separator: ", ",
        items: columns
            .into_iter()
            .map(|column| Fragment::param(&column.property, ParamScope::Row))
            .collect(),
    }
    .into()
}
