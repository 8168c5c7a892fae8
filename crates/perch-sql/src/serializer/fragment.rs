use super::{Formatter, Params, ToSql};

use crate::stmt::{Conditional, Fragment, List, ParamRef, ParamScope};

use perch_core::stmt::Value;

impl<T> Formatter<'_, T> {
    /// Whether the guarded property is non-null in the current binding.
    fn guard_passes(&self, property: &str) -> bool {
        let record = self.record.or(self.row);
        record.is_some_and(|record| !record.get(property).is_null())
    }

    /// Whether a fragment participates in its parent list for the current
    /// binding. Only conditional fragments can be excluded.
    fn included(&self, fragment: &Fragment) -> bool {
        match fragment {
            Fragment::Conditional(cond) => self.guard_passes(&cond.property),
            _ => true,
        }
    }

    /// Whether any item of a list fragment survives its guard.
    pub(super) fn any_included(&self, fragment: &Fragment) -> bool {
        match fragment {
            Fragment::List(list) => list.items.iter().any(|item| self.included(item)),
            fragment => self.included(fragment),
        }
    }
}

impl ToSql for &Fragment {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Fragment::Literal(text) => fmt!(f, text.as_str()),
            Fragment::Param(param) => param.to_sql(f),
            Fragment::List(list) => list.to_sql(f),
            Fragment::Conditional(cond) => cond.to_sql(f),
        }
    }
}

impl ToSql for &ParamRef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let record = match self.scope {
            ParamScope::Record => f.record,
            ParamScope::Row => f.row,
        };

        // An absent property binds as null, same as the guards read it.
        let value = match record {
            Some(record) => record.get(&self.property),
            None => &Value::Null,
        };

        let placeholder = f.params.push(value);
        fmt!(f, placeholder);
    }
}

impl ToSql for &List {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        // Two passes: guards decide membership first, then the surviving
        // items are joined. Separators never need trimming and excluded
        // items never push parameters.
        let included: Vec<_> = self.items.iter().filter(|item| f.included(item)).collect();

        fmt!(f, self.prefix);
        let mut s = "";
        for item in included {
            fmt!(f, s item);
            s = self.separator;
        }
        fmt!(f, self.suffix);
    }
}

impl ToSql for &Conditional {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if f.guard_passes(&self.property) {
            for fragment in &self.body {
                fragment.to_sql(f);
            }
        }
    }
}
