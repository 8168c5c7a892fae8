use super::{Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        match self {
            Statement::Upsert(stmt) => stmt.to_sql(f),
            Statement::UpsertSelective(stmt) => stmt.to_sql(f),
            Statement::BatchUpsert(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Upsert {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(
            f, "upsert into " self.table " " self.columns " values " self.values
        );
    }
}

impl ToSql for &stmt::UpsertSelective {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        // The `set` keyword is dropped with its clause when every
        // assignment fails its guard, keeping the degenerate statement
        // syntactically closed.
        let set = f
            .any_included(&self.assignments)
            .then_some((" set ", &self.assignments));

        fmt!(
            f, "upsert into " self.table " " self.columns " values " self.values set
        );
    }
}

impl ToSql for &stmt::BatchUpsert {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(f, "upsert into " self.table " " self.columns);

        let rows = f.rows;
        let mut s = " ";
        for row in rows {
            f.row = Some(row);
            fmt!(f, s self.projection);
            s = " union all ";
        }
        f.row = None;
    }
}
