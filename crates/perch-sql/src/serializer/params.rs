use super::{Formatter, ToSql};

use perch_core::driver::PlaceholderStyle;
use perch_core::stmt::Value;

pub trait Params {
    fn push(&mut self, param: &Value) -> Placeholder;
}

pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match f.serializer.capability.placeholders {
            PlaceholderStyle::Positional => f.dst.push('?'),
            PlaceholderStyle::Numbered => write!(f.dst, "${}", self.0).unwrap(),
        }
    }
}
