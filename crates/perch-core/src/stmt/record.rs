use super::Value;

use indexmap::IndexMap;

/// One host record at statement-execution time: an insertion-ordered map
/// from host property name to bound value.
///
/// A property that was never set reads as [`Value::Null`]; the selective
/// variant's guards treat absent and explicitly-null properties the same
/// way.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(property.into(), value.into());
    }

    /// Chaining form of [`Record::insert`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn get(&self, property: &str) -> &Value {
        const NULL: Value = Value::Null;
        self.fields.get(property).unwrap_or(&NULL)
    }

    pub fn is_null(&self, property: &str) -> bool {
        self.get(property).is_null()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(property, value)| (property.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (property, value) in iter {
            record.insert(property, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_properties_read_as_null() {
        let record = Record::new().with("id", 1_i64);

        assert!(!record.is_null("id"));
        assert!(record.is_null("name"));
        assert_eq!(*record.get("name"), Value::Null);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let record = Record::new()
            .with("b", 2_i64)
            .with("a", 1_i64)
            .with("c", Value::Null);

        let properties: Vec<_> = record.iter().map(|(property, _)| property).collect();
        assert_eq!(properties, ["b", "a", "c"]);
    }
}
