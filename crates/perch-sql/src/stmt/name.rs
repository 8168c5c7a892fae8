use std::fmt;

/// A qualified name, rendered with `.` between parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Name(pub Vec<String>);

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for part in &self.0 {
            write!(f, "{s}{part}")?;
            s = ".";
        }

        Ok(())
    }
}
