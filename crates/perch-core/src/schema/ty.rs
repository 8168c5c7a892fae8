use crate::Error;

use std::{fmt, str::FromStr};

/// Storage types of the target store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Double,
    Decimal,
    Varchar,
    Char,
    Date,
    Time,
    Timestamp,
    Binary,
    Varbinary,
}

impl Type {
    /// Binary storage types hold large objects by default.
    pub fn is_large_object(self) -> bool {
        matches!(self, Type::Binary | Type::Varbinary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Type::Boolean => "BOOLEAN",
            Type::TinyInt => "TINYINT",
            Type::SmallInt => "SMALLINT",
            Type::Integer => "INTEGER",
            Type::BigInt => "BIGINT",
            Type::Float => "FLOAT",
            Type::Double => "DOUBLE",
            Type::Decimal => "DECIMAL",
            Type::Varchar => "VARCHAR",
            Type::Char => "CHAR",
            Type::Date => "DATE",
            Type::Time => "TIME",
            Type::Timestamp => "TIMESTAMP",
            Type::Binary => "BINARY",
            Type::Varbinary => "VARBINARY",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Type {
    type Err = Error;

    /// Parses a metadata type name, ignoring case and any precision suffix
    /// (`VARCHAR(255)` parses as `Varchar`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = match s.find('(') {
            Some(at) => &s[..at],
            None => s,
        };

        match base.trim().to_ascii_uppercase().as_str() {
            "BOOLEAN" => Ok(Type::Boolean),
            "TINYINT" => Ok(Type::TinyInt),
            "SMALLINT" => Ok(Type::SmallInt),
            "INTEGER" => Ok(Type::Integer),
            "BIGINT" => Ok(Type::BigInt),
            "FLOAT" => Ok(Type::Float),
            "DOUBLE" => Ok(Type::Double),
            "DECIMAL" => Ok(Type::Decimal),
            "VARCHAR" => Ok(Type::Varchar),
            "CHAR" => Ok(Type::Char),
            "DATE" => Ok(Type::Date),
            "TIME" => Ok(Type::Time),
            "TIMESTAMP" => Ok(Type::Timestamp),
            "BINARY" => Ok(Type::Binary),
            "VARBINARY" => Ok(Type::Varbinary),
            _ => Err(Error::invalid_schema(format!(
                "unknown storage type `{s}`"
            ))),
        }
    }
}
