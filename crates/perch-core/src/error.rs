mod invalid_schema;
mod invalid_statement;
mod unsupported_feature;

use invalid_schema::InvalidSchema;
use invalid_statement::InvalidStatement;
use unsupported_feature::UnsupportedFeature;

/// An error that can occur while loading table metadata or synthesizing
/// statements.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// A foreign error bridged from a host integration.
    Anyhow(anyhow::Error),
    InvalidSchema(InvalidSchema),
    InvalidStatement(InvalidStatement),
    UnsupportedFeature(UnsupportedFeature),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        ErrorKind::Anyhow(value).into()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind() {
            ErrorKind::Anyhow(err) => err.fmt(f),
            ErrorKind::InvalidSchema(err) => err.fmt(f),
            ErrorKind::InvalidStatement(err) => err.fmt(f),
            ErrorKind::UnsupportedFeature(err) => err.fmt(f),
        }
    }
}
