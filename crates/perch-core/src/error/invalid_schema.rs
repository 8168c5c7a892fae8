use super::Error;

/// Error when loaded table metadata is invalid.
///
/// This occurs when:
/// - The table name is missing
/// - The column list is empty
/// - Two columns share a store identifier or host property name
/// - A storage type name cannot be parsed
/// - No column is marked as part of the primary key
///
/// These errors are caught while adapting host metadata, before any
/// statement is synthesized. Failure is isolated to the offending table.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
