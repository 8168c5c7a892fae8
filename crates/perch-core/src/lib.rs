pub mod driver;
pub use driver::Capability;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Table;

pub mod stmt;

/// A Result type alias that uses perch's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
