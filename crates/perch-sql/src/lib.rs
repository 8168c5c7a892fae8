pub mod serializer;
pub use serializer::{Input, Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;
