mod generate;
pub use generate::{generate, Mapper};

mod hook;
pub use hook::{AcceptAll, UpsertHook};

mod mapper;
pub use mapper::{MapperMethod, MethodParam, ParamShape, RecordShape, Returns};
