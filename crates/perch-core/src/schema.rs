mod column;
pub use column::{Column, ColumnId};

mod meta;
pub use meta::{ColumnMeta, TableMeta};

mod table;
pub use table::{PrimaryKey, Table};

mod ty;
pub use ty::Type;

mod verify;
