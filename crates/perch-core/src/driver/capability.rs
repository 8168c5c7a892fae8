/// What the target store's driver supports.
///
/// Statement synthesis consults this profile instead of assuming store
/// behavior implicitly; every branch the engine takes on a store quirk is a
/// named flag here.
#[derive(Debug, PartialEq, Eq)]
pub struct Capability {
    /// The store speaks `upsert into`. Upsert synthesis refuses to run
    /// against a profile without it.
    pub upsert_into: bool,

    /// The driver can retrieve store-generated keys after a write. Phoenix
    /// cannot, so the synthesized statements never carry a key-retrieval
    /// directive.
    pub generated_keys: bool,

    /// The store has native multi-row `values` syntax. Without it, batch
    /// writes are expressed as `select` rows joined by `union all` feeding
    /// a single upsert target.
    pub multi_row_values: bool,

    /// The driver can bind large objects as placeholders in the full and
    /// batch paths.
    pub lob_parameters: bool,

    /// How bound parameters appear in statement text.
    pub placeholders: PlaceholderStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// JDBC-style `?`.
    Positional,

    /// Numbered `$1`, `$2`, ...
    Numbered,
}

impl Capability {
    /// Phoenix-on-HBase capabilities.
    pub const PHOENIX: Self = Self {
        upsert_into: true,
        generated_keys: false,
        multi_row_values: false,
        lob_parameters: false,
        placeholders: PlaceholderStyle::Positional,
    };

    /// A generic ANSI SQL store, used to reject misconfigured runs.
    pub const ANSI: Self = Self {
        upsert_into: false,
        generated_keys: true,
        multi_row_values: true,
        lob_parameters: true,
        placeholders: PlaceholderStyle::Positional,
    };
}
