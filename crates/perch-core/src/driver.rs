mod capability;
pub use capability::{Capability, PlaceholderStyle};
