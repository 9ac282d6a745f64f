pub mod json;
pub mod path;
pub mod validate;

pub use json::ValidatedJson;
pub use path::IdPath;
pub use validate::{FieldErrors, Validate};
