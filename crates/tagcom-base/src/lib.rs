mod error;
mod macros;
mod raw_union;
mod variant;

pub use error::DuplicateAlternative;
pub use raw_union::*;
pub use tagcom_core::Never;
pub use variant::Variant;
