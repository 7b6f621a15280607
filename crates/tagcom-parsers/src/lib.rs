pub mod combinator;
pub mod extension;
pub mod primitive;

pub use combinator::*;
pub use tagcom_core::GrammarError;
pub use extension::ParserExtension;
pub use primitive::*;
