mod entry;

pub use entry::{parse, parse_str, parse_str_with, ParseError, Rejection};
pub use tagcom_base::*;
pub use tagcom_core::*;
pub use tagcom_metrics as metrics;
pub use tagcom_parsers as parsers;

pub mod prelude {
    pub use crate::{parse, parse_str, parse_str_with, ParseError, Rejection};
    pub use tagcom_base::{Union, Variant, I0, I1, I2, I3, I4, I5, I6, I7};
    pub use tagcom_core::ParseResult::*;
    pub use tagcom_core::*;
    pub use tagcom_parsers::combinator::*;
    pub use tagcom_parsers::primitive::*;
    pub use tagcom_parsers::{GrammarError, ParserExtension};
}
