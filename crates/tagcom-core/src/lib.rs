mod check;
mod cursor;
mod error;
mod never;
mod parse_result;
mod parser;
mod span;

pub use check::GrammarCheck;
pub use cursor::Cursor;
pub use error::{GrammarError, InvalidState};
pub use never::{Never, ShouldNever, ShouldNeverExtension};
pub use parse_result::{done, fail, Expected, Failure, ParseResult};
pub use parser::{Parser, Rule};
pub use span::Span;
