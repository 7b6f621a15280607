pub mod end;
pub mod range;
pub mod symbol;
pub mod word;

pub use end::{end, End, Eof};
pub use range::{range, Range};
pub use symbol::{symbol, Symbol};
pub use word::{word, Word};
