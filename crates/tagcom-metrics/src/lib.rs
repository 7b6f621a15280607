pub mod end_of_line;
mod line_column;

pub use end_of_line::{EndOfLine, CR, CRLF, LF};
pub use line_column::{LineColumn, LineColumnMeter};
