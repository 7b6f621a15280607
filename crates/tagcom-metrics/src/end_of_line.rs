/// A line-ending convention.
///
/// Text is measured one character at a time; the character that completes a
/// line ending moves the location to the start of the next line.
pub trait EndOfLine {
    /// Whether `c`, read right after `prev`, completes a line ending.
    fn ends_line(prev: Option<char>, c: char) -> bool;
}

/// `\n` ends a line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LF;

impl EndOfLine for LF {
    fn ends_line(_: Option<char>, c: char) -> bool {
        c == '\n'
    }
}

/// `\r` ends a line.
#[derive(Debug, Default, Clone, Copy)]
pub struct CR;

impl EndOfLine for CR {
    fn ends_line(_: Option<char>, c: char) -> bool {
        c == '\r'
    }
}

/// `\r\n` ends a line; a lone `\r` or `\n` is an ordinary character.
#[derive(Debug, Default, Clone, Copy)]
pub struct CRLF;

impl EndOfLine for CRLF {
    fn ends_line(prev: Option<char>, c: char) -> bool {
        prev == Some('\r') && c == '\n'
    }
}
