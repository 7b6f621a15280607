/// A position within an input buffer.
///
/// Cursors are values: every operation returns a new cursor and the buffer is
/// shared by all cursors derived from it. The offset is a byte offset and may
/// point past the end of the buffer, which reads as end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::at(input, 0)
    }

    pub fn at(input: &'a str, offset: usize) -> Self {
        Self { input, offset }
    }

    /// The character under the cursor.
    ///
    /// Returns `None` at end of input, and when the offset does not fall on a
    /// character boundary.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn ended(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn advanced_by(&self, count: usize) -> Self {
        Self::at(self.input, self.offset + count)
    }

    pub fn advanced_to(&self, offset: usize) -> Self {
        Self::at(self.input, offset)
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The unread part of the input; empty past the end or off a boundary.
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.offset..).unwrap_or("")
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        self.remaining().starts_with(pattern)
    }
}
