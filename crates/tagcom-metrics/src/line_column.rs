use crate::end_of_line::{EndOfLine, LF};
use std::fmt;
use std::marker::PhantomData;

/// A zero-based line and column, plus the byte offset they were measured at.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineColumn {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    /// Measures `offset` in `input` using `\n` line endings.
    pub fn locate(input: &str, offset: usize) -> Self {
        Self::locate_with::<LF>(input, offset)
    }

    /// Measures `offset` in `input`.
    ///
    /// Offsets past the end are clamped to the end, offsets inside a
    /// character are moved back to its first byte.
    pub fn locate_with<EOL: EndOfLine>(input: &str, offset: usize) -> Self {
        let mut end = offset.min(input.len());
        while !input.is_char_boundary(end) {
            end -= 1;
        }

        LineColumnMeter::<EOL>::new(LineColumn::default())
            .advance(&input[..end])
            .location()
    }
}

/// One-based, the way editors show it.
impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Measures text segment by segment, carrying the location across segments.
#[derive(Debug)]
pub struct LineColumnMeter<EOL: EndOfLine = LF> {
    location: LineColumn,
    prev: Option<char>,
    marker: PhantomData<EOL>,
}

impl<EOL: EndOfLine> LineColumnMeter<EOL> {
    pub fn new(start: LineColumn) -> Self {
        Self {
            location: start,
            prev: None,
            marker: PhantomData,
        }
    }

    pub fn location(&self) -> LineColumn {
        self.location
    }

    pub fn advance(mut self, segment: &str) -> Self {
        for c in segment.chars() {
            self.location.offset += c.len_utf8();

            if EOL::ends_line(self.prev, c) {
                self.location.line += 1;
                self.location.column = 0;
            } else {
                self.location.column += 1;
            }
            self.prev = Some(c);
        }

        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::end_of_line::{CR, CRLF};
    use rstest::rstest;

    fn at(offset: usize, line: usize, column: usize) -> LineColumn {
        LineColumn {
            offset,
            line,
            column,
        }
    }

    #[rstest]
    #[case("", 0, at(0, 0, 0))]
    #[case("oneline", 3, at(3, 0, 3))]
    #[case("line0\nline1", 6, at(6, 1, 0))]
    #[case("line0\nline1", 8, at(8, 1, 2))]
    #[case("a\n\nb", 4, at(4, 2, 1))]
    #[case("\r\r", 2, at(2, 0, 2))]
    fn lf(#[case] input: &str, #[case] offset: usize, #[case] expected: LineColumn) {
        assert_eq!(LineColumn::locate(input, offset), expected);
    }

    #[rstest]
    #[case("a\r\nb", 3, at(3, 1, 0))]
    #[case("a\nb", 3, at(3, 0, 3))]
    #[case("a\rb\r\nc", 6, at(6, 1, 1))]
    fn crlf(#[case] input: &str, #[case] offset: usize, #[case] expected: LineColumn) {
        assert_eq!(LineColumn::locate_with::<CRLF>(input, offset), expected);
    }

    #[test]
    fn cr() {
        assert_eq!(LineColumn::locate_with::<CR>("a\rb\nc", 5), at(5, 1, 3));
    }

    #[test]
    fn columns_count_characters() {
        assert_eq!(LineColumn::locate("éé(", 4), at(4, 0, 2));
    }

    #[test]
    fn out_of_range_offsets_are_clamped() {
        assert_eq!(LineColumn::locate("ab", 10), at(2, 0, 2));
        assert_eq!(LineColumn::locate("é", 1), at(0, 0, 0));
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(at(8, 1, 2).to_string(), "2:3");
    }

    #[test]
    fn crlf_split_across_segments() {
        let meter = LineColumnMeter::<CRLF>::new(LineColumn::default())
            .advance("ab\r")
            .advance("\ncd");

        assert_eq!(meter.location(), at(6, 1, 2));
    }

    #[test]
    fn meter_continues_from_start() {
        let meter = LineColumnMeter::<LF>::new(at(10, 4, 2)).advance("x\ny");

        assert_eq!(meter.location(), at(13, 5, 1));
    }
}
