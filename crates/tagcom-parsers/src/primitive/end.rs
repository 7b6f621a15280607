use tagcom_core::{done, fail, Cursor, Expected, Failure, ParseResult, Parser, Span};

/// Marker output of [`End`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Eof;

pub fn end() -> End {
    End
}

/// Matches only at the end of input, consuming nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct End;

impl Parser for End {
    type Output = Eof;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        let offset = input.position();
        if input.ended() {
            done(Eof, Span::point(offset))
        } else {
            fail(Failure::new(offset, Expected::End))
        }
    }
}
