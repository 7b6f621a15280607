use tagcom_core::{done, fail, Cursor, Expected, Failure, ParseResult, Parser, Span};

pub fn symbol(symbol: char) -> Symbol {
    Symbol::new(symbol)
}

/// Matches one exact character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    symbol: char,
}

impl Symbol {
    pub fn new(symbol: char) -> Self {
        Self { symbol }
    }
}

impl Parser for Symbol {
    type Output = char;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        let offset = input.position();
        match input.peek() {
            Some(c) if c == self.symbol => done(c, Span::with_len(offset, c.len_utf8())),
            _ => fail(Failure::new(offset, Expected::Symbol(self.symbol))),
        }
    }
}
