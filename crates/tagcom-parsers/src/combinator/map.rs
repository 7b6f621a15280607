use std::marker::PhantomData;

use tagcom_core::{Cursor, GrammarCheck, GrammarError, ParseResult, Parser};

/// Applies `mapping` to the output of `parser`, keeping its span.
pub fn map<P, U, F>(parser: P, mapping: F) -> Map<P, U, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapping)
}

#[derive(Debug, Clone, Copy)]
pub struct Map<P, U, F> {
    parser: P,
    mapping: F,
    marker: PhantomData<fn() -> U>,
}

impl<P: Parser, U, F: Fn(P::Output) -> U> Map<P, U, F> {
    pub fn new(parser: P, mapping: F) -> Self {
        Self {
            parser,
            mapping,
            marker: PhantomData,
        }
    }
}

impl<P: Parser, U, F: Fn(P::Output) -> U> Parser for Map<P, U, F> {
    type Output = U;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        self.parser.parse(input).map(&self.mapping)
    }

    fn check(&self, visited: &mut GrammarCheck) -> Result<(), GrammarError> {
        self.parser.check(visited)
    }
}
