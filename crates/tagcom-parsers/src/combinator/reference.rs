use tagcom_core::{Cursor, GrammarCheck, GrammarError, ParseResult, Parser};

pub fn by_ref<P: Parser + ?Sized>(parser: &P) -> Ref<'_, P> {
    Ref::new(parser)
}

/// Borrows a parser so it can be composed without being moved.
#[derive(Debug)]
pub struct Ref<'a, P: ?Sized> {
    parser: &'a P,
}

impl<'a, P: ?Sized> Ref<'a, P> {
    pub fn new(parser: &'a P) -> Self {
        Self { parser }
    }
}

impl<P: ?Sized> Clone for Ref<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for Ref<'_, P> {}

impl<P: Parser + ?Sized> Parser for Ref<'_, P> {
    type Output = P::Output;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        self.parser.parse(input)
    }

    fn check(&self, visited: &mut GrammarCheck) -> Result<(), GrammarError> {
        self.parser.check(visited)
    }
}
