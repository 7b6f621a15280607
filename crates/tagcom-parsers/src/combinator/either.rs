use tagcom_core::{
    fail, Cursor, Expected, Failure, GrammarCheck, GrammarError, ParseResult, Parser,
};

/// Tries each parser of the tuple from the same position; the first match
/// wins. All parsers must produce the same output type.
///
/// When every parser fails, the failure is blamed on the start position and
/// reaches as far as the furthest failing parser got.
///
/// ```
/// use tagcom_parsers::{either, symbol, word, ParserExtension};
///
/// let sign = either((symbol('+'), symbol('-')));
/// let keyword = either((word("let"), symbol('=').map(|_| "=")));
/// # let _ = (sign, keyword);
/// ```
///
/// Alternatives producing different types do not build:
///
/// ```compile_fail
/// use tagcom_parsers::{either, symbol, word};
///
/// let mixed = either((symbol('a'), word("b")));
/// ```
pub fn either<T>(parsers: T) -> Either<T>
where
    Either<T>: Parser,
{
    Either::new(parsers)
}

#[derive(Debug, Clone, Copy)]
pub struct Either<T> {
    parsers: T,
}

impl<T> Either<T> {
    pub fn new(parsers: T) -> Self {
        Self { parsers }
    }
}

macro_rules! either_impl {
    ($($p:ident $i:tt),*) => {
        impl<P0: Parser, $($p: Parser<Output = P0::Output>),*> Parser for Either<(P0, $($p,)*)> {
            type Output = P0::Output;

            fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
                let furthest = match self.parsers.0.parse(input) {
                    ParseResult::Done(v, span) => return ParseResult::Done(v, span),
                    ParseResult::Fail(e) => e.furthest(),
                };
                $(
                    let furthest = match self.parsers.$i.parse(input) {
                        ParseResult::Done(v, span) => return ParseResult::Done(v, span),
                        ParseResult::Fail(e) => furthest.max(e.furthest()),
                    };
                )*

                fail(Failure::new(input.position(), Expected::Alternative).reached(furthest))
            }

            fn check(&self, visited: &mut GrammarCheck) -> Result<(), GrammarError> {
                self.parsers.0.check(visited)?;
                $(self.parsers.$i.check(visited)?;)*
                Ok(())
            }
        }
    };
}

either_impl!();
either_impl!(P1 1);
either_impl!(P1 1, P2 2);
either_impl!(P1 1, P2 2, P3 3);
either_impl!(P1 1, P2 2, P3 3, P4 4);
either_impl!(P1 1, P2 2, P3 3, P4 4, P5 5);
either_impl!(P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
either_impl!(P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);
either_impl!(P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8);
either_impl!(P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8, P9 9);
either_impl!(P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8, P9 9, P10 10);
either_impl!(P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8, P9 9, P10 10, P11 11);
