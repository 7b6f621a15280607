use tagcom_core::{done, Cursor, GrammarCheck, GrammarError, ParseResult, Parser, Span};

/// Zero or more repetitions of `parser`.
pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many::new(parser)
}

/// Collects matches until the inner parser fails, and never fails itself.
///
/// A match that consumes nothing is collected once and ends the repetition,
/// since repeating it would not advance.
///
/// The failure that ends the repetition is dropped along with how far it
/// reached. A failure of whatever follows the repetition is reported from
/// where the repetition stopped, even when the last attempt got further.
#[derive(Debug, Clone, Copy)]
pub struct Many<P> {
    parser: P,
}

impl<P: Parser> Many<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Many<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        let mut items = Vec::new();
        let mut rest = input;

        while let ParseResult::Done(item, span) = self.parser.parse(rest) {
            items.push(item);

            let advanced = span.end() > rest.position();
            rest = rest.advanced_to(span.end());
            if !advanced {
                break;
            }
        }

        done(items, Span::new(input.position(), rest.position()))
    }

    fn check(&self, visited: &mut GrammarCheck) -> Result<(), GrammarError> {
        self.parser.check(visited)
    }
}
