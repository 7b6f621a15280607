use tagcom_core::{done, Cursor, GrammarCheck, GrammarError, ParseResult, Parser, Span};

/// Runs every parser of the tuple in order, each starting where the previous
/// match ended.
pub fn sequence<T>(parsers: T) -> Sequence<T>
where
    Sequence<T>: Parser,
{
    Sequence::new(parsers)
}

#[derive(Debug, Clone, Copy)]
pub struct Sequence<T> {
    parsers: T,
}

impl<T> Sequence<T> {
    pub fn new(parsers: T) -> Self {
        Self { parsers }
    }
}

macro_rules! sequence_impl {
    ($($p:ident $v:ident $i:tt),+) => {
        impl<$($p: Parser),+> Parser for Sequence<($($p,)+)> {
            type Output = ($($p::Output,)+);

            fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
                let rest = input;
                $(
                    let ($v, rest) = match self.parsers.$i.parse(rest) {
                        ParseResult::Done(v, span) => (v, rest.advanced_to(span.end())),
                        ParseResult::Fail(e) => return ParseResult::Fail(e),
                    };
                )+

                done(($($v,)+), Span::new(input.position(), rest.position()))
            }

            fn check(&self, visited: &mut GrammarCheck) -> Result<(), GrammarError> {
                $(self.parsers.$i.check(visited)?;)+
                Ok(())
            }
        }
    };
}

sequence_impl!(P0 v0 0);
sequence_impl!(P0 v0 0, P1 v1 1);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9, P10 v10 10);
sequence_impl!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9, P10 v10 10, P11 v11 11);

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;
    use crate::{end, from_fn, symbol, word, Eof, ParserExtension};
    use tagcom_core::{fail, Expected, Failure};

    #[test]
    fn matches_in_order() {
        let parser = sequence((symbol('a'), word("bc"), end()));

        assert_eq!(
            parser.parse(Cursor::new("abc")),
            done(('a', "bc", Eof), Span::new(0, 3))
        );
    }

    #[test]
    fn single_element() {
        assert_eq!(
            sequence((symbol('a'),)).parse(Cursor::at("xa", 1)),
            done(('a',), Span::new(1, 2))
        );
    }

    #[test]
    fn failure_of_a_later_element_is_reported_where_it_happened() {
        let parser = sequence((symbol('a'), symbol('x')));

        assert_eq!(
            parser.parse(Cursor::new("abc")),
            fail(Failure::new(1, Expected::Symbol('x')))
        );
    }

    #[test]
    fn first_failure_stops_the_sequence() {
        let calls = Cell::new(0);
        let counted = symbol('b').map(|c| {
            calls.set(calls.get() + 1);
            c
        });
        let parser = sequence((symbol('a'), counted.by_ref()));

        assert_eq!(
            parser.parse(Cursor::new("xb")),
            fail(Failure::new(0, Expected::Symbol('a')))
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn nested_failure_keeps_its_reach() {
        let inner = sequence((symbol('b'), symbol('c')));
        let parser = sequence((symbol('a'), inner, symbol('d')));

        let result = parser.parse(Cursor::new("abx"));
        let failure = result.failure().unwrap();

        assert_eq!(failure.at(), 2);
        assert_eq!(failure.furthest(), 2);
        assert!(failure.at() >= 1);
    }

    #[test]
    fn advances_by_span_end() {
        // claims one char more than it reads
        let wide = from_fn(|input: Cursor<'_>| {
            done((), Span::with_len(input.position(), 2))
        });
        let parser = sequence((wide, symbol('c')));

        assert_eq!(
            parser.parse(Cursor::new("abc")),
            done(((), 'c'), Span::new(0, 3))
        );
    }
}
