use tagcom_base::{DistinctAlternatives, Variant, I0, I1, I2, I3, I4, I5, I6, I7};
use tagcom_core::{
    done, fail, Cursor, Expected, Failure, GrammarCheck, ParseResult, Parser,
};

use crate::GrammarError;

/// Tries each parser of the tuple from the same position and tags the first
/// match with its position. Every parser must produce a distinct type.
///
/// Duplicate output types are reported by [`Parser::validate`] on any grammar
/// that contains the alternative; use [`OneOf::try_new`] to reject them right
/// away.
pub fn one_of<T>(parsers: T) -> OneOf<T>
where
    OneOf<T>: Parser,
{
    OneOf::new(parsers)
}

#[derive(Debug, Clone, Copy)]
pub struct OneOf<T> {
    parsers: T,
}

impl<T> OneOf<T> {
    pub fn new(parsers: T) -> Self {
        Self { parsers }
    }

    pub fn try_new<U>(parsers: T) -> Result<Self, GrammarError>
    where
        Self: Parser<Output = Variant<U>>,
        U: DistinctAlternatives,
    {
        let parser = Self { parsers };
        parser.check(&mut GrammarCheck::new())?;
        Ok(parser)
    }
}

macro_rules! one_of_impl {
    ($($p:ident $idx:ident $i:tt),+) => {
        impl<$($p: Parser),+> Parser for OneOf<($($p,)+)>
        where
            $($p::Output: 'static),+
        {
            type Output = Variant<tagcom_base::Union![$($p::Output),+]>;

            fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
                let furthest = input.position();
                $(
                    let furthest = match self.parsers.$i.parse(input) {
                        ParseResult::Done(v, span) => return done(Variant::new::<_, $idx>(v), span),
                        ParseResult::Fail(e) => furthest.max(e.furthest()),
                    };
                )+

                fail(Failure::new(input.position(), Expected::Alternative).reached(furthest))
            }

            fn check(&self, visited: &mut GrammarCheck) -> Result<(), GrammarError> {
                if let Err(e) = Variant::<tagcom_base::Union![$($p::Output),+]>::try_distinct() {
                    log::debug!("rejected tagged alternative: {}", e);
                    return Err(e.into());
                }

                $(self.parsers.$i.check(visited)?;)+
                Ok(())
            }
        }
    };
}

one_of_impl!(P0 I0 0);
one_of_impl!(P0 I0 0, P1 I1 1);
one_of_impl!(P0 I0 0, P1 I1 1, P2 I2 2);
one_of_impl!(P0 I0 0, P1 I1 1, P2 I2 2, P3 I3 3);
one_of_impl!(P0 I0 0, P1 I1 1, P2 I2 2, P3 I3 3, P4 I4 4);
one_of_impl!(P0 I0 0, P1 I1 1, P2 I2 2, P3 I3 3, P4 I4 4, P5 I5 5);
one_of_impl!(P0 I0 0, P1 I1 1, P2 I2 2, P3 I3 3, P4 I4 4, P5 I5 5, P6 I6 6);
one_of_impl!(P0 I0 0, P1 I1 1, P2 I2 2, P3 I3 3, P4 I4 4, P5 I5 5, P6 I6 6, P7 I7 7);

#[cfg(test)]
mod test {
    use super::*;
    use crate::{range, sequence, symbol, word, ParserExtension};
    use tagcom_core::Span;

    #[test]
    fn tags_the_matching_alternative() {
        let parser = one_of((word("let"), range('0', '9').map(|c| c as u32 - '0' as u32)));

        let keyword = parser.parse(Cursor::new("let")).into_value().unwrap();
        assert_eq!(keyword.tag(), 0);
        assert_eq!(keyword.get::<&str, _>(), Some(&"let"));

        let digit = parser.parse(Cursor::new("7")).into_value().unwrap();
        assert_eq!(digit.tag(), 1);
        assert_eq!(digit.get::<u32, _>(), Some(&7));
    }

    #[test]
    fn keeps_the_span_of_the_match() {
        let parser = one_of((symbol('x'), word("yz")));

        assert_eq!(
            parser.parse(Cursor::at("_yz", 1)).span(),
            Some(Span::new(1, 3))
        );
    }

    #[test]
    fn failure_reaches_the_furthest_branch() {
        let parser = one_of((
            sequence((symbol('a'), symbol('x'))),
            sequence((symbol('a'), symbol('b'), symbol('c'), symbol('d'))).map(|_| ()),
        ));

        assert_eq!(
            parser.parse(Cursor::new("abcx")),
            fail(Failure::new(0, Expected::Alternative).reached(3))
        );
    }

    #[test]
    fn duplicate_output_types_are_rejected() {
        let result = OneOf::try_new((symbol('a'), word("b"), symbol('c')));

        assert_eq!(
            result.map(|_| ()),
            Err(GrammarError::DuplicateAlternative {
                first: 0,
                second: 2,
                type_name: "char"
            })
        );
    }

    #[test]
    fn duplicates_fail_validation() {
        let parser = one_of((symbol('a'), range('0', '9')));

        assert_eq!(
            parser.validate().map_err(|e| e.to_string()),
            Err("alternatives 0 and 1 of a tagged alternative both produce `char`".to_string())
        );
    }

    #[test]
    fn validation_reaches_nested_alternatives() {
        let parser = sequence((word("x"), one_of((symbol('a'), range('z', 'a').map(|_| 0u8)))));

        assert_eq!(
            parser.validate(),
            Err(GrammarError::EmptyRange { lo: 'z', hi: 'a' })
        );
    }
}
