//! Balanced brackets.
//!
//! ```text
//! document := paren end
//! paren    := round | curly
//! round    := '(' paren* ')'
//! curly    := '{' paren* '}'
//! ```

use std::fmt;

use tagcom::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bracket {
    Round(Vec<Bracket>),
    Curly(Vec<Bracket>),
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close, children) = match self {
            Bracket::Round(children) => ('(', ')', children),
            Bracket::Curly(children) => ('{', '}', children),
        };

        write!(f, "{}", open)?;
        for child in children {
            write!(f, "{}", child)?;
        }
        write!(f, "{}", close)
    }
}

pub struct Round(Vec<Bracket>);
pub struct Curly(Vec<Bracket>);

impl From<Round> for Bracket {
    fn from(value: Round) -> Self {
        Bracket::Round(value.0)
    }
}

impl From<Curly> for Bracket {
    fn from(value: Curly) -> Self {
        Bracket::Curly(value.0)
    }
}

pub struct Document;

impl Rule for Document {
    type Inner = Sequence<(Paren, End)>;
    type Output = Bracket;

    fn rule(&self) -> Self::Inner {
        sequence((Paren, end()))
    }

    fn action(&self, (bracket, _): (Bracket, Eof)) -> Bracket {
        bracket
    }
}

pub struct Paren;

impl Rule for Paren {
    type Inner = OneOf<(RoundRule, CurlyRule)>;
    type Output = Bracket;

    fn rule(&self) -> Self::Inner {
        one_of((RoundRule, CurlyRule))
    }

    fn action(&self, parsed: Variant![Round, Curly]) -> Bracket {
        parsed.unify()
    }
}

pub struct RoundRule;

impl Rule for RoundRule {
    type Inner = Sequence<(Symbol, Many<Paren>, Symbol)>;
    type Output = Round;

    fn rule(&self) -> Self::Inner {
        sequence((symbol('('), many(Paren), symbol(')')))
    }

    fn action(&self, (_, children, _): (char, Vec<Bracket>, char)) -> Round {
        Round(children)
    }
}

pub struct CurlyRule;

impl Rule for CurlyRule {
    type Inner = Sequence<(Symbol, Many<Paren>, Symbol)>;
    type Output = Curly;

    fn rule(&self) -> Self::Inner {
        sequence((symbol('{'), Paren.many(), symbol('}')))
    }

    fn action(&self, (_, children, _): (char, Vec<Bracket>, char)) -> Curly {
        Curly(children)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grammar_is_well_formed() {
        assert_eq!(Document.validate(), Ok(()));
    }

    #[test]
    fn nested_brackets() {
        let result = parse(&Paren, Cursor::new("{(()){}}")).unwrap();

        assert_eq!(result.span(), Some(Span::new(0, 8)));
        assert_eq!(
            result.into_value(),
            Ok(Bracket::Curly(vec![
                Bracket::Round(vec![Bracket::Round(vec![])]),
                Bracket::Curly(vec![]),
            ]))
        );
    }

    #[test]
    fn document_rejects_trailing_input() {
        assert_eq!(
            parse(&Paren, Cursor::new("(){}")).unwrap().span(),
            Some(Span::new(0, 2))
        );

        let error = parse_str(&Document, "(){}").unwrap_err();
        assert_eq!(error.failure().unwrap().at(), 2);
        assert_eq!(error.failure().unwrap().expected(), Expected::End);
    }

    #[test]
    fn unbalanced_input_fails_at_the_start() {
        for input in ["({)", "({))"] {
            let failure = *parse(&Paren, Cursor::new(input)).unwrap().failure().unwrap();

            assert_eq!(failure.at(), 0, "case: {}", input);
            assert_eq!(failure.furthest(), 1, "case: {}", input);
        }
    }

    #[test]
    fn display_writes_the_brackets_back() {
        let (tree, _) = parse_str(&Document, "{(()){}}").unwrap();

        assert_eq!(tree.to_string(), "{(()){}}");
    }
}
