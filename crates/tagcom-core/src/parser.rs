use std::any::type_name;

use crate::{Cursor, GrammarCheck, GrammarError, ParseResult};

/// A rule that can be run at a cursor.
///
/// Parsers are immutable once built and may be shared between threads when
/// their parts are. Running the same parser twice at the same cursor gives
/// the same result.
pub trait Parser {
    type Output;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output>;

    /// Checks the construction-time constraints of this parser and of every
    /// parser it is built from. No input is read.
    ///
    /// Parsers without constraints or children keep the default.
    fn check(&self, visited: &mut GrammarCheck) -> Result<(), GrammarError> {
        let _ = visited;
        Ok(())
    }

    /// Checks the whole grammar reachable from this parser.
    fn validate(&self) -> Result<(), GrammarError> {
        self.check(&mut GrammarCheck::new())
    }
}

/// A named rule: an inner rule plus an action applied to its output.
///
/// Each named rule is its own type, so a grammar can refer to a rule before
/// that rule is defined and recursion needs no indirection:
///
/// ```ignore
/// struct Paren;
///
/// impl Rule for Paren {
///     type Inner = Either<(Sequence<(Symbol, Many<Paren>, Symbol)>, ...)>;
///     ...
/// }
/// ```
///
/// The action only runs when the inner rule succeeds. The span of the inner
/// match is kept as is.
pub trait Rule {
    type Inner: Parser;
    type Output;

    fn rule(&self) -> Self::Inner;

    fn action(&self, parsed: <Self::Inner as Parser>::Output) -> Self::Output;
}

impl<R: Rule> Parser for R {
    type Output = R::Output;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        let name = type_name::<R>();
        log::trace!("enter {} at {}", name, input.position());

        match self.rule().parse(input) {
            ParseResult::Done(v, span) => {
                log::trace!("leave {} with {}", name, span);
                ParseResult::Done(self.action(v), span)
            }
            ParseResult::Fail(e) => {
                log::trace!("leave {} failing: {}", name, e);
                ParseResult::Fail(e)
            }
        }
    }

    fn check(&self, visited: &mut GrammarCheck) -> Result<(), GrammarError> {
        if !visited.enter(type_name::<R>()) {
            return Ok(());
        }

        log::trace!("check {}", type_name::<R>());
        self.rule().check(visited)
    }
}
