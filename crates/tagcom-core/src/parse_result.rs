use std::fmt;

use crate::{InvalidState, Span};

/// The outcome of running a parser at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<T> {
    Done(T, Span),
    Fail(Failure),
}

use ParseResult::*;

pub fn done<T>(value: T, span: Span) -> ParseResult<T> {
    Done(value, span)
}

pub fn fail<T>(failure: Failure) -> ParseResult<T> {
    Fail(failure)
}

impl<T> ParseResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Done(..))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Result<&T, InvalidState> {
        match self {
            Done(v, _) => Ok(v),
            Fail(f) => Err(InvalidState::ValueOfFailure { at: f.at() }),
        }
    }

    pub fn into_value(self) -> Result<T, InvalidState> {
        match self {
            Done(v, _) => Ok(v),
            Fail(f) => Err(InvalidState::ValueOfFailure { at: f.at() }),
        }
    }

    pub fn failure(&self) -> Result<&Failure, InvalidState> {
        match self {
            Done(..) => Err(InvalidState::FailureOfSuccess),
            Fail(f) => Ok(f),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Done(_, s) => Some(*s),
            Fail(_) => None,
        }
    }

    /// Start of the matched span, or the failure offset.
    pub fn begin(&self) -> usize {
        match self {
            Done(_, s) => s.begin(),
            Fail(f) => f.at(),
        }
    }

    /// End of the matched span, or the failure offset.
    pub fn end(&self) -> usize {
        match self {
            Done(_, s) => s.end(),
            Fail(f) => f.at(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        match self {
            Done(v, s) => Done(f(v), s),
            Fail(e) => Fail(e),
        }
    }

    pub fn as_ref(&self) -> ParseResult<&T> {
        match self {
            Done(v, s) => Done(v, *s),
            Fail(e) => Fail(*e),
        }
    }

    pub fn into_result(self) -> Result<(T, Span), Failure> {
        match self {
            Done(v, s) => Ok((v, s)),
            Fail(e) => Err(e),
        }
    }

    pub fn unwrap(self) -> (T, Span) {
        match self {
            Done(v, s) => (v, s),
            Fail(e) => panic!("called ParseResult::unwrap on a Fail value; Failure: {}.", e),
        }
    }
}

impl<T> From<ParseResult<T>> for Result<(T, Span), Failure> {
    fn from(value: ParseResult<T>) -> Self {
        value.into_result()
    }
}

/// Why a parse failed and how far it got.
///
/// `at` is the offset of the rule blamed for the failure: a terminal blames
/// its own start, a sequence passes on the failing element's blame, and an
/// alternative in which every branch failed blames its own start.
/// `furthest` is the furthest offset any attempted branch reached before
/// failing. `at <= furthest` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    at: usize,
    furthest: usize,
    expected: Expected,
}

impl Failure {
    pub fn new(at: usize, expected: Expected) -> Self {
        Self {
            at,
            furthest: at,
            expected,
        }
    }

    pub fn at(&self) -> usize {
        self.at
    }

    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub fn expected(&self) -> Expected {
        self.expected
    }

    /// Extends `furthest` to `offset` if that is further.
    pub fn reached(mut self, offset: usize) -> Self {
        self.furthest = self.furthest.max(offset);
        self
    }

    /// The region from the blamed offset to the furthest one.
    pub fn reach(&self) -> Span {
        Span::new(self.at, self.furthest)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} at offset {}", self.expected, self.at)?;
        if self.furthest > self.at {
            write!(f, " (reached offset {})", self.furthest)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    End,
    Symbol(char),
    Range(char, char),
    Word(&'static str),
    /// None of the alternatives matched.
    Alternative,
    Custom(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::End => f.write_str("end of input"),
            Expected::Symbol(c) => write!(f, "symbol {c:?}"),
            Expected::Range(lo, hi) => write!(f, "a character in {lo:?}..={hi:?}"),
            Expected::Word(w) => write!(f, "word {w:?}"),
            Expected::Alternative => f.write_str("one of the alternatives"),
            Expected::Custom(m) => f.write_str(m),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn success_and_failure_are_exclusive() {
        let ok: ParseResult<char> = done('a', Span::new(0, 1));
        let ko: ParseResult<char> = fail(Failure::new(4, Expected::End));

        assert!(ok.is_success() && !ok.is_failure());
        assert!(ko.is_failure() && !ko.is_success());
    }

    #[test]
    fn failure_reports_its_offset_as_both_bounds() {
        let ko: ParseResult<char> = fail(Failure::new(4, Expected::Symbol('x')));

        assert_eq!(ko.begin(), 4);
        assert_eq!(ko.end(), 4);
        assert_eq!(ko.span(), None);
    }

    #[test]
    fn reading_the_value_of_a_failure_is_invalid() {
        let ko: ParseResult<char> = fail(Failure::new(2, Expected::End));

        assert_eq!(ko.value(), Err(InvalidState::ValueOfFailure { at: 2 }));
        assert_eq!(ko.into_value(), Err(InvalidState::ValueOfFailure { at: 2 }));
    }

    #[test]
    fn reading_the_failure_of_a_success_is_invalid() {
        let ok: ParseResult<char> = done('a', Span::new(0, 1));

        assert_eq!(ok.failure(), Err(InvalidState::FailureOfSuccess));
        assert_eq!(ok.value(), Ok(&'a'));
    }

    #[test]
    fn reached_only_moves_forward() {
        let failure = Failure::new(3, Expected::Alternative).reached(7).reached(5);

        assert_eq!(failure.at(), 3);
        assert_eq!(failure.furthest(), 7);
        assert_eq!(failure.reach(), Span::new(3, 7));
    }

    #[test]
    fn map_keeps_span() {
        let ok = done('7', Span::new(2, 3)).map(|c| c.to_digit(10));

        assert_eq!(ok, done(Some(7), Span::new(2, 3)));
    }

    #[test]
    fn display_mentions_furthest_when_further() {
        let failure = Failure::new(0, Expected::Symbol('(')).reached(4);

        assert_eq!(
            failure.to_string(),
            "expected symbol '(' at offset 0 (reached offset 4)"
        );
        assert_eq!(
            Failure::new(2, Expected::End).to_string(),
            "expected end of input at offset 2"
        );
    }

    #[test]
    #[should_panic(expected = "called ParseResult::unwrap on a Fail value")]
    fn unwrap_panics_on_failure() {
        let ko: ParseResult<()> = fail(Failure::new(0, Expected::End));
        ko.unwrap();
    }
}
