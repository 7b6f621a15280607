use tagcom_core::{Cursor, Failure, GrammarError, ParseResult, Parser, Span};
use tagcom_metrics::{EndOfLine, LineColumn, LF};
use thiserror::Error;

/// Checks the grammar of `rule`, then runs it at `input`.
///
/// A malformed grammar is reported before any input is read.
pub fn parse<P: Parser + ?Sized>(
    rule: &P,
    input: Cursor<'_>,
) -> Result<ParseResult<P::Output>, GrammarError> {
    if let Err(e) = rule.validate() {
        log::debug!("grammar rejected: {}", e);
        return Err(e);
    }

    let result = rule.parse(input);

    match &result {
        ParseResult::Done(_, span) => log::trace!("parsed {}", span),
        ParseResult::Fail(failure) => log::trace!("parse failed: {}", failure),
    }

    Ok(result)
}

/// Runs `rule` from the start of `input`, locating any failure by line and
/// column with `\n` line endings.
///
/// The rule does not have to consume the whole input; end it with
/// [`end`](tagcom_parsers::end) for that.
pub fn parse_str<P: Parser + ?Sized>(
    rule: &P,
    input: &str,
) -> Result<(P::Output, Span), ParseError> {
    parse_str_with::<LF, P>(rule, input)
}

/// [`parse_str`] with the line endings of `EOL`.
pub fn parse_str_with<EOL: EndOfLine, P: Parser + ?Sized>(
    rule: &P,
    input: &str,
) -> Result<(P::Output, Span), ParseError> {
    let (value, span) = parse(rule, Cursor::new(input))?
        .into_result()
        .map_err(|failure| Rejection::locate_with::<EOL>(input, failure))?;

    Ok((value, span))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed grammar: {0}")]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

impl ParseError {
    /// The located failure, if the input was parsed at all.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ParseError::Grammar(_) => None,
            ParseError::Rejected(rejection) => Some(rejection),
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.rejection().map(Rejection::failure)
    }
}

/// A failed parse, located in its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {} at {}{}", .failure.expected(), .at, reach(.at, .furthest))]
pub struct Rejection {
    failure: Failure,
    at: LineColumn,
    furthest: LineColumn,
}

fn reach(at: &LineColumn, furthest: &LineColumn) -> String {
    if furthest.offset > at.offset {
        format!(" (furthest {})", furthest)
    } else {
        String::new()
    }
}

impl Rejection {
    pub fn locate(input: &str, failure: Failure) -> Self {
        Self::locate_with::<LF>(input, failure)
    }

    pub fn locate_with<EOL: EndOfLine>(input: &str, failure: Failure) -> Self {
        Self {
            failure,
            at: LineColumn::locate_with::<EOL>(input, failure.at()),
            furthest: LineColumn::locate_with::<EOL>(input, failure.furthest()),
        }
    }

    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    /// Where the failing rule started.
    pub fn at(&self) -> LineColumn {
        self.at
    }

    /// How far the parse got before failing.
    pub fn furthest(&self) -> LineColumn {
        self.furthest
    }
}
