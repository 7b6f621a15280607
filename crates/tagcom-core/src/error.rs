use thiserror::Error;

/// A contract violation: reading something that is not there.
///
/// These are programming errors rather than parse outcomes; a failed parse is
/// reported through [`ParseResult::Fail`](crate::ParseResult::Fail).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("read the value of a failed parse (failed at offset {at})")]
    ValueOfFailure { at: usize },

    #[error("read the failure of a successful parse")]
    FailureOfSuccess,

    #[error("alternative {requested} was requested but alternative {active} is active")]
    WrongAlternative { requested: usize, active: usize },

    #[error("tag {tag} is out of range for {len} alternatives")]
    TagOutOfRange { tag: usize, len: usize },
}

/// A grammar that breaks a construction-time constraint.
///
/// Reported by [`Parser::validate`](crate::Parser::validate) before any input
/// is read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("empty range: {lo:?} is greater than {hi:?}")]
    EmptyRange { lo: char, hi: char },

    #[error("alternatives {first} and {second} of a tagged alternative both produce `{type_name}`")]
    DuplicateAlternative {
        first: usize,
        second: usize,
        type_name: &'static str,
    },
}
