use tagcom_core::GrammarError;
use thiserror::Error;

/// Two alternatives of a union have the same type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("alternatives {first} and {second} are both `{type_name}`")]
pub struct DuplicateAlternative {
    pub first: usize,
    pub second: usize,
    pub type_name: &'static str,
}

impl From<DuplicateAlternative> for GrammarError {
    fn from(value: DuplicateAlternative) -> Self {
        GrammarError::DuplicateAlternative {
            first: value.first,
            second: value.second,
            type_name: value.type_name,
        }
    }
}
