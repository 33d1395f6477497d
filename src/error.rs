//! Errors raised while building, parsing and querying labels.

use thiserror::Error;

/// Broad class of a [`LabelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or a value that violates a constraint.
    Value,
    /// Wrong number of positional values on direct construction.
    Type,
    /// Lookup of a feature the sortinfo type does not have.
    Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("predicate strings must not be empty")]
    EmptyPredicate,
    #[error("predicates must not contain spaces: {0:?}")]
    PredicateWhitespace(String),
    #[error("predicates must not contain quotes: {0:?}")]
    PredicateQuote(String),
    #[error("a {family} must have non-empty {field}")]
    EmptyField {
        family: &'static str,
        field: &'static str,
    },
    #[error("the values of a {family} must not contain spaces")]
    FieldWhitespace { family: &'static str },
    #[error("RealPred strings must begin with an underscore: {0:?}")]
    MissingUnderscore(String),
    #[error("RealPred strings must have a part of speech separated by an underscore: {0:?}")]
    MissingPos(String),
    #[error("GPred strings must not begin with an underscore: {0:?}")]
    UnexpectedUnderscore(String),
    #[error("{name} takes {expected} arguments, but {given} were given")]
    Arity {
        name: &'static str,
        expected: String,
        given: usize,
    },
    #[error("sortinfo must have cvarsort")]
    MissingCvarsort,
    #[error("{name} must have cvarsort {expected}, not {found}")]
    CvarsortMismatch {
        name: &'static str,
        expected: char,
        found: String,
    },
    #[error("malformed sortinfo string {text:?}: {reason}")]
    MalformedSortinfo { text: String, reason: &'static str },
    #[error("cvarsort is fixed by the sortinfo type and cannot be changed")]
    ReadOnlyCvarsort,
    /// Lookup of an unknown feature through `get`, `set` or `clear`.
    #[error("{name} has no feature {feature}")]
    NoSuchFeature { name: &'static str, feature: String },
    /// Unknown feature name in constructor or dictionary input. The input
    /// itself is malformed, so this is a value error rather than a key error.
    #[error("{name} does not accept feature {feature}")]
    UnexpectedFeature { name: &'static str, feature: String },
}

impl LabelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LabelError::Arity { .. } => ErrorKind::Type,
            LabelError::NoSuchFeature { .. } => ErrorKind::Key,
            _ => ErrorKind::Value,
        }
    }
}
