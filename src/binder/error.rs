//! Argument binding errors.

use crate::core::{ParamKind, ValueKind};
use thiserror::Error;

/// Errors that can occur when checking an argument bundle against a
/// parameter signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    /// Fewer arguments were supplied than the requested position needs.
    #[error("Parameter {index} of type {expected} was not supplied")]
    Arity { index: usize, expected: ParamKind },

    /// More arguments were supplied than the signature declares.
    #[error("Too many arguments: expected at most {expected}, got {actual}")]
    TooManyArguments { expected: usize, actual: usize },

    #[error("Argument {index} has type {actual}, which is not assignable to {expected}")]
    TypeMismatch {
        index: usize,
        expected: ParamKind,
        actual: ValueKind,
    },

    /// A null argument reached a slot that requires a value.
    #[error("Argument {index} is null, but {expected} requires a value")]
    NullArgument { index: usize, expected: ParamKind },
}

impl BindError {
    /// Position the error refers to, if it is about a single slot.
    pub fn index(&self) -> Option<usize> {
        match self {
            BindError::Arity { index, .. }
            | BindError::TypeMismatch { index, .. }
            | BindError::NullArgument { index, .. } => Some(*index),
            BindError::TooManyArguments { .. } => None,
        }
    }

    /// Declared kind of the offending slot, if the error has one.
    pub fn expected_kind(&self) -> Option<&ParamKind> {
        match self {
            BindError::Arity { expected, .. }
            | BindError::TypeMismatch { expected, .. }
            | BindError::NullArgument { expected, .. } => Some(expected),
            BindError::TooManyArguments { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_report_position_and_types() {
        let arity = BindError::Arity {
            index: 1,
            expected: ParamKind::Text,
        };
        assert_eq!(arity.to_string(), "Parameter 1 of type text was not supplied");

        let too_many = BindError::TooManyArguments {
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            too_many.to_string(),
            "Too many arguments: expected at most 1, got 2"
        );

        let mismatch = BindError::TypeMismatch {
            index: 0,
            expected: ParamKind::Int,
            actual: ValueKind::Text,
        };
        assert_eq!(
            mismatch.to_string(),
            "Argument 0 has type text, which is not assignable to int"
        );
    }

    #[test]
    fn slot_accessors() {
        let error = BindError::NullArgument {
            index: 3,
            expected: ParamKind::Bool,
        };
        assert_eq!(error.index(), Some(3));
        assert_eq!(error.expected_kind(), Some(&ParamKind::Bool));

        let error = BindError::TooManyArguments {
            expected: 0,
            actual: 1,
        };
        assert_eq!(error.index(), None);
        assert_eq!(error.expected_kind(), None);
    }
}
