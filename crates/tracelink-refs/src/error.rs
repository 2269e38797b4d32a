//! Error types for reference construction.

use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised when a span reference is built from invalid arguments.
///
/// Both conditions are detected by the caller supplying the arguments; the
/// constructors here only manufacture the error value. They are pure,
/// always succeed, and never log or panic — surfacing the error is the
/// caller's job.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// The reference type tag was the empty string.
    #[error("Reference type can not be an empty string")]
    EmptyType,

    /// The context argument was neither a span nor a span context.
    #[error("Reference expects a Span or SpanContext as context, got {supplied}")]
    InvalidContext {
        /// Description of what was actually supplied.
        supplied: ValueKind,
    },
}

impl ReferenceError {
    /// The error for an empty reference-type tag.
    pub fn empty_type() -> Self {
        ReferenceError::EmptyType
    }

    /// The error for a context argument that fails the span-or-span-context
    /// check, naming what was actually supplied.
    pub fn invalid_context(supplied: impl Into<ValueKind>) -> Self {
        ReferenceError::InvalidContext {
            supplied: supplied.into(),
        }
    }
}

/// Convenience type alias for reference operations.
pub type Result<T> = std::result::Result<T, ReferenceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Primitive;

    struct UnrelatedType;

    #[test]
    fn empty_type_message_is_fixed() {
        assert_eq!(
            ReferenceError::empty_type().to_string(),
            "Reference type can not be an empty string"
        );
    }

    #[test]
    fn empty_type_is_idempotent() {
        assert_eq!(ReferenceError::empty_type(), ReferenceError::empty_type());
    }

    #[test]
    fn invalid_context_is_idempotent() {
        assert_eq!(
            ReferenceError::invalid_context(42i64),
            ReferenceError::invalid_context(42i64)
        );
    }

    #[test]
    fn invalid_context_names_primitive_kinds() {
        assert!(ReferenceError::invalid_context(42i64)
            .to_string()
            .contains("integer"));
        assert!(ReferenceError::invalid_context(Primitive::Null)
            .to_string()
            .contains("null"));
        assert!(ReferenceError::invalid_context(true)
            .to_string()
            .contains("boolean"));
        assert!(ReferenceError::invalid_context("oops")
            .to_string()
            .contains("string"));
    }

    #[test]
    fn invalid_context_names_structured_types() {
        let err = ReferenceError::invalid_context(ValueKind::describing(&UnrelatedType));
        assert!(err.to_string().contains("UnrelatedType"));
    }

    #[test]
    fn invalid_context_message_shape() {
        assert_eq!(
            ReferenceError::invalid_context(42i64).to_string(),
            "Reference expects a Span or SpanContext as context, got integer"
        );
    }
}
