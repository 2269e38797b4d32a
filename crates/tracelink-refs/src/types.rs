//! Core reference types: the type tag, the call-boundary context
//! candidate, and the validated reference descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracelink_types::{Span, SpanContext};
use tracing::debug;

use crate::error::{ReferenceError, Result};
use crate::value::ValueKind;

/// Well-known tag: the referenced span is the parent and depends on the
/// referencing span's outcome.
const CHILD_OF: &str = "child_of";

/// Well-known tag: the referencing span was caused by the referenced span
/// but the parent does not wait for it.
const FOLLOWS_FROM: &str = "follows_from";

/// The causal relationship kind carried by a reference.
///
/// A tag is an arbitrary non-empty string; the invariant is enforced at
/// construction, so a `ReferenceType` can never hold the empty string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceType(String);

impl ReferenceType {
    /// The well-known `child_of` tag.
    pub fn child_of() -> Self {
        ReferenceType(CHILD_OF.to_string())
    }

    /// The well-known `follows_from` tag.
    pub fn follows_from() -> Self {
        ReferenceType(FOLLOWS_FROM.to_string())
    }

    /// Create a reference type from an arbitrary tag.
    ///
    /// Returns [`ReferenceError::EmptyType`] for the empty string.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            debug!("rejecting reference type: empty tag");
            return Err(ReferenceError::empty_type());
        }
        Ok(ReferenceType(tag))
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ReferenceType {
    type Error = ReferenceError;

    fn try_from(tag: &str) -> Result<Self> {
        ReferenceType::new(tag)
    }
}

impl TryFrom<String> for ReferenceType {
    type Error = ReferenceError;

    fn try_from(tag: String) -> Result<Self> {
        ReferenceType::new(tag)
    }
}

impl From<ReferenceType> for String {
    fn from(reference_type: ReferenceType) -> Self {
        reference_type.0
    }
}

/// A context argument as received at the API boundary, before the
/// span-or-span-context check has run.
///
/// Callers sitting at a dynamic boundary (deserialized input, FFI)
/// classify the argument into this union; [`Reference::new`] accepts the
/// first two variants and rejects the third with a descriptive error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextCandidate {
    /// An active span; its context becomes the link target.
    Span(Span),
    /// A bare span context.
    SpanContext(SpanContext),
    /// Anything else, described for the error message.
    Other(ValueKind),
}

impl From<Span> for ContextCandidate {
    fn from(span: Span) -> Self {
        ContextCandidate::Span(span)
    }
}

impl From<SpanContext> for ContextCandidate {
    fn from(context: SpanContext) -> Self {
        ContextCandidate::SpanContext(context)
    }
}

impl From<ValueKind> for ContextCandidate {
    fn from(kind: ValueKind) -> Self {
        ContextCandidate::Other(kind)
    }
}

/// A validated causal link to another span.
///
/// References are immutable once built: the type tag is guaranteed
/// non-empty and the context is guaranteed to come from a span or a span
/// context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    reference_type: ReferenceType,
    context: SpanContext,
}

impl Reference {
    /// Create a `child_of` reference to the given context.
    pub fn child_of(context: SpanContext) -> Self {
        Reference {
            reference_type: ReferenceType::child_of(),
            context,
        }
    }

    /// Create a `follows_from` reference to the given context.
    pub fn follows_from(context: SpanContext) -> Self {
        Reference {
            reference_type: ReferenceType::follows_from(),
            context,
        }
    }

    /// Build a reference from untyped arguments.
    ///
    /// The tag must be non-empty and the candidate must carry a span or a
    /// span context; a span candidate contributes its context.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracelink_refs::{Reference, ValueKind};
    /// use tracelink_types::Span;
    ///
    /// let span = Span::start("parent");
    /// let reference = Reference::new("child_of", span).unwrap();
    /// assert!(reference.is_child_of());
    ///
    /// assert!(Reference::new("", ValueKind::from(1i64)).is_err());
    /// ```
    pub fn new(
        reference_type: impl Into<String>,
        context: impl Into<ContextCandidate>,
    ) -> Result<Self> {
        let reference_type = ReferenceType::new(reference_type)?;
        let context = match context.into() {
            ContextCandidate::Span(span) => span.context().clone(),
            ContextCandidate::SpanContext(context) => context,
            ContextCandidate::Other(supplied) => {
                debug!(%supplied, "rejecting reference context");
                return Err(ReferenceError::invalid_context(supplied));
            }
        };
        Ok(Reference {
            reference_type,
            context,
        })
    }

    /// The relationship kind of this reference.
    pub fn reference_type(&self) -> &ReferenceType {
        &self.reference_type
    }

    /// The context of the referenced span.
    pub fn context(&self) -> &SpanContext {
        &self.context
    }

    /// Returns `true` if this is a `child_of` reference.
    pub fn is_child_of(&self) -> bool {
        self.reference_type.as_str() == CHILD_OF
    }

    /// Returns `true` if this is a `follows_from` reference.
    pub fn is_follows_from(&self) -> bool {
        self.reference_type.as_str() == FOLLOWS_FROM
    }
}
