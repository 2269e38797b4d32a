use std::fmt;

use serde::{Deserialize, Serialize};

use crate::baggage::Baggage;
use crate::id::{SpanId, TraceId};

/// The immutable, propagatable identifying state of a span.
///
/// A `SpanContext` is the part of a span that survives serialization: the
/// trace id, the span id, and any baggage items. It carries none of the
/// span's in-flight data, so it can be handed to other components (and, in
/// a full tracer, other processes) long after the span itself has ended.
///
/// Contexts are never mutated. Operations that "change" baggage return a
/// new context and leave the original untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanContext {
    trace_id: TraceId,
    span_id: SpanId,
    baggage: Baggage,
}

impl SpanContext {
    /// Create a context with empty baggage.
    pub fn new(trace_id: TraceId, span_id: SpanId) -> Self {
        Self {
            trace_id,
            span_id,
            baggage: Baggage::new(),
        }
    }

    /// Create a context carrying the given baggage.
    pub fn with_baggage(trace_id: TraceId, span_id: SpanId, baggage: Baggage) -> Self {
        Self {
            trace_id,
            span_id,
            baggage,
        }
    }

    /// The id of the trace this context belongs to.
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// The id of the span this context identifies.
    pub fn span_id(&self) -> SpanId {
        self.span_id
    }

    /// The baggage carried by this context.
    pub fn baggage(&self) -> &Baggage {
        &self.baggage
    }

    /// Look up a single baggage item.
    pub fn baggage_item(&self, key: &str) -> Option<&str> {
        self.baggage.get(key)
    }

    /// Return a new context with `key` = `value` added to the baggage.
    pub fn with_baggage_item(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            baggage: self.baggage.with_item(key, value),
            ..self
        }
    }

    /// Returns `true` if both the trace id and the span id are non-zero.
    pub fn is_valid(&self) -> bool {
        self.trace_id.is_valid() && self.span_id.is_valid()
    }
}

impl fmt::Display for SpanContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.trace_id, self.span_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> SpanContext {
        SpanContext::new(TraceId::from_u128(7), SpanId::from_u64(11))
    }

    #[test]
    fn accessors() {
        let ctx = test_context();
        assert_eq!(ctx.trace_id(), TraceId::from_u128(7));
        assert_eq!(ctx.span_id(), SpanId::from_u64(11));
        assert!(ctx.baggage().is_empty());
    }

    #[test]
    fn validity_requires_both_ids() {
        assert!(test_context().is_valid());
        assert!(!SpanContext::new(TraceId::INVALID, SpanId::from_u64(1)).is_valid());
        assert!(!SpanContext::new(TraceId::from_u128(1), SpanId::INVALID).is_valid());
        assert!(!SpanContext::new(TraceId::INVALID, SpanId::INVALID).is_valid());
    }

    #[test]
    fn with_baggage_item_leaves_original_untouched() {
        let ctx = test_context();
        let extended = ctx.clone().with_baggage_item("tenant", "acme");

        assert_eq!(ctx.baggage_item("tenant"), None);
        assert_eq!(extended.baggage_item("tenant"), Some("acme"));
        assert_eq!(extended.trace_id(), ctx.trace_id());
        assert_eq!(extended.span_id(), ctx.span_id());
    }

    #[test]
    fn display_joins_ids_with_colon() {
        let ctx = SpanContext::new(TraceId::from_u128(1), SpanId::from_u64(2));
        assert_eq!(
            ctx.to_string(),
            "00000000000000000000000000000001:0000000000000002"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let ctx = test_context().with_baggage_item("region", "eu");
        let json = serde_json::to_string(&ctx).unwrap();
        let parsed: SpanContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, parsed);
    }
}
