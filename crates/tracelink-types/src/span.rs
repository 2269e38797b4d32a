use serde::{Deserialize, Serialize};

use crate::context::SpanContext;
use crate::id::{SpanId, TraceId};

/// An in-flight unit of traced work.
///
/// Only the parts needed to link spans causally are modeled: the operation
/// name and the identifying [`SpanContext`]. Lifecycle concerns (finish
/// timestamps, mutable attributes, recording) belong to a tracer, not to
/// this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    operation_name: String,
    context: SpanContext,
}

impl Span {
    /// Create a span over an existing context.
    pub fn new(operation_name: impl Into<String>, context: SpanContext) -> Self {
        Self {
            operation_name: operation_name.into(),
            context,
        }
    }

    /// Start a span with a freshly generated identity.
    ///
    /// Begins a new trace: both the trace id and the span id are random
    /// (and therefore valid).
    pub fn start(operation_name: impl Into<String>) -> Self {
        Self::new(
            operation_name,
            SpanContext::new(TraceId::random(), SpanId::random()),
        )
    }

    /// The human-readable name of the operation this span represents.
    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    /// The identifying state of this span.
    pub fn context(&self) -> &SpanContext {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_context() {
        let ctx = SpanContext::new(TraceId::from_u128(1), SpanId::from_u64(2));
        let span = Span::new("get_account", ctx.clone());
        assert_eq!(span.operation_name(), "get_account");
        assert_eq!(span.context(), &ctx);
    }

    #[test]
    fn started_spans_have_valid_identity() {
        let span = Span::start("load_config");
        assert!(span.context().is_valid());
    }

    #[test]
    fn started_spans_have_distinct_identity() {
        let a = Span::start("op");
        let b = Span::start("op");
        assert_ne!(a.context(), b.context());
    }
}
