//! Foundation types for tracelink.
//!
//! This crate provides the identity and context types used throughout the
//! tracelink system. Every other tracelink crate depends on
//! `tracelink-types`.
//!
//! # Key Types
//!
//! - [`TraceId`] — 128-bit trace identifier (non-zero when valid)
//! - [`SpanId`] — 64-bit span identifier (non-zero when valid)
//! - [`Baggage`] — Key/value items that travel with a span context
//! - [`SpanContext`] — The immutable, propagatable identifying state of a span
//! - [`Span`] — An in-flight unit of traced work

pub mod baggage;
pub mod context;
pub mod error;
pub mod id;
pub mod span;

pub use baggage::Baggage;
pub use context::SpanContext;
pub use error::IdError;
pub use id::{SpanId, TraceId};
pub use span::Span;
