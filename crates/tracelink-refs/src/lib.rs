//! Causal span references for tracelink.
//!
//! This crate models the causal links between trace spans ("child-of",
//! "follows-from") and validates the arguments a reference is built from.
//! A reference pairs a type tag with the [`SpanContext`] it links to.
//!
//! # Architecture
//!
//! - A [`ReferenceType`] is a non-empty string tag naming the relationship
//!   kind. The two well-known tags are `child_of` and `follows_from`;
//!   custom tags are allowed.
//! - A [`Reference`] is the validated descriptor: a type tag plus the
//!   context of the referenced span. Building one from untyped input goes
//!   through [`Reference::new`], which rejects empty tags and context
//!   arguments that are neither a span nor a span context.
//! - [`ContextCandidate`] carries the context argument across the API
//!   boundary before validation; [`ValueKind`] describes a rejected
//!   argument (type name for structured values, kind label for
//!   primitives) so the error can say what was actually supplied.
//!
//! # Modules
//!
//! - [`error`] — [`ReferenceError`] and its two factory constructors
//! - [`types`] — [`Reference`], [`ReferenceType`], [`ContextCandidate`]
//! - [`value`] — [`ValueKind`] descriptions of arbitrary arguments
//!
//! [`SpanContext`]: tracelink_types::SpanContext

pub mod error;
pub mod types;
pub mod value;

pub use error::{ReferenceError, Result};
pub use types::{ContextCandidate, Reference, ReferenceType};
pub use value::{Primitive, ValueKind};
