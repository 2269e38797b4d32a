//! Descriptions of arbitrary values supplied where a span or span context
//! was expected.
//!
//! Rust cannot inspect an arbitrary value's type at runtime, so the
//! distinction between "structured value" and "primitive" is made at the
//! call boundary: the caller classifies the argument into a [`ValueKind`]
//! and the error message renders it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a caller actually supplied as a context argument.
///
/// Structured values are reported by their concrete type name, primitives
/// by a fixed kind label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// A structured value, described by its type name (e.g. `"Baggage"`).
    Structured(String),
    /// A primitive value, described by its kind label (e.g. `"integer"`).
    Primitive(Primitive),
}

/// The primitive kinds a context argument can be mistaken for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    Null,
    Boolean,
    Integer,
    Float,
    String,
}

impl Primitive {
    /// The fixed label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Boolean => "boolean",
            Primitive::Integer => "integer",
            Primitive::Float => "float",
            Primitive::String => "string",
        }
    }
}

impl ValueKind {
    /// Describe a structured value by an explicit type name.
    pub fn structured(type_name: impl Into<String>) -> Self {
        ValueKind::Structured(type_name.into())
    }

    /// Describe a structured value by the name of its Rust type.
    ///
    /// Module paths are stripped so the message names the type the way the
    /// caller wrote it: `Vec<String>` rather than
    /// `alloc::vec::Vec<alloc::string::String>`.
    pub fn of<T: ?Sized>() -> Self {
        ValueKind::Structured(short_type_name(std::any::type_name::<T>()))
    }

    /// Describe an actual value by the name of its Rust type.
    pub fn describing<T: ?Sized>(_value: &T) -> Self {
        ValueKind::of::<T>()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Structured(name) => f.write_str(name),
            ValueKind::Primitive(kind) => f.write_str(kind.label()),
        }
    }
}

/// Strip module paths from every segment of a type name, keeping generic
/// parameters intact.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
    out
}

macro_rules! primitive_value_kind {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl From<$ty> for ValueKind {
                fn from(_: $ty) -> Self {
                    ValueKind::Primitive(Primitive::$kind)
                }
            }
        )*
    };
}

primitive_value_kind! {
    i8 => Integer,
    i16 => Integer,
    i32 => Integer,
    i64 => Integer,
    i128 => Integer,
    u8 => Integer,
    u16 => Integer,
    u32 => Integer,
    u64 => Integer,
    u128 => Integer,
    f32 => Float,
    f64 => Float,
    bool => Boolean,
    () => Null,
}

impl From<&str> for ValueKind {
    fn from(_: &str) -> Self {
        ValueKind::Primitive(Primitive::String)
    }
}

impl From<String> for ValueKind {
    fn from(_: String) -> Self {
        ValueKind::Primitive(Primitive::String)
    }
}

impl From<Primitive> for ValueKind {
    fn from(kind: Primitive) -> Self {
        ValueKind::Primitive(kind)
    }
}
