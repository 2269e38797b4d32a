//! Key/value items that travel with a span context.
//!
//! Baggage lets a trace attach small pieces of metadata (a tenant id, a
//! request tag) to a span context so they follow the causal chain. Items
//! are plain strings and iteration order is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered set of string key/value items carried by a [`SpanContext`].
///
/// `Baggage` is cheap to clone and never mutated in place by context
/// operations: [`Baggage::with_item`] consumes the baggage and returns the
/// extended copy, which keeps span contexts immutable.
///
/// [`SpanContext`]: crate::SpanContext
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baggage {
    items: BTreeMap<String, String>,
}

impl Baggage {
    /// Create empty baggage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an item by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Return baggage extended with `key` = `value`, replacing any
    /// existing item under the same key.
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_baggage() {
        let baggage = Baggage::new();
        assert!(baggage.is_empty());
        assert_eq!(baggage.len(), 0);
        assert_eq!(baggage.get("anything"), None);
    }

    #[test]
    fn with_item_adds_and_replaces() {
        let baggage = Baggage::new()
            .with_item("tenant", "acme")
            .with_item("region", "eu");
        assert_eq!(baggage.len(), 2);
        assert_eq!(baggage.get("tenant"), Some("acme"));

        let baggage = baggage.with_item("tenant", "globex");
        assert_eq!(baggage.len(), 2);
        assert_eq!(baggage.get("tenant"), Some("globex"));
    }

    #[test]
    fn iteration_is_key_ordered() {
        let baggage = Baggage::new()
            .with_item("b", "2")
            .with_item("a", "1")
            .with_item("c", "3");
        let keys: Vec<&str> = baggage.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn serde_roundtrip() {
        let baggage = Baggage::new().with_item("tenant", "acme");
        let json = serde_json::to_string(&baggage).unwrap();
        let parsed: Baggage = serde_json::from_str(&json).unwrap();
        assert_eq!(baggage, parsed);
    }
}
