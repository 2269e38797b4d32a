use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IdError;

/// 128-bit identifier naming the trace a span belongs to.
///
/// The all-zero id is representable but invalid: it marks a context that
/// was never assigned a real identity. [`TraceId::random`] never produces
/// it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TraceId(u128);

impl TraceId {
    /// The all-zero (invalid) trace id.
    pub const INVALID: Self = Self(0);

    /// Create a trace id from a raw value.
    pub const fn from_u128(raw: u128) -> Self {
        Self(raw)
    }

    /// Generate a random, always-valid trace id.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        loop {
            let raw: u128 = rand::Rng::gen(&mut rng);
            if raw != 0 {
                return Self(raw);
            }
        }
    }

    /// The raw value.
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Returns `true` if this id is non-zero.
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// Lower-case hex encoding (32 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.to_be_bytes())
    }

    /// Parse from a 32-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, IdError> {
        if s.len() != 32 {
            return Err(IdError::InvalidLength {
                expected: 32,
                actual: s.len(),
            });
        }
        let bytes = hex::decode(s).map_err(|e| IdError::InvalidHex(e.to_string()))?;
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes);
        Ok(Self(u128::from_be_bytes(arr)))
    }
}

impl fmt::Debug for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraceId({})", self.to_hex())
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// 64-bit identifier naming a single span within a trace.
///
/// Follows the same validity convention as [`TraceId`]: zero means the id
/// was never assigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpanId(u64);

impl SpanId {
    /// The all-zero (invalid) span id.
    pub const INVALID: Self = Self(0);

    /// Create a span id from a raw value.
    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    /// Generate a random, always-valid span id.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        loop {
            let raw: u64 = rand::Rng::gen(&mut rng);
            if raw != 0 {
                return Self(raw);
            }
        }
    }

    /// The raw value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns `true` if this id is non-zero.
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// Lower-case hex encoding (16 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.to_be_bytes())
    }

    /// Parse from a 16-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, IdError> {
        if s.len() != 16 {
            return Err(IdError::InvalidLength {
                expected: 16,
                actual: s.len(),
            });
        }
        let bytes = hex::decode(s).map_err(|e| IdError::InvalidHex(e.to_string()))?;
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes);
        Ok(Self(u64::from_be_bytes(arr)))
    }
}

impl fmt::Debug for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpanId({})", self.to_hex())
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
