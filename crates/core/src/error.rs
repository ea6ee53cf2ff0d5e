//! # Error Types
//!
//! The algebra itself cannot fail: `empty` and `combine` are total, and a
//! fold over no self-describing values is reported as `None`, not as an error.
//!
//! The one fallible surface is reading a [`Json`](crate::json::Json) tree back.
//! Narrowing asserts which variant a node holds, and object lookup asserts a
//! key is present. Both are deterministic functions of their inputs, so there
//! is nothing to retry.

use thiserror::Error;

use crate::json::JsonKind;

/// Errors raised while projecting values out of a [`Json`](crate::json::Json) tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The node holds a different variant than the one requested.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: JsonKind, found: JsonKind },

    /// An object has no entry under the requested key.
    #[error("Key not found: {key:?}")]
    KeyNotFound { key: String },
}
