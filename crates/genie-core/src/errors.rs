// ABOUTME: Unified error types for the session core
// ABOUTME: ValidationError, SessionError, and StorageError definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! # Unified Error Handling
//!
//! Every fallible operation in the session core returns one of these types as
//! an explicit `Result`. Nothing in this crate panics or throws across a
//! component boundary: validation failures carry the offending field names so
//! a caller can highlight them inline, and storage corruption is absorbed by
//! the session store rather than surfaced to users.

use thiserror::Error;

/// A required field was missing or malformed.
///
/// Carries the names of every offending field so the presentation layer can
/// highlight all of them in one pass instead of failing field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for field(s): {}", fields.join(", "))]
pub struct ValidationError {
    /// Names of the missing or invalid fields, in schema order
    pub fields: Vec<String>,
}

impl ValidationError {
    /// Build a validation error from field names
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a specific field is among the offenders
    #[must_use]
    pub fn names_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// Failures from the key-value storage surface.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying read/write failed
    #[error("storage I/O failure for key `{key}`: {source}")]
    Io {
        /// Storage key being accessed
        key: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Value could not be serialized for persistence
    #[error("could not serialize value for key `{key}`: {source}")]
    Serialize {
        /// Storage key being written
        key: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Persisted value could not be parsed back into the session shape.
    ///
    /// The session store absorbs this variant on `load()`: the corrupt record
    /// is discarded and the store starts from an empty session. It is logged,
    /// never propagated to callers.
    #[error("corrupt value under key `{key}`: {source}")]
    Corrupt {
        /// Storage key holding the corrupt value
        key: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error type for session store operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A profile or step submission failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation requires a committed profile and none is present
    #[error("no active session: a committed profile is required")]
    NoActiveSession,

    /// The storage backend failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_all_fields() {
        let err = ValidationError::new(["name", "goals"]);
        assert!(err.names_field("name"));
        assert!(err.names_field("goals"));
        assert!(!err.names_field("age"));
        assert_eq!(err.to_string(), "validation failed for field(s): name, goals");
    }

    #[test]
    fn session_error_wraps_validation() {
        let err = SessionError::from(ValidationError::new(["name"]));
        match err {
            SessionError::Validation(v) => assert!(v.names_field("name")),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn storage_error_messages_name_the_key() {
        let source = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = StorageError::Corrupt {
            key: "wellnessState".to_owned(),
            source,
        };
        assert!(err.to_string().contains("corrupt value under key `wellnessState`"));

        let source = serde_json::from_str::<i32>("{").unwrap_err();
        let err = StorageError::Serialize {
            key: "wellnessUser".to_owned(),
            source,
        };
        assert!(err.to_string().contains("key `wellnessUser`"));
    }
}
