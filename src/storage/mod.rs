// ABOUTME: Key-value storage abstraction for session persistence
// ABOUTME: StorageBackend trait with in-memory and JSON-file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! # Storage Backends
//!
//! The session store persists through this key-value surface, conceptually a
//! single serialized record per key. Backends are synchronous: a session
//! store operation must be fully reflected in storage before it returns.

use genie_core::errors::StorageError;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Synchronous key-value storage surface.
///
/// All implementations must round-trip values exactly: `get` after `set`
/// returns the identical string.
pub trait StorageBackend: Send {
    /// Read the value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`; removing a missing key is a no-op
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying delete fails.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
