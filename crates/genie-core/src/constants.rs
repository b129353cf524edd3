// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Storage keys, service names, and identity defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Application constants organized by domain

/// Keys under which session state is persisted in the key-value storage surface
pub mod storage_keys {
    /// Committed user summary record (id, name, email, creation time)
    pub const WELLNESS_USER: &str = "wellnessUser";

    /// Full serialized session aggregate
    pub const WELLNESS_STATE: &str = "wellnessState";
}

/// Service identity used for logging and generated identifiers
pub mod service {
    /// Service name reported in structured logs
    pub const SERVICE_NAME: &str = "wellness-genie";

    /// Domain suffix for the computed email-like identifier on the user
    /// summary record
    pub const EMAIL_DOMAIN: &str = "student.edu";
}
