// ABOUTME: Configuration module for the session core
// ABOUTME: Environment-variable-driven runtime settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Environment-based configuration

mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
