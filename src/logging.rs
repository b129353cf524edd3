// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures log levels and output formats over tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Structured logging configuration

use std::env;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use genie_core::constants::service;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (may be a full `EnvFilter` expression)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            service_name: service::SERVICE_NAME.into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    /// (`RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`)
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => {
                // Production defaults to JSON unless a format is forced
                let environment = env::var("ENVIRONMENT").unwrap_or_default();
                if environment == "production" {
                    LogFormat::Json
                } else {
                    LogFormat::Pretty
                }
            }
        };
        Self {
            level,
            format,
            service_name: service::SERVICE_NAME.into(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);
        match self.format {
            LogFormat::Json => builder
                .json()
                .try_init()
                .map_err(|e| anyhow!("failed to install subscriber: {e}"))?,
            LogFormat::Pretty => builder
                .pretty()
                .try_init()
                .map_err(|e| anyhow!("failed to install subscriber: {e}"))?,
            LogFormat::Compact => builder
                .compact()
                .try_init()
                .map_err(|e| anyhow!("failed to install subscriber: {e}"))?,
        }
        tracing::info!(
            service = %self.service_name,
            level = %self.level,
            "logging initialized"
        );
        Ok(())
    }
}
