//! Configuration schema definitions.
//!
//! This module defines the configuration structure for a route table.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MuxConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Routes served by fixed-response handlers.
    pub routes: Vec<RouteConfig>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter, a level or `EnvFilter` directives (e.g. "lambdamux=debug,info").
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Output format of log events.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouteConfig {
    /// HTTP method (e.g., "GET").
    pub method: String,

    /// Path pattern, `:name` segments capture (e.g., "/pet/:petId").
    pub path: String,

    /// Status code returned on a match.
    pub status: u16,

    /// Fixed body. When absent the path and captures are echoed as JSON.
    pub body: Option<String>,

    pub content_type: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            status: 200,
            body: None,
            content_type: "application/json".to_string(),
        }
    }
}
