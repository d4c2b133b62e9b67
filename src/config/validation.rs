//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate route methods, paths and status codes
//! - Validate the log filter with the same parser logging uses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MuxConfig → Result<(), Vec<ValidationError>>
//! - Capture conflicts are left to registration, which owns the tree

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::MuxConfig;
use crate::routing::{is_valid_method, is_valid_path};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted location of the offending value, e.g. `routes[2].path`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_config(config: &MuxConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(err) = EnvFilter::try_new(&config.observability.log_level) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("invalid filter {:?}: {err}", config.observability.log_level),
        ));
    }

    for (i, route) in config.routes.iter().enumerate() {
        if !is_valid_method(&route.method) {
            errors.push(ValidationError::new(
                format!("routes[{i}].method"),
                format!("invalid HTTP method {:?}", route.method),
            ));
        }
        if !is_valid_path(&route.path) {
            errors.push(ValidationError::new(
                format!("routes[{i}].path"),
                format!("{:?} must start with '/' and contain no whitespace", route.path),
            ));
        }
        if !(100..=599).contains(&route.status) {
            errors.push(ValidationError::new(
                format!("routes[{i}].status"),
                format!("{} is not a valid HTTP status", route.status),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
