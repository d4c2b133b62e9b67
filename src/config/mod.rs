//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MuxConfig (validated, immutable)
//!     → observability (log setup) and routing (LambdaMux::from_config)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; the route table is built from it and frozen
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogFormat, MuxConfig, ObservabilityConfig, RouteConfig};
pub use validation::ValidationError;
