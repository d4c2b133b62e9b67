//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Route table and CLI produce:
//!     → tracing events (registration, matches, misses)
//!     → logging.rs (filter by level, format as pretty or JSON)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID is attached to every per-request event
//! - The radix core emits nothing; failures come back as values

pub mod logging;

pub use logging::init_logging;
