//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging with key-value fields
//! - Metrics are cheap (atomic increments)
//! - The Prometheus exporter is opt-in; counters still record without it

pub mod logging;
pub mod metrics;
