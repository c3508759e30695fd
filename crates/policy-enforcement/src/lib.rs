//! Policy enforcement engine: deterministic evaluation of structured
//! requests against per-organization rule sets and grade hierarchies.
//!
//! Rule extraction, document parsing, and storage live in upstream
//! collaborators; this crate owns the decision semantics plus the service
//! plumbing (config, telemetry, HTTP router) that hosts them.

pub mod config;
pub mod enforcement;
pub mod error;
pub mod telemetry;
