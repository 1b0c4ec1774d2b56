//! Compliance engine — the entry point request handlers call.
//!
//! Wraps a [`DocumentVerifier`](docverify_verification::DocumentVerifier)
//! with configuration, structured logging, and the `{success, data}` /
//! `{success: false, error}` JSON envelope returned to clients.

pub mod config;
pub mod engine;
pub mod error;
pub mod response;
pub mod tracing_spans;

pub use config::EngineConfig;
pub use engine::{ComplianceEngine, SubmissionBody};
pub use error::EngineError;
pub use response::ApiResponse;
