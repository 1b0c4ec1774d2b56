//! Shared utilities for the document verification workspace.

pub mod logging;
pub mod time;

pub use logging::{init_tracing, LogFormat};
pub use time::parse_document_date;
