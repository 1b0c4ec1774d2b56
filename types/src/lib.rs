//! Fundamental types for identity document verification.
//!
//! This crate defines the value objects shared by every other crate in the
//! workspace: the inbound verification request, the reference customer the
//! document is checked against, and the verdict returned to the caller.
//!
//! All types serialize to camelCase JSON, matching the bodies exchanged with
//! the surrounding request handlers.

pub mod customer;
pub mod document;
pub mod result;

pub use customer::Customer;
pub use document::{DocumentData, DocumentType, VerificationRequest};
pub use result::{ExtractedData, VerificationResult, VALIDITY_THRESHOLD};
