//! Nullable infrastructure for deterministic testing.
//!
//! Everything nondeterministic the verifier touches (the wall clock, the
//! authenticity heuristic, the OCR backend) sits behind a trait. This crate
//! provides implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record how often they were called
//!
//! Usage: swap real implementations for nullables in tests.

pub mod authenticity;
pub mod clock;
pub mod ocr;

pub use authenticity::NullAuthenticity;
pub use clock::NullClock;
pub use ocr::NullOcr;
