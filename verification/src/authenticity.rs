//! Document authenticity heuristics.
//!
//! No real signal source (security features, MRZ checksums, hologram
//! detection) is wired in yet. [`RandomAuthenticity`] stands in for one and
//! always reports high confidence.

use docverify_types::VerificationRequest;
use rand::Rng;
use std::sync::Arc;

/// Scores below this flag the document as possibly forged.
pub const AUTHENTICITY_THRESHOLD: f64 = 0.7;

/// Maximum confidence deduction for a score of zero.
const AUTHENTICITY_WEIGHT: f64 = 40.0;

/// A pluggable authenticity heuristic.
///
/// Called exactly once per verification.
pub trait AuthenticityCheck: Send + Sync {
    /// Human-readable name of this heuristic.
    fn name(&self) -> &str;

    /// Confidence in `[0.0, 1.0]` that the document is genuine.
    fn score(&self, request: &VerificationRequest) -> f64;
}

/// Uniformly random score in `[0.9, 1.0)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomAuthenticity;

impl AuthenticityCheck for RandomAuthenticity {
    fn name(&self) -> &str {
        "random"
    }

    fn score(&self, _request: &VerificationRequest) -> f64 {
        rand::thread_rng().gen_range(0.9..1.0)
    }
}

impl<T: AuthenticityCheck + ?Sized> AuthenticityCheck for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self, request: &VerificationRequest) -> f64 {
        (**self).score(request)
    }
}

/// Confidence points lost for a low authenticity score.
///
/// Zero at or above [`AUTHENTICITY_THRESHOLD`].
pub fn authenticity_deduction(score: f64) -> u32 {
    if score >= AUTHENTICITY_THRESHOLD {
        return 0;
    }
    ((1.0 - score.clamp(0.0, 1.0)) * AUTHENTICITY_WEIGHT).round() as u32
}
