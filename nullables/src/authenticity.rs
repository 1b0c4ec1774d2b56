//! Nullable authenticity heuristic.

use docverify_types::VerificationRequest;
use docverify_verification::AuthenticityCheck;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A deterministic authenticity heuristic for testing.
///
/// Returns pre-configured scores in order, wrapping around.
pub struct NullAuthenticity {
    scores: Vec<f64>,
    calls: AtomicUsize,
}

impl NullAuthenticity {
    /// Create with a sequence of scores. An empty sequence always scores 1.0.
    pub fn new(scores: Vec<f64>) -> Self {
        Self {
            scores,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create with a single score returned for every call.
    pub fn constant(score: f64) -> Self {
        Self::new(vec![score])
    }

    /// Number of times the verifier asked for a score.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthenticityCheck for NullAuthenticity {
    fn name(&self) -> &str {
        "null-authenticity"
    }

    fn score(&self, _request: &VerificationRequest) -> f64 {
        let idx = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.scores.is_empty() {
            return 1.0;
        }
        self.scores[idx % self.scores.len()]
    }
}
