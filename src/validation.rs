//! Collaboration validation.
//!
//! There is no real validator yet. [`ValidationProvider`] is the seam a real
//! implementation plugs into; [`MockValidationProvider`] is a placeholder whose
//! answers are random and carry no meaning.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollaborationVerdict {
    pub is_valid: bool,
    /// 0.0 to 100.0
    pub confidence: f64,
}

pub trait ValidationProvider: Send + Sync {
    /// Label reported to callers as the verdict's `source`.
    fn source(&self) -> &str;

    fn validate(&self, artist1: &str, artist2: &str) -> CollaborationVerdict;
}

/// Placeholder provider. Returns coin-flip verdicts.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockValidationProvider;

impl ValidationProvider for MockValidationProvider {
    fn source(&self) -> &str {
        "mock"
    }

    fn validate(&self, _artist1: &str, _artist2: &str) -> CollaborationVerdict {
        let mut rng = rand::rng();
        CollaborationVerdict {
            is_valid: rng.random::<f64>() > 0.5,
            confidence: rng.random::<f64>() * 100.0,
        }
    }
}
