pub mod receipt_rules;
pub mod rule_based;

pub use receipt_rules::*;
pub use rule_based::*;

use crate::model::{ScorerResult, ValidatedReceipt};

/// Scores a validated receipt. Implementations are pure: the same receipt
/// always yields the same results.
pub trait Scorer: Send + Sync {
    fn score(&self, receipt: &ValidatedReceipt) -> Vec<ScorerResult>;
}

pub fn total_points(results: &[ScorerResult]) -> u64 {
    results.iter().map(|r| r.score).fold(0, u64::saturating_add)
}
