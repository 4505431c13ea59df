use crate::{
    model::{ScorerResult, ValidatedReceipt},
    scorers::Scorer,
};

type Rule = Box<dyn Fn(&ValidatedReceipt) -> Option<ScorerResult> + Send + Sync>;

/// Applies independent rules in insertion order and keeps the result of every
/// rule that fired.
#[derive(Default)]
pub struct RuleBasedScorer {
    rules: Vec<Rule>,
}

impl RuleBasedScorer {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(
        &mut self,
        rule: impl Fn(&ValidatedReceipt) -> Option<ScorerResult> + Send + Sync + 'static,
    ) {
        self.rules.push(Box::new(rule));
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Scorer for RuleBasedScorer {
    fn score(&self, receipt: &ValidatedReceipt) -> Vec<ScorerResult> {
        let mut results = Vec::new();

        for rule in &self.rules {
            if let Some(result) = rule(receipt) {
                tracing::debug!(rule = %result.name, points = result.score, "Rule triggered");
                results.push(result);
            }
        }

        results
    }
}
