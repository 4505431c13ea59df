//! The fixed loyalty-point rule set for receipts.

use crate::{
    model::{ScorerResult, ValidatedReceipt},
    scorers::RuleBasedScorer,
};

pub const RETAILER_NAME: &str = "Retailer name";
pub const ROUND_DOLLAR_TOTAL: &str = "Round dollar total";
pub const QUARTER_MULTIPLE_TOTAL: &str = "Total multiple of 0.25";
pub const ITEM_PAIRS: &str = "Every two items";
pub const DESCRIPTION_LENGTH: &str = "Item description length multiple of 3";
pub const ODD_PURCHASE_DAY: &str = "Odd purchase day";
pub const AFTERNOON_PURCHASE: &str = "Purchase between 14:00 and 16:00";

/// Builds the scorer with all seven receipt rules.
pub fn receipt_scorer() -> RuleBasedScorer {
    let mut scorer = RuleBasedScorer::new();
    scorer.add_rule(retailer_name);
    scorer.add_rule(round_dollar_total);
    scorer.add_rule(quarter_multiple_total);
    scorer.add_rule(item_pairs);
    scorer.add_rule(description_length);
    scorer.add_rule(odd_purchase_day);
    scorer.add_rule(afternoon_purchase);
    scorer
}

fn result(name: &str, score: u64) -> Option<ScorerResult> {
    (score > 0).then(|| ScorerResult {
        name: name.to_string(),
        score,
    })
}

/// One point per character of the retailer name, counted as submitted.
pub fn retailer_name(receipt: &ValidatedReceipt) -> Option<ScorerResult> {
    result(RETAILER_NAME, receipt.retailer().chars().count() as u64)
}

/// 50 points when the total has no cents.
pub fn round_dollar_total(receipt: &ValidatedReceipt) -> Option<ScorerResult> {
    if receipt.total().fractional_cents() == 0 {
        return result(ROUND_DOLLAR_TOTAL, 50);
    }
    None
}

/// 25 points when the total is a multiple of 0.25. Round totals qualify too.
pub fn quarter_multiple_total(receipt: &ValidatedReceipt) -> Option<ScorerResult> {
    if receipt.total().fractional_cents() % 25 == 0 {
        return result(QUARTER_MULTIPLE_TOTAL, 25);
    }
    None
}

/// 5 points for every two items.
pub fn item_pairs(receipt: &ValidatedReceipt) -> Option<ScorerResult> {
    result(ITEM_PAIRS, 5 * (receipt.items().len() as u64 / 2))
}

/// For each item whose trimmed description length is a multiple of 3, the
/// price multiplied by 0.2 and rounded up. Computed in cents as
/// `ceil(cents / 500)` so no float rounding leaks in.
pub fn description_length(receipt: &ValidatedReceipt) -> Option<ScorerResult> {
    let score = receipt
        .items()
        .iter()
        .filter(|item| item.short_description().trim().chars().count() % 3 == 0)
        .map(|item| item.price().cents().div_ceil(500))
        .fold(0, u64::saturating_add);
    result(DESCRIPTION_LENGTH, score)
}

/// 6 points when the day of the purchase date is odd.
pub fn odd_purchase_day(receipt: &ValidatedReceipt) -> Option<ScorerResult> {
    if receipt.purchase_date().day % 2 == 1 {
        return result(ODD_PURCHASE_DAY, 6);
    }
    None
}

/// 10 points when the purchase time is after 14:00 and before 16:00, both
/// bounds exclusive.
pub fn afternoon_purchase(receipt: &ValidatedReceipt) -> Option<ScorerResult> {
    let hhmm = receipt.purchase_time().as_hhmm();
    if hhmm > 1400 && hhmm < 1600 {
        return result(AFTERNOON_PURCHASE, 10);
    }
    None
}
