use vibeguard_core::{RiskTier, RiskVerdict};

use crate::types::{Explanation, RecommendedAction};

pub const WHAT_TO_CHECK: [&str; 3] = [
    "Verify the transaction is from a trusted source",
    "Confirm you intended to perform this action",
    "Check that any asset amounts match your expectations",
];

fn tier_copy(tier: RiskTier) -> (&'static str, &'static str) {
    match tier {
        RiskTier::Red => (
            "High Risk Transaction Detected",
            "This transaction has been flagged as high risk. It may result in loss of assets or unwanted changes to your account.",
        ),
        RiskTier::Yellow => (
            "Caution Required",
            "This transaction requires careful review. While not immediately dangerous, it involves complex operations that should be verified.",
        ),
        RiskTier::Green => (
            "Transaction Appears Safe",
            "This transaction appears to be safe based on our analysis. It follows expected patterns with no obvious risks.",
        ),
    }
}

/// Explicação determinística a partir do veredito. Os motivos viram os tópicos.
pub fn fallback_explanation(verdict: &RiskVerdict) -> Explanation {
    let (headline, summary) = tier_copy(verdict.tier);
    Explanation {
        headline: headline.to_string(),
        plain_english_summary: summary.to_string(),
        bullet_points: verdict.reasons.clone(),
        recommended_action: RecommendedAction::for_tier(verdict.tier),
        what_to_check: WHAT_TO_CHECK.iter().map(|s| s.to_string()).collect(),
    }
}
