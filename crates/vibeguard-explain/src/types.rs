use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vibeguard_core::RiskTier;

use crate::errors::ExplainError;

/// Ação recomendada ao usuário
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendedAction {
    #[serde(rename = "Sign")]
    Sign,
    #[serde(rename = "Be Careful")]
    BeCareful,
    #[serde(rename = "Do Not Sign")]
    DoNotSign,
}

impl RecommendedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::Sign => "Sign",
            RecommendedAction::BeCareful => "Be Careful",
            RecommendedAction::DoNotSign => "Do Not Sign",
        }
    }

    /// Ação associada a cada nível
    pub fn for_tier(tier: RiskTier) -> Self {
        match tier {
            RiskTier::Green => RecommendedAction::Sign,
            RiskTier::Yellow => RecommendedAction::BeCareful,
            RiskTier::Red => RecommendedAction::DoNotSign,
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendedAction {
    type Err = ExplainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Sign" => Ok(RecommendedAction::Sign),
            "Be Careful" => Ok(RecommendedAction::BeCareful),
            "Do Not Sign" => Ok(RecommendedAction::DoNotSign),
            other => Err(ExplainError::InvalidResponse(format!(
                "unknown recommended action '{}'",
                other
            ))),
        }
    }
}

/// Explicação em linguagem simples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub headline: String,
    pub plain_english_summary: String,
    pub bullet_points: Vec<String>,
    pub recommended_action: RecommendedAction,
    pub what_to_check: Vec<String>,
}

impl Explanation {
    /// Todo o texto livre, usado pela checagem de dados técnicos
    pub fn all_text(&self) -> String {
        let mut parts = vec![self.headline.as_str(), self.plain_english_summary.as_str()];
        parts.extend(self.bullet_points.iter().map(String::as_str));
        parts.extend(self.what_to_check.iter().map(String::as_str));
        parts.join(" ")
    }
}
