use async_trait::async_trait;
use vibeguard_core::{EffectsSummary, RiskVerdict};

use crate::errors::Result;
use crate::types::Explanation;

/// Gera uma explicação a partir do resumo e do veredito
#[async_trait]
pub trait Explainer: Send + Sync {
    async fn explain(&self, effects: &EffectsSummary, verdict: &RiskVerdict) -> Result<Explanation>;
}
