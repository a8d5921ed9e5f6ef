use once_cell::sync::Lazy;
use regex::RegexSet;
use std::sync::Arc;
use tracing::warn;
use vibeguard_core::{EffectsSummary, RiskVerdict};

use crate::errors::ExplainError;
use crate::fallback::fallback_explanation;
use crate::traits::Explainer;
use crate::types::Explanation;

// aplicados sobre o texto em minúsculas
static TECHNICAL_PATTERNS: Lazy<Option<RegexSet>> = Lazy::new(|| {
    RegexSet::new([
        r"0x[a-f0-9]+",
        r"[a-f0-9]{40,}",
        r"[a-z0-9+/]{20,}={0,2}",
        r"::[a-z_]+::",
    ])
    .ok()
});

/// Verdadeiro se o texto parece conter endereço, hash, dado codificado ou
/// caminho de tipo. Sem padrões compilados, trata tudo como técnico.
pub fn contains_technical_data(text: &str) -> bool {
    let lowered = text.to_lowercase();
    match (*TECHNICAL_PATTERNS).as_ref() {
        Some(set) => set.is_match(&lowered),
        None => true,
    }
}

/// Explicador que nunca falha.
///
/// Usa o explicador interno quando existe; qualquer erro ou saída com dados
/// técnicos cai na explicação determinística.
#[derive(Clone, Default)]
pub struct GuardedExplainer {
    inner: Option<Arc<dyn Explainer>>,
}

impl GuardedExplainer {
    pub fn new(inner: Arc<dyn Explainer>) -> Self {
        Self { inner: Some(inner) }
    }

    /// Apenas a tabela determinística
    pub fn deterministic() -> Self {
        Self { inner: None }
    }

    pub async fn explain(&self, effects: &EffectsSummary, verdict: &RiskVerdict) -> Explanation {
        let Some(inner) = &self.inner else {
            return fallback_explanation(verdict);
        };

        let outcome = match inner.explain(effects, verdict).await {
            Ok(explanation) if contains_technical_data(&explanation.all_text()) => {
                Err(ExplainError::TechnicalContent)
            }
            other => other,
        };

        match outcome {
            Ok(explanation) => explanation,
            Err(err) => {
                warn!(error = %err, "explicador indisponivel, usando fallback");
                fallback_explanation(verdict)
            }
        }
    }
}
