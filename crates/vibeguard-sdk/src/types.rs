use serde::{Deserialize, Serialize};
use vibeguard_core::{EffectsSummary, RawSimulation, RiskVerdict};
use vibeguard_explain::Explanation;

use crate::errors::AnalysisError;

/// Requisição de análise, como chega da carteira
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Transação serializada em base64
    pub transaction_bytes: String,
    pub network: String,
    #[serde(default)]
    pub viewer_address: Option<String>,
}

impl AnalysisRequest {
    pub fn new(transaction_bytes: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            transaction_bytes: transaction_bytes.into(),
            network: network.into(),
            viewer_address: None,
        }
    }

    pub fn with_viewer(mut self, viewer_address: impl Into<String>) -> Self {
        self.viewer_address = Some(viewer_address.into());
        self
    }
}

/// Resultado de `Analyzer::simulate`: efeitos sem veredito
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub effects_summary: EffectsSummary,
    /// Payload verbatim do backend, apenas para exibição
    pub raw_simulation: RawSimulation,
}

/// Resultado completo da análise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub effects_summary: EffectsSummary,
    pub risk_verdict: RiskVerdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_simulation: Option<RawSimulation>,
}

/// Resposta entregue ao chamador. Uma falha aparece como `could_not_analyze`,
/// nunca como veredito.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Completed(AnalysisReport),
    CouldNotAnalyze { kind: String, message: String },
}

impl AnalysisOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, AnalysisOutcome::Completed(_))
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Completed(report) => Some(report),
            AnalysisOutcome::CouldNotAnalyze { .. } => None,
        }
    }
}

impl From<AnalysisError> for AnalysisOutcome {
    fn from(err: AnalysisError) -> Self {
        AnalysisOutcome::CouldNotAnalyze {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<Result<AnalysisReport, AnalysisError>> for AnalysisOutcome {
    fn from(result: Result<AnalysisReport, AnalysisError>) -> Self {
        match result {
            Ok(report) => AnalysisOutcome::Completed(report),
            Err(err) => err.into(),
        }
    }
}
