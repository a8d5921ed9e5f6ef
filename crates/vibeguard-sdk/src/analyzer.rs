use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use uuid::Uuid;
use vibeguard_core::utils::{validate_network, validate_transaction_input};
use vibeguard_core::{EffectsSummary, Network, RawSimulation};
use vibeguard_effects::normalize;
use vibeguard_explain::{GeminiExplainer, GuardedExplainer};
use vibeguard_risk::RiskClassifier;
use vibeguard_rpc::{NetworkBackends, NetworkBackendsConfig};
use vibeguard_simulate::SimulationExecutor;

use crate::errors::Result;
use crate::types::{AnalysisOutcome, AnalysisReport, AnalysisRequest, SimulationReport};

/// Requisição já validada
struct Prepared {
    transaction_bytes: String,
    network: Network,
    viewer_address: Option<String>,
}

/// Pipeline Executor → Normalizer → Classifier (→ Explainer).
///
/// Sem estado entre requisições; pode ser compartilhado entre tarefas.
pub struct Analyzer {
    executor: SimulationExecutor,
    classifier: RiskClassifier,
    explainer: GuardedExplainer,
    include_raw: bool,
}

impl Analyzer {
    pub fn new(executor: SimulationExecutor) -> Self {
        Self {
            executor,
            classifier: RiskClassifier::default(),
            explainer: GuardedExplainer::deterministic(),
            include_raw: false,
        }
    }

    /// Monta o pipeline a partir das variáveis de ambiente. Sem
    /// `GEMINI_API_KEY` as explicações usam apenas a tabela determinística.
    pub fn from_env() -> Result<Self> {
        let backends = NetworkBackends::from_config(&NetworkBackendsConfig::from_env())?;
        let explainer = match GeminiExplainer::from_env() {
            Ok(gemini) => GuardedExplainer::new(Arc::new(gemini)),
            Err(err) => {
                info!(reason = %err, "explicador externo desativado");
                GuardedExplainer::deterministic()
            }
        };
        Ok(Self::new(SimulationExecutor::new(backends)).with_explainer(explainer))
    }

    pub fn with_classifier(mut self, classifier: RiskClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_explainer(mut self, explainer: GuardedExplainer) -> Self {
        self.explainer = explainer;
        self
    }

    /// Anexa o payload bruto aos relatórios de `analyze` e `explain`
    pub fn with_raw_simulation(mut self, include: bool) -> Self {
        self.include_raw = include;
        self
    }

    /// Apenas simulação e normalização
    pub async fn simulate(&self, request: &AnalysisRequest) -> Result<SimulationReport> {
        let prepared = prepare(request)?;
        let (effects_summary, raw_simulation) = self
            .run_simulation(&prepared)
            .instrument(request_span("simulate", prepared.network))
            .await?;
        Ok(SimulationReport {
            effects_summary,
            raw_simulation,
        })
    }

    /// Simulação, normalização e veredito
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let prepared = prepare(request)?;
        self.run_analysis(&prepared, false)
            .instrument(request_span("analyze", prepared.network))
            .await
    }

    /// Como `analyze`, acrescentando a explicação em linguagem simples
    pub async fn explain(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let prepared = prepare(request)?;
        self.run_analysis(&prepared, true)
            .instrument(request_span("explain", prepared.network))
            .await
    }

    /// `analyze` com o resultado já no formato entregue ao chamador
    pub async fn analyze_outcome(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        self.analyze(request).await.into()
    }

    async fn run_simulation(&self, prepared: &Prepared) -> Result<(EffectsSummary, RawSimulation)> {
        let viewer = prepared.viewer_address.as_deref();
        let raw = self
            .executor
            .execute(&prepared.transaction_bytes, prepared.network, viewer)
            .await?;
        let summary = normalize(&raw, viewer);
        Ok((summary, raw))
    }

    async fn run_analysis(&self, prepared: &Prepared, with_explanation: bool) -> Result<AnalysisReport> {
        let (effects_summary, raw) = self.run_simulation(prepared).await?;
        let risk_verdict = self.classifier.classify(&effects_summary);

        info!(
            tier = %risk_verdict.tier,
            confidence = risk_verdict.confidence,
            notes = effects_summary.uncertainty_notes.len(),
            "analise concluida"
        );

        let explanation = if with_explanation {
            Some(self.explainer.explain(&effects_summary, &risk_verdict).await)
        } else {
            None
        };

        Ok(AnalysisReport {
            effects_summary,
            risk_verdict,
            explanation,
            raw_simulation: self.include_raw.then_some(raw),
        })
    }
}

fn request_span(operation: &'static str, network: Network) -> tracing::Span {
    info_span!("analysis", request_id = %Uuid::new_v4(), operation, %network)
}

fn prepare(request: &AnalysisRequest) -> Result<Prepared> {
    let transaction_bytes = validate_transaction_input(&request.transaction_bytes)?;
    let network = validate_network(&request.network)?;
    let viewer_address = request
        .viewer_address
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Ok(Prepared {
        transaction_bytes,
        network,
        viewer_address,
    })
}
