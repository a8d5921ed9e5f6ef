use tracing::debug;
use vibeguard_core::{Direction, EffectsSummary, ObjectChangeKind, OwnerClass, RiskTier, RiskVerdict};

use crate::config::RiskThresholds;
use crate::signals::RiskSignal;

pub const RED_CONFIDENCE: f64 = 0.90;
pub const YELLOW_CONFIDENCE: f64 = 0.80;
pub const GREEN_CONFIDENCE: f64 = 0.95;
/// Redução de confiança por nota de incerteza
pub const UNCERTAINTY_PENALTY: f64 = 0.05;
pub const CONFIDENCE_FLOOR: f64 = 0.70;

/// Classificador de risco: função pura e total do resumo de efeitos
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    thresholds: RiskThresholds,
}

impl RiskClassifier {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Produz o veredito. O primeiro nível com algum sinal vence; dentro do
    /// nível todos os sinais são acumulados na ordem de avaliação.
    pub fn classify(&self, effects: &EffectsSummary) -> RiskVerdict {
        let (tier, signals) = {
            let red = self.red_signals(effects);
            if !red.is_empty() {
                (RiskTier::Red, red)
            } else {
                let yellow = self.yellow_signals(effects);
                if !yellow.is_empty() {
                    (RiskTier::Yellow, yellow)
                } else {
                    (RiskTier::Green, self.green_signals(effects))
                }
            }
        };

        let base = match tier {
            RiskTier::Red => RED_CONFIDENCE,
            RiskTier::Yellow => YELLOW_CONFIDENCE,
            RiskTier::Green => GREEN_CONFIDENCE,
        };
        let confidence = adjust_confidence(base, effects.uncertainty_notes.len());

        debug!(%tier, signals = signals.len(), confidence, "transacao classificada");

        RiskVerdict {
            tier,
            reasons: signals.iter().map(|s| s.message().to_string()).collect(),
            confidence,
        }
    }

    pub fn red_signals(&self, effects: &EffectsSummary) -> Vec<RiskSignal> {
        let mut signals = Vec::new();

        let others_gain = effects
            .balance_changes_of(Direction::Increase, OwnerClass::OtherAddress)
            .next()
            .is_some();
        let material_outflow = effects
            .balance_changes_of(Direction::Decrease, OwnerClass::You)
            .any(|change| change.magnitude > self.thresholds.materiality);
        if others_gain && material_outflow {
            signals.push(RiskSignal::OutflowToOthers);
        }

        if !effects.will_succeed {
            signals.push(RiskSignal::WillFail);
        }
        signals
    }

    pub fn yellow_signals(&self, effects: &EffectsSummary) -> Vec<RiskSignal> {
        let mut signals = Vec::new();
        let objects = &effects.object_effects;

        if objects.len() > self.thresholds.complex_object_count {
            signals.push(RiskSignal::ComplexTransaction);
        }
        if objects.iter().any(|o| o.owner == OwnerClass::Contract) {
            signals.push(RiskSignal::ContractInteraction);
        }
        if effects.gas_used > self.thresholds.high_gas {
            signals.push(RiskSignal::HighGasUsage);
        }
        if objects.iter().any(|o| o.kind == ObjectChangeKind::Deleted) {
            signals.push(RiskSignal::ObjectDeletion);
        }
        if !effects.permission_changes.is_empty() {
            signals.push(RiskSignal::PermissionChanges);
        }
        signals
    }

    pub fn green_signals(&self, effects: &EffectsSummary) -> Vec<RiskSignal> {
        let mut signals = Vec::new();

        let you_lose = effects
            .balance_changes_of(Direction::Decrease, OwnerClass::You)
            .next()
            .is_some();
        let others_gain = effects
            .balance_changes_of(Direction::Increase, OwnerClass::OtherAddress)
            .next()
            .is_some();

        if you_lose && !others_gain {
            signals.push(RiskSignal::SelfTransfer);
        }
        if !others_gain {
            signals.push(RiskSignal::NoOutflowToOthers);
        }
        if effects.permission_changes.is_empty() {
            signals.push(RiskSignal::NoPermissionChanges);
        }
        if effects.object_effects.len() <= self.thresholds.simple_object_count {
            signals.push(RiskSignal::LowComplexity);
        }
        signals
    }
}

/// Aplica a penalidade por nota de incerteza, com piso, e arredonda em duas casas.
/// Nunca altera o nível de risco.
pub fn adjust_confidence(base: f64, uncertainty_notes: usize) -> f64 {
    let mut confidence = base;
    if uncertainty_notes > 0 {
        confidence = (base - uncertainty_notes as f64 * UNCERTAINTY_PENALTY).max(CONFIDENCE_FLOOR);
    }
    (confidence * 100.0).round() / 100.0
}
