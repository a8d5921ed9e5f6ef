use serde::{Deserialize, Serialize};
use std::fmt;
use vibeguard_core::RiskTier;

/// Sinal avaliado pelo classificador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSignal {
    OutflowToOthers,
    WillFail,
    ComplexTransaction,
    ContractInteraction,
    HighGasUsage,
    ObjectDeletion,
    PermissionChanges,
    SelfTransfer,
    NoOutflowToOthers,
    NoPermissionChanges,
    LowComplexity,
}

impl RiskSignal {
    pub fn tier(&self) -> RiskTier {
        match self {
            RiskSignal::OutflowToOthers | RiskSignal::WillFail => RiskTier::Red,
            RiskSignal::ComplexTransaction
            | RiskSignal::ContractInteraction
            | RiskSignal::HighGasUsage
            | RiskSignal::ObjectDeletion
            | RiskSignal::PermissionChanges => RiskTier::Yellow,
            RiskSignal::SelfTransfer
            | RiskSignal::NoOutflowToOthers
            | RiskSignal::NoPermissionChanges
            | RiskSignal::LowComplexity => RiskTier::Green,
        }
    }

    /// Texto exibido ao usuário
    pub fn message(&self) -> &'static str {
        match self {
            RiskSignal::OutflowToOthers => "Assets leave your wallet to another address",
            RiskSignal::WillFail => "Transaction will fail if executed",
            RiskSignal::ComplexTransaction => "Complex transaction affecting multiple objects",
            RiskSignal::ContractInteraction => "Interacting with contracts or shared objects",
            RiskSignal::HighGasUsage => "High gas usage transaction",
            RiskSignal::ObjectDeletion => "Transaction will delete objects",
            RiskSignal::PermissionChanges => "Transaction involves permission changes",
            RiskSignal::SelfTransfer => "Self-transfer detected - assets remain in your control",
            RiskSignal::NoOutflowToOthers => "No assets leaving your wallet to other addresses",
            RiskSignal::NoPermissionChanges => "No permission changes",
            RiskSignal::LowComplexity => "Simple transaction with minimal state changes",
        }
    }
}

impl fmt::Display for RiskSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
