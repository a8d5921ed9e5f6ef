/*!
 * VibeGuard SDK
 *
 * Ponto de entrada para carteiras e serviços: valida a requisição e encadeia
 * simulação, normalização, classificação e, opcionalmente, explicação.
 */

pub mod analyzer;
pub mod errors;
pub mod types;

pub use analyzer::Analyzer;
pub use errors::*;
pub use types::*;

pub use vibeguard_core::{EffectsSummary, Network, RiskTier, RiskVerdict};
pub use vibeguard_explain::{Explanation, RecommendedAction};
