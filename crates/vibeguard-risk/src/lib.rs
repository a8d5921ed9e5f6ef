/*! VibeGuard Risk
 *
 * Classificador de risco em cascata (RED > YELLOW > GREEN). Consome apenas o
 * `EffectsSummary` normalizado, nunca o payload bruto do backend.
 */

pub mod classifier;
pub mod config;
pub mod signals;

pub use classifier::*;
pub use config::RiskThresholds;
pub use signals::RiskSignal;
