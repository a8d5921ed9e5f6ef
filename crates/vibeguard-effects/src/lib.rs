/*! VibeGuard Effects
 *
 * Converte o payload de dry-run, específico do backend e sem tipagem forte,
 * em um `EffectsSummary` estável. A normalização nunca falha: dados ausentes
 * ou ilegíveis viram notas de incerteza.
 */

pub mod normalizer;
pub mod owner;
pub mod raw;
mod transfers;

pub use normalizer::*;
pub use owner::{classify_owner, OwnerDescriptor};
