/*!
 * VibeGuard Core
 * 
 * Tipos e utilitários compartilhados para a workspace VibeGuard
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;

// Re-exportações públicas
pub use error::Error;
pub use types::*;
