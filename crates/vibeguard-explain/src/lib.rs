/*! VibeGuard Explain
 *
 * Camada opcional que transforma o veredito em texto para leigos. Recebe
 * apenas dados desidentificados e nunca altera o nível de risco.
 */

pub mod errors;
pub mod fallback;
pub mod gemini;
pub mod guard;
pub mod prompt;
pub mod traits;
pub mod types;

pub use errors::*;
pub use fallback::fallback_explanation;
pub use gemini::{GeminiConfig, GeminiExplainer};
pub use guard::{contains_technical_data, GuardedExplainer};
pub use prompt::build_prompt;
pub use traits::Explainer;
pub use types::*;
