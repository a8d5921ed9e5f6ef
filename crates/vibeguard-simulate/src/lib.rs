/*! vibeguard-simulate
 *
 * Crate para execução de simulações especulativas (dry-run) de transações Sui.
 * Nenhuma transação é efetivada; o único efeito colateral é a chamada ao backend.
 */

pub mod errors;
pub mod executor;
mod logger;
pub mod retry;
pub mod traits;

pub use errors::*;
pub use executor::*;
pub use retry::*;
pub use traits::*;
