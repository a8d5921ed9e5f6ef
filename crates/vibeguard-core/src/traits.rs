/*!
 * VibeGuard Traits
 * 
 * Traits comuns usados em toda a workspace VibeGuard
 */

use async_trait::async_trait;
use crate::error::Result;
use crate::types::RawSimulation;

/// Backend de simulação de uma rede
#[async_trait]
pub trait SimulationBackend: Send + Sync {
    /// Executa um dry-run da transação (bytes em base64) sem efetivar nada
    async fn dry_run(&self, transaction_bytes: &str) -> Result<RawSimulation>;

    /// Nome do backend, usado apenas em logs
    fn name(&self) -> &str {
        "backend"
    }
}
