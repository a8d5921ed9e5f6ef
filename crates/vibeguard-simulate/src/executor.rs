use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};
use vibeguard_core::{Network, RawSimulation};
use vibeguard_rpc::NetworkBackends;

use crate::{
    errors::{Result, SimulationError},
    logger::{log_failure, log_retry},
    retry::RetryPolicy,
    traits::{Sleeper, TokioSleeper},
};

/// Executor de simulações especulativas.
///
/// Cada chamada de `execute` é independente. Cancelar a future (drop) interrompe
/// a chamada em andamento e qualquer espera entre tentativas.
pub struct SimulationExecutor {
    backends: NetworkBackends,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl SimulationExecutor {
    pub fn new(backends: NetworkBackends) -> Self {
        Self {
            backends,
            policy: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Simula a transação (base64) na rede indicada.
    ///
    /// Rede sem backend falha de imediato. Falhas de rede são repetidas até
    /// `max_attempts`; as demais retornam na primeira ocorrência.
    pub async fn execute(
        &self,
        transaction_bytes: &str,
        network: Network,
        viewer_address: Option<&str>,
    ) -> Result<RawSimulation> {
        let span = info_span!(
            "simulate",
            %network,
            viewer_supplied = viewer_address.is_some()
        );
        self.execute_inner(transaction_bytes, network).instrument(span).await
    }

    async fn execute_inner(&self, transaction_bytes: &str, network: Network) -> Result<RawSimulation> {
        let backend = self.backends.get(network).ok_or_else(|| {
            SimulationError::Configuration(format!("no backend configured for {}", network))
        })?;

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            debug!(attempt, backend = backend.name(), "executando dry-run");

            let outcome =
                tokio::time::timeout(self.policy.attempt_timeout, backend.dry_run(transaction_bytes))
                    .await;

            let failure = match outcome {
                Ok(Ok(raw)) => {
                    info!(attempt, "dry-run concluido");
                    return Ok(raw);
                }
                Ok(Err(e)) => SimulationError::from_backend(e),
                Err(_) => SimulationError::Timeout(format!(
                    "simulation exceeded {} seconds",
                    self.policy.attempt_timeout.as_secs_f64()
                )),
            };

            if !failure.is_retryable() {
                log_failure(network, attempt, &failure);
                return Err(failure);
            }

            if !self.policy.allows_retry_after(attempt) {
                log_failure(network, attempt, &failure);
                return Err(SimulationError::RetriesExhausted {
                    attempts: attempt,
                    last: Box::new(failure),
                });
            }

            let delay = self.policy.backoff(attempt);
            log_retry(network, attempt, delay, &failure);
            self.sleeper.sleep(delay).await;
        }
    }
}
