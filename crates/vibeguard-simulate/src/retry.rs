use std::time::Duration;

/// Política de tentativas do executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total de tentativas, incluindo a primeira
    pub max_attempts: u32,
    pub base_delay: Duration,
    /// Prazo de cada chamada ao backend
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            attempt_timeout: Duration::from_secs(8),
        }
    }
}

impl RetryPolicy {
    /// Espera após a falha da tentativa `attempt` (1-based): `attempt × base_delay`
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    /// Ainda há tentativas depois de `attempt`?
    pub fn allows_retry_after(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}
