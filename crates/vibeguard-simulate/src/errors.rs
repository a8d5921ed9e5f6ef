use thiserror::Error;
use vibeguard_core::Error as BackendError;

/// Assinaturas de falhas de rede, comparadas em minúsculas
const NETWORK_SIGNATURES: &[&str] = &[
    "network",
    "timeout",
    "timed out",
    "connection",
    "econnreset",
    "enotfound",
    "etimedout",
    "dns",
];

/// Assinaturas de transação malformada, comparadas em minúsculas
const MALFORMED_SIGNATURES: &[&str] = &[
    "invalid transaction",
    "invalid params",
    "deserialize",
    "bcs",
];

/// Erros que podem ocorrer durante a simulação
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Rede sem backend configurado
    #[error("unsupported network: {0}")]
    Configuration(String),

    /// A tentativa excedeu o prazo
    #[error("simulation timeout: {0}")]
    Timeout(String),

    /// Falha no nível da conexão
    #[error("network error: {0}")]
    Network(String),

    /// O backend rejeitou a codificação da transação
    #[error("Invalid transaction format - ensure you copied the complete base64 transaction from your wallet")]
    MalformedInput { detail: String },

    /// Qualquer outro erro terminal do backend
    #[error("simulation failed: {0}")]
    Rejected(String),

    /// Todas as tentativas falharam; `last` é o último erro observado
    #[error("simulation failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<SimulationError>,
    },
}

impl SimulationError {
    /// Somente falhas de rede (incluindo timeout) justificam nova tentativa
    pub fn is_retryable(&self) -> bool {
        matches!(self, SimulationError::Timeout(_) | SimulationError::Network(_))
    }

    /// Identificador estável da categoria, para serialização
    pub fn kind(&self) -> &'static str {
        match self {
            SimulationError::Configuration(_) => "configuration",
            SimulationError::Timeout(_) => "timeout",
            SimulationError::Network(_) => "network",
            SimulationError::MalformedInput { .. } => "malformed_input",
            SimulationError::Rejected(_) => "rejected",
            SimulationError::RetriesExhausted { .. } => "retries_exhausted",
        }
    }

    /// Classifica um erro do backend.
    ///
    /// Variantes de transporte e timeout são sempre de rede. As demais são
    /// decididas pela mensagem, verificando primeiro a assinatura de transação
    /// malformada para não confundir um defeito da entrada com falha transitória.
    pub fn from_backend(err: BackendError) -> Self {
        match err {
            BackendError::TransportError(m) => SimulationError::Network(m),
            BackendError::TimeoutError(m) => SimulationError::Timeout(m),
            BackendError::ConfigError(m) => SimulationError::Configuration(m),
            BackendError::RpcError(m)
            | BackendError::DecodeError(m)
            | BackendError::ValidationError(m)
            | BackendError::Other(m) => classify_message(m),
        }
    }
}

impl From<BackendError> for SimulationError {
    fn from(err: BackendError) -> Self {
        SimulationError::from_backend(err)
    }
}

fn classify_message(message: String) -> SimulationError {
    let lower = message.to_lowercase();
    if MALFORMED_SIGNATURES.iter().any(|s| lower.contains(s)) {
        SimulationError::MalformedInput { detail: message }
    } else if NETWORK_SIGNATURES.iter().any(|s| lower.contains(s)) {
        SimulationError::Network(message)
    } else {
        SimulationError::Rejected(message)
    }
}

/// Resultado padrão da crate
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_timeout_are_retryable() {
        let net = SimulationError::from_backend(BackendError::TransportError("refused".into()));
        assert_eq!(net, SimulationError::Network("refused".into()));
        assert!(net.is_retryable());

        let timeout = SimulationError::from_backend(BackendError::TimeoutError("8s".into()));
        assert!(timeout.is_retryable());
    }

    #[test]
    fn messages_with_network_signatures_are_network_errors() {
        for msg in ["read ECONNRESET", "getaddrinfo ENOTFOUND fullnode", "Connection reset by peer"] {
            let err = SimulationError::from_backend(BackendError::RpcError(msg.into()));
            assert_eq!(err.kind(), "network", "{msg}");
        }
    }

    #[test]
    fn malformed_input_wins_over_network_words() {
        let err = SimulationError::from_backend(BackendError::RpcError(
            "Invalid params: could not deserialize network transaction".into(),
        ));
        assert!(matches!(err, SimulationError::MalformedInput { .. }));
        assert!(!err.is_retryable());
        assert!(err.to_string().starts_with("Invalid transaction format"));
    }

    #[test]
    fn other_messages_are_rejected() {
        let err = SimulationError::from_backend(BackendError::RpcError("InsufficientGas".into()));
        assert_eq!(err, SimulationError::Rejected("InsufficientGas".into()));
        assert!(!err.is_retryable());
    }

    #[test]
    fn exhausted_error_keeps_attempt_context() {
        let err = SimulationError::RetriesExhausted {
            attempts: 3,
            last: Box::new(SimulationError::Network("reset".into())),
        };
        assert_eq!(
            err.to_string(),
            "simulation failed after 3 attempts: network error: reset"
        );
    }
}
