use thiserror::Error;

/// Erros comuns da biblioteca VibeGuard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// O backend respondeu com um objeto de erro
    #[error("Erro de RPC: {0}")]
    RpcError(String),

    /// Falha no nível da conexão (recusada, resetada, DNS)
    #[error("Erro de transporte: {0}")]
    TransportError(String),

    /// Erro de decodificação de dados
    #[error("Erro de decodificação: {0}")]
    DecodeError(String),

    /// Erro de validação
    #[error("Erro de validação: {0}")]
    ValidationError(String),

    /// Erro de configuração
    #[error("Erro de configuração: {0}")]
    ConfigError(String),

    /// Erro de timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Mensagem interna, sem o prefixo da variante
    pub fn message(&self) -> &str {
        match self {
            Error::RpcError(m)
            | Error::TransportError(m)
            | Error::DecodeError(m)
            | Error::ValidationError(m)
            | Error::ConfigError(m)
            | Error::TimeoutError(m)
            | Error::Other(m) => m,
        }
    }
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
