use thiserror::Error;
use vibeguard_core::Error as CoreError;
use vibeguard_simulate::SimulationError;

/// Falhas que impedem a análise. Nunca são convertidas em veredito.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Entrada rejeitada antes de qualquer chamada ao backend
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl AnalysisError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput(_) => "invalid_input",
            AnalysisError::Simulation(err) => err.kind(),
        }
    }
}

impl From<CoreError> for AnalysisError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(message) => AnalysisError::InvalidInput(message),
            other => AnalysisError::Simulation(SimulationError::from(other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
