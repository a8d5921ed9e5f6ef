use serde::{Deserialize, Serialize};

/// Limiares usados pelo classificador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Redução mínima (em MIST) para contar como saída real, acima de custo de gas
    pub materiality: u128,
    /// Acima deste número de objetos a transação é complexa
    pub complex_object_count: usize,
    /// Gas considerado alto
    pub high_gas: u64,
    /// Até este número de objetos a transação é simples
    pub simple_object_count: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            materiality: 10_000,
            complex_object_count: 3,
            high_gas: 10_000_000,
            simple_object_count: 2,
        }
    }
}
