//! Modelo permissivo das seções do dry-run que a normalização lê.

use serde::Deserialize;
use serde_json::Value;

/// Variação de saldo como reportada pelo fullnode
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBalanceChange {
    #[serde(default)]
    pub owner: Option<Value>,
    #[serde(default)]
    pub coin_type: Option<String>,
    /// String com sinal (`"-100000"`), eventualmente número
    #[serde(default)]
    pub amount: Value,
}

impl RawBalanceChange {
    /// Delta com sinal, se legível
    pub fn signed_amount(&self) -> Option<i128> {
        match &self.amount {
            Value::String(s) => s.trim().parse::<i128>().ok(),
            Value::Number(n) => n.as_i64().map(i128::from),
            _ => None,
        }
    }
}

/// Alteração de objeto como reportada pelo fullnode
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObjectChange {
    #[serde(rename = "type")]
    pub change_type: String,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub owner: Option<Value>,
    /// Presente em alterações do tipo `transferred`
    #[serde(default)]
    pub recipient: Option<Value>,
}

/// Lê `u64` de uma string decimal ou de um número
pub(crate) fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.trim().parse::<u64>().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}
