use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::{error, warn};
use vibeguard_core::Network;
use vibeguard_logs::{LogLevel, LogShipper};

use crate::errors::SimulationError;

/// Coletor remoto opcional; sem `VIBEGUARD_LOGS_ENDPOINT` só há saída via `tracing`.
static SHIPPER: Lazy<Option<LogShipper>> =
    Lazy::new(|| LogShipper::from_env("VIBEGUARD_LOGS_ENDPOINT", "vibeguard-simulate"));

fn ship(level: LogLevel, message: &str, fields: Map<String, Value>) {
    if let Some(shipper) = SHIPPER.as_ref() {
        shipper.ship_detached(level, message.to_string(), fields);
    }
}

fn failure_fields(network: Network, attempt: u32, err: &SimulationError) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("network".into(), json!(network.as_str()));
    fields.insert("attempt".into(), json!(attempt));
    fields.insert("error_kind".into(), json!(err.kind()));
    fields
}

pub(crate) fn log_retry(network: Network, attempt: u32, delay: Duration, err: &SimulationError) {
    warn!(
        %network,
        attempt,
        delay_ms = delay.as_millis() as u64,
        error = %err,
        "tentativa de simulacao falhou, repetindo"
    );
    let mut fields = failure_fields(network, attempt, err);
    fields.insert("delay_ms".into(), json!(delay.as_millis() as u64));
    ship(LogLevel::Warn, "tentativa de simulacao falhou, repetindo", fields);
}

pub(crate) fn log_failure(network: Network, attempt: u32, err: &SimulationError) {
    error!(%network, attempt, error = %err, "simulacao falhou");
    ship(LogLevel::Error, "simulacao falhou", failure_fields(network, attempt, err));
}
