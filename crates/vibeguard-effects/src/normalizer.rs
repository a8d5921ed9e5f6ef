use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use vibeguard_core::utils::{is_native_coin_type, short_type_name};
use vibeguard_core::{
    AssetKind, BalanceChange, Direction, EffectsSummary, ObjectChangeKind, ObjectEffect,
    RawSimulation,
};

use crate::owner::{classify_owner, OwnerDescriptor};
use crate::raw::{value_as_u64, RawBalanceChange, RawObjectChange};
use crate::transfers::{pair_transfers, SignedDelta};

pub const NOTE_UNPARSEABLE: &str = "Could not parse transaction effects";
pub const NOTE_PARTIALLY_PARSED: &str = "Could not fully parse transaction effects";
pub const NOTE_NO_BALANCE_CHANGES: &str =
    "No balance changes detected - may indicate incomplete simulation data";
pub const NOTE_NO_VIEWER: &str = "User address not provided - risk analysis may be incomplete";

const UNKNOWN_OBJECT: &str = "Unknown object";
const PACKAGE_OBJECT: &str = "Package";

/// Normaliza o resultado bruto do dry-run.
///
/// Função total: nunca falha. Status ausente ou desconhecido assume falha da
/// transação; qualquer trecho ilegível gera uma única nota genérica.
pub fn normalize(raw: &RawSimulation, viewer_address: Option<&str>) -> EffectsSummary {
    let viewer = viewer_address.map(str::trim).filter(|v| !v.is_empty());

    let value = raw.as_value();
    if !value.is_object() {
        let mut summary = EffectsSummary::fail_closed();
        summary.uncertainty_notes.push(NOTE_UNPARSEABLE.to_string());
        return summary;
    }

    let mut degraded = false;

    let will_succeed = value
        .pointer("/effects/status/status")
        .and_then(Value::as_str)
        .map(|status| status == "success")
        .unwrap_or(false);

    let gas_used = match value.pointer("/effects/gasUsed/computationCost") {
        None | Some(Value::Null) => 0,
        Some(cost) => value_as_u64(cost).unwrap_or_else(|| {
            degraded = true;
            0
        }),
    };

    let raw_balance_changes: Vec<RawBalanceChange> =
        read_section(value, "balanceChanges", &mut degraded);
    let raw_object_changes: Vec<RawObjectChange> =
        read_section(value, "objectChanges", &mut degraded);

    let mut deltas = Vec::with_capacity(raw_balance_changes.len());
    for change in &raw_balance_changes {
        let (Some(amount), Some(coin_type)) = (change.signed_amount(), change.coin_type.as_deref())
        else {
            degraded = true;
            continue;
        };
        if amount == 0 {
            continue;
        }
        deltas.push(SignedDelta {
            coin_type: coin_type.to_string(),
            asset_kind: asset_kind(coin_type),
            amount,
            owner: classify_owner(&OwnerDescriptor::parse(change.owner.as_ref()), viewer),
        });
    }

    let balance_changes = deltas
        .iter()
        .map(|delta| BalanceChange {
            direction: if delta.amount > 0 {
                Direction::Increase
            } else {
                Direction::Decrease
            },
            magnitude: delta.amount.unsigned_abs(),
            asset_kind: delta.asset_kind,
            owner: delta.owner,
        })
        .collect();

    let transfers = pair_transfers(&deltas);

    let object_effects = raw_object_changes
        .iter()
        .map(|change| normalize_object_change(change, viewer))
        .collect::<Vec<_>>();

    let mut uncertainty_notes = Vec::new();
    if degraded {
        uncertainty_notes.push(NOTE_PARTIALLY_PARSED.to_string());
    }
    if deltas.is_empty() {
        uncertainty_notes.push(NOTE_NO_BALANCE_CHANGES.to_string());
    }
    if viewer.is_none() {
        uncertainty_notes.push(NOTE_NO_VIEWER.to_string());
    }

    debug!(
        will_succeed,
        gas_used,
        balance_changes = deltas.len(),
        object_effects = object_effects.len(),
        notes = uncertainty_notes.len(),
        "efeitos normalizados"
    );

    EffectsSummary {
        will_succeed,
        gas_used,
        balance_changes,
        transfers,
        object_effects,
        permission_changes: Vec::new(),
        uncertainty_notes,
    }
}

fn asset_kind(coin_type: &str) -> AssetKind {
    if is_native_coin_type(coin_type) {
        AssetKind::NativeAsset
    } else {
        AssetKind::OtherAsset
    }
}

/// Lê uma lista do payload. Itens ilegíveis são descartados e marcam `degraded`.
fn read_section<T: DeserializeOwned>(root: &Value, key: &str, degraded: &mut bool) -> Vec<T> {
    match root.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    *degraded = true;
                    None
                }
            })
            .collect(),
        Some(_) => {
            *degraded = true;
            Vec::new()
        }
    }
}

fn normalize_object_change(change: &RawObjectChange, viewer: Option<&str>) -> ObjectEffect {
    let kind = match change.change_type.as_str() {
        "created" | "published" => ObjectChangeKind::Created,
        "mutated" | "transferred" => ObjectChangeKind::Mutated,
        "deleted" | "wrapped" => ObjectChangeKind::Deleted,
        // tipo desconhecido conta como remoção (sinal amarelo)
        _ => ObjectChangeKind::Deleted,
    };

    let object_kind = match (&change.object_type, change.change_type.as_str()) {
        (Some(path), _) => short_type_name(path).unwrap_or_else(|| UNKNOWN_OBJECT.to_string()),
        (None, "published") => PACKAGE_OBJECT.to_string(),
        (None, _) => UNKNOWN_OBJECT.to_string(),
    };

    let owner_value = change.owner.as_ref().or(change.recipient.as_ref());
    ObjectEffect {
        kind,
        object_kind,
        owner: classify_owner(&OwnerDescriptor::parse(owner_value), viewer),
    }
}
