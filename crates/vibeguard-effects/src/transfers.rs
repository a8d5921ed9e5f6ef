use vibeguard_core::{AssetKind, OwnerClass, Transfer};

/// Variação de saldo com sinal, antes da normalização
#[derive(Debug, Clone)]
pub(crate) struct SignedDelta {
    pub coin_type: String,
    pub asset_kind: AssetKind,
    pub amount: i128,
    pub owner: OwnerClass,
}

/// Pareia reduções com aumentos do mesmo coin type.
///
/// Aproximação gulosa, não um emparelhamento ótimo: os grupos seguem a ordem
/// da primeira aparição do coin type e, dentro de cada grupo, cada redução
/// (em ordem de entrada) consome o primeiro aumento ainda livre com exatamente
/// o mesmo valor. Redução sem par vira transferência para `OtherAddress`.
pub(crate) fn pair_transfers(deltas: &[SignedDelta]) -> Vec<Transfer> {
    let mut groups: Vec<(&str, Vec<&SignedDelta>)> = Vec::new();
    for delta in deltas {
        match groups.iter_mut().find(|(coin, _)| *coin == delta.coin_type) {
            Some((_, members)) => members.push(delta),
            None => groups.push((delta.coin_type.as_str(), vec![delta])),
        }
    }

    let mut transfers = Vec::new();
    for (_, members) in groups {
        let mut increases: Vec<Option<&SignedDelta>> = members
            .iter()
            .filter(|d| d.amount > 0)
            .map(|d| Some(*d))
            .collect();

        for decrease in members.iter().filter(|d| d.amount < 0) {
            let magnitude = decrease.amount.unsigned_abs();
            let to = increases
                .iter_mut()
                .find(|slot| matches!(slot, Some(inc) if inc.amount.unsigned_abs() == magnitude))
                .and_then(Option::take)
                .map(|inc| inc.owner)
                .unwrap_or(OwnerClass::OtherAddress);

            transfers.push(Transfer {
                from: decrease.owner,
                to,
                magnitude,
                asset_kind: decrease.asset_kind,
            });
        }
    }
    transfers
}
