use vibeguard_core::{EffectsSummary, RiskVerdict};

/// Monta o prompt do modelo.
///
/// Só entram nível, sucesso, gas, motivos e contagens. Nenhum endereço,
/// identificador de objeto, tipo de moeda ou byte da transação.
pub fn build_prompt(effects: &EffectsSummary, verdict: &RiskVerdict) -> String {
    format!(
        r#"Explain this blockchain transaction in plain English.

Risk Level: {tier}
Transaction Success: {success}
Gas Used: {gas}
Balance Changes: {balances}
Transfers: {transfers}
Objects Affected: {objects}
Risk Reasons: {reasons}

Do not include addresses, object identifiers, type paths or encoded data.

Return JSON:
{{
  "headline": "Brief summary",
  "plainEnglish": "Simple explanation",
  "bulletPoints": ["Key point"],
  "recommendedAction": "Sign|Be Careful|Do Not Sign",
  "whatToCheck": ["What to verify"]
}}"#,
        tier = verdict.tier,
        success = effects.will_succeed,
        gas = effects.gas_used,
        balances = effects.balance_changes.len(),
        transfers = effects.transfers.len(),
        objects = effects.object_effects.len(),
        reasons = verdict.reasons.join(", "),
    )
}
