/*!
 * VibeGuard Utils
 *
 * Utilitários comuns usados em toda a workspace VibeGuard
 */

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{Error, Result};
use crate::types::Network;

/// Endereço do pacote de framework que define o token nativo
const NATIVE_PACKAGE: &str = "2";
const NATIVE_MODULE: &str = "sui";
const NATIVE_NAME: &str = "SUI";

// Carteiras nem sempre mantêm o padding `=`
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Valida os bytes da transação e devolve a entrada sem espaços nas bordas
pub fn validate_transaction_input(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::ValidationError(
            "Transaction input cannot be empty".to_string(),
        ));
    }

    if !is_base64_alphabet(trimmed) {
        return Err(Error::ValidationError(
            "Transaction must be base64-encoded bytes from a Sui wallet".to_string(),
        ));
    }

    match LENIENT_BASE64.decode(trimmed) {
        Ok(bytes) if !bytes.is_empty() => Ok(trimmed.to_string()),
        _ => Err(Error::ValidationError("Invalid base64 encoding".to_string())),
    }
}

/// Valida o nome da rede (sem diferenciar maiúsculas)
pub fn validate_network(network: &str) -> Result<Network> {
    if network.trim().is_empty() {
        return Err(Error::ValidationError(
            "Network selection is required".to_string(),
        ));
    }
    network.parse::<Network>().map_err(|_| {
        Error::ValidationError("Network must be mainnet, testnet, or devnet".to_string())
    })
}

/// Equivalente a `^[A-Za-z0-9+/]*={0,2}$`
fn is_base64_alphabet(s: &str) -> bool {
    let body = s.trim_end_matches('=');
    if s.len() - body.len() > 2 {
        return false;
    }
    body.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

/// Verifica se o coin type é o token nativo (`0x2::sui::SUI`, em forma curta ou longa)
pub fn is_native_coin_type(coin_type: &str) -> bool {
    let mut parts = coin_type.trim().split("::");
    let (Some(address), Some(module), Some(name), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let address = address.strip_prefix("0x").unwrap_or(address);
    let address = address.trim_start_matches('0');
    address == NATIVE_PACKAGE && module == NATIVE_MODULE && name == NATIVE_NAME
}

/// Reduz um tipo estruturado ao seu último segmento, sem parâmetros genéricos.
///
/// `0x2::coin::Coin<0x2::sui::SUI>` vira `Coin`.
pub fn short_type_name(type_path: &str) -> Option<String> {
    let base = type_path.split('<').next().unwrap_or(type_path);
    base.rsplit("::")
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
