/*!
 * VibeGuard Types
 *
 * Tipos comuns usados em toda a workspace VibeGuard
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rede Sui suportada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    /// Todas as redes conhecidas, na ordem de configuração
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Devnet];

    /// Representação em string da rede
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(format!("Rede desconhecida: {}", other)),
        }
    }
}

/// Resultado bruto do backend, sem qualquer tipagem.
///
/// Só o normalizador e a exibição de depuração podem ler este payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSimulation(pub serde_json::Value);

impl RawSimulation {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Payload vazio (`null`)
    pub fn empty() -> Self {
        Self(serde_json::Value::Null)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Classe do dono de um objeto ou saldo, relativa ao endereço de quem analisa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerClass {
    /// O próprio endereço do usuário
    You,
    /// Qualquer outro endereço concreto
    OtherAddress,
    /// Objeto-dono, compartilhado ou imutável
    Contract,
}

impl fmt::Display for OwnerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerClass::You => write!(f, "you"),
            OwnerClass::OtherAddress => write!(f, "another address"),
            OwnerClass::Contract => write!(f, "a contract"),
        }
    }
}

/// Sentido de uma variação de saldo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increase,
    Decrease,
}

/// Classificação do token envolvido
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Token nativo da rede (SUI)
    NativeAsset,
    OtherAsset,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::NativeAsset => write!(f, "SUI"),
            AssetKind::OtherAsset => write!(f, "Token"),
        }
    }
}

/// Variação de saldo normalizada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub direction: Direction,
    /// Valor absoluto, na menor unidade on-chain
    pub magnitude: u128,
    pub asset_kind: AssetKind,
    pub owner: OwnerClass,
}

/// Transferência inferida a partir das variações de saldo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: OwnerClass,
    pub to: OwnerClass,
    pub magnitude: u128,
    pub asset_kind: AssetKind,
}

/// Tipo de alteração de objeto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectChangeKind {
    Created,
    Mutated,
    Deleted,
}

/// Efeito sobre um objeto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEffect {
    pub kind: ObjectChangeKind,
    /// Último segmento do tipo do objeto (ex.: `Coin`)
    pub object_kind: String,
    pub owner: OwnerClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionChangeKind {
    Granted,
    Revoked,
}

/// Alteração de permissão. O backend atual nunca preenche este campo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionChange {
    pub kind: PermissionChangeKind,
    pub permission: String,
    pub target: OwnerClass,
}

/// Resumo normalizado dos efeitos de uma simulação.
///
/// Único artefato entregue ao classificador de risco. Não guarda nenhuma
/// referência ao payload bruto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectsSummary {
    pub will_succeed: bool,
    pub gas_used: u64,
    pub balance_changes: Vec<BalanceChange>,
    pub transfers: Vec<Transfer>,
    pub object_effects: Vec<ObjectEffect>,
    pub permission_changes: Vec<PermissionChange>,
    pub uncertainty_notes: Vec<String>,
}

impl EffectsSummary {
    /// Resumo vazio, com falha assumida
    pub fn fail_closed() -> Self {
        Self {
            will_succeed: false,
            gas_used: 0,
            balance_changes: Vec::new(),
            transfers: Vec::new(),
            object_effects: Vec::new(),
            permission_changes: Vec::new(),
            uncertainty_notes: Vec::new(),
        }
    }

    /// Variações de saldo com o sentido e o dono indicados
    pub fn balance_changes_of(
        &self,
        direction: Direction,
        owner: OwnerClass,
    ) -> impl Iterator<Item = &BalanceChange> {
        self.balance_changes
            .iter()
            .filter(move |c| c.direction == direction && c.owner == owner)
    }
}

/// Nível de risco. A ordem é Green < Yellow < Red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Green => write!(f, "GREEN"),
            RiskTier::Yellow => write!(f, "YELLOW"),
            RiskTier::Red => write!(f, "RED"),
        }
    }
}

/// Veredito de risco
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub tier: RiskTier,
    /// Motivos na ordem de avaliação (ordem de prioridade)
    pub reasons: Vec<String>,
    /// Confiança em [0, 1], arredondada em duas casas
    pub confidence: f64,
}
