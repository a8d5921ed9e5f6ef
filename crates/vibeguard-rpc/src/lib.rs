/*!
 * VibeGuard RPC
 *
 * Cliente JSON-RPC para dry-run de transações em fullnodes Sui
 */

use vibeguard_core::{Error, error::Result, traits::SimulationBackend, Network, RawSimulation};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Método JSON-RPC de simulação especulativa
pub const DRY_RUN_METHOD: &str = "sui_dryRunTransactionBlock";

/// Configuração do cliente RPC
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub endpoint: String,
    /// Limite do cliente HTTP; o executor aplica o seu próprio prazo por tentativa
    pub timeout: Duration,
    pub connection_pool_size: usize,
    pub user_agent: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(Network::Mainnet),
            timeout: Duration::from_secs(30),
            connection_pool_size: 32,
            user_agent: concat!("vibeguard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Endpoint público padrão de cada rede
pub fn default_endpoint(network: Network) -> String {
    format!("https://fullnode.{}.sui.io:443", network.as_str())
}

/// Variável de ambiente que sobrescreve o endpoint da rede
pub fn endpoint_env_var(network: Network) -> String {
    format!("SUI_RPC_{}", network.as_str().to_ascii_uppercase())
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Vec<serde_json::Value>,
    id: u64,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    #[serde(default)]
    code: i64,
    message: String,
}

/// Cliente JSON-RPC para um fullnode Sui
pub struct SuiRpcClient {
    client: Client,
    config: RpcConfig,
    next_id: AtomicU64,
}

impl SuiRpcClient {
    /// Cria um novo cliente. Nenhuma conexão é aberta aqui.
    pub fn new(config: RpcConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.connection_pool_size)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::ConfigError(format!("Falha ao criar cliente HTTP: {}", e)))?;

        Ok(Self {
            client,
            config,
            next_id: AtomicU64::new(1),
        })
    }

    /// Executa `sui_dryRunTransactionBlock`. A resposta já inclui efeitos,
    /// variações de saldo e alterações de objetos.
    pub async fn dry_run_transaction_block(&self, transaction_bytes: &str) -> Result<serde_json::Value> {
        self.request(
            DRY_RUN_METHOD,
            vec![serde_json::Value::String(transaction_bytes.to_string())],
        )
        .await
    }

    async fn request(&self, method: &str, params: Vec<serde_json::Value>) -> Result<serde_json::Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };

        debug!(method, id, "enviando requisição RPC");
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::TransportError(format!(
                "node indisponível (network status {})",
                status
            )));
        }
        if !status.is_success() {
            return Err(Error::RpcError(format!("HTTP {}", status)));
        }

        let parsed: RpcResponse = response
            .json()
            .await
            .map_err(|e| Error::DecodeError(format!("Resposta RPC inválida: {}", e)))?;

        if let Some(err) = parsed.error {
            debug!(method, id, code = err.code, "node retornou erro");
            return Err(Error::RpcError(err.message));
        }

        parsed
            .result
            .ok_or_else(|| Error::DecodeError("Resposta RPC sem campo result".to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::TimeoutError(format!("timeout na chamada RPC: {}", e))
    } else if e.is_decode() {
        Error::DecodeError(e.to_string())
    } else {
        Error::TransportError(format!("connection failure: {}", e))
    }
}

#[async_trait]
impl SimulationBackend for SuiRpcClient {
    async fn dry_run(&self, transaction_bytes: &str) -> Result<RawSimulation> {
        self.dry_run_transaction_block(transaction_bytes)
            .await
            .map(RawSimulation::new)
    }

    fn name(&self) -> &str {
        &self.config.endpoint
    }
}

/// Configuração dos backends de todas as redes
#[derive(Debug, Clone)]
pub struct NetworkBackendsConfig {
    pub endpoints: HashMap<Network, String>,
    /// Parâmetros comuns (o `endpoint` é ignorado)
    pub base: RpcConfig,
}

impl Default for NetworkBackendsConfig {
    fn default() -> Self {
        Self {
            endpoints: Network::ALL
                .iter()
                .map(|n| (*n, default_endpoint(*n)))
                .collect(),
            base: RpcConfig::default(),
        }
    }
}

impl NetworkBackendsConfig {
    /// Lê `SUI_RPC_MAINNET`, `SUI_RPC_TESTNET` e `SUI_RPC_DEVNET`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        for network in Network::ALL {
            if let Ok(endpoint) = std::env::var(endpoint_env_var(network)) {
                if !endpoint.trim().is_empty() {
                    config.endpoints.insert(network, endpoint);
                }
            }
        }
        config
    }
}

/// Conjunto de backends por rede, montado uma vez na inicialização
#[derive(Clone, Default)]
pub struct NetworkBackends {
    backends: HashMap<Network, Arc<dyn SimulationBackend>>,
}

impl NetworkBackends {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um cliente RPC para cada rede configurada
    pub fn from_config(config: &NetworkBackendsConfig) -> Result<Self> {
        let mut backends = Self::new();
        for (network, endpoint) in &config.endpoints {
            let client = SuiRpcClient::new(RpcConfig {
                endpoint: endpoint.clone(),
                ..config.base.clone()
            })?;
            backends = backends.with_backend(*network, Arc::new(client));
        }
        Ok(backends)
    }

    pub fn with_backend(mut self, network: Network, backend: Arc<dyn SimulationBackend>) -> Self {
        self.backends.insert(network, backend);
        self
    }

    pub fn get(&self, network: Network) -> Option<Arc<dyn SimulationBackend>> {
        self.backends.get(&network).cloned()
    }

    pub fn networks(&self) -> Vec<Network> {
        let mut networks: Vec<Network> = self.backends.keys().copied().collect();
        networks.sort_by_key(|n| n.as_str());
        networks
    }
}
