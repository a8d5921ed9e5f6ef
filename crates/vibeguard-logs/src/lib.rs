use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Tipo de erro retornado pelo logger.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("erro ao enviar log: {0}")]
    Request(#[from] reqwest::Error),
}

/// Nível do log enviado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Estrutura de log enviada para o coletor.
#[derive(Serialize)]
struct LogEntry<'a> {
    level: LogLevel,
    message: &'a str,
    crate_name: &'a str,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "no_fields")]
    fields: &'a Map<String, Value>,
}

fn no_fields(fields: &&Map<String, Value>) -> bool {
    fields.is_empty()
}

/// Cliente simples para envio de logs estruturados a um coletor HTTP
/// (ex.: endpoint `_doc` do Elasticsearch).
#[derive(Clone)]
pub struct LogShipper {
    endpoint: String,
    crate_name: String,
    client: Client,
}

impl LogShipper {
    /// Cria uma nova instância apontando para a `endpoint` do coletor.
    pub fn new(endpoint: impl Into<String>, crate_name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            crate_name: crate_name.into(),
            client: Client::new(),
        }
    }

    /// Lê o endpoint da variável de ambiente `var`. Sem a variável o envio fica desligado.
    pub fn from_env(var: &str, crate_name: impl Into<String>) -> Option<Self> {
        std::env::var(var)
            .ok()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .map(|endpoint| Self::new(endpoint, crate_name))
    }

    /// Envia um log para o coletor.
    pub async fn log(
        &self,
        level: LogLevel,
        message: &str,
        fields: &Map<String, Value>,
    ) -> Result<(), LogError> {
        let entry = LogEntry {
            level,
            message,
            crate_name: &self.crate_name,
            timestamp: Utc::now(),
            fields,
        };
        self.client
            .post(&self.endpoint)
            .json(&entry)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Envia o log em segundo plano, ignorando falhas.
    ///
    /// Fora de um runtime tokio o log é descartado.
    #[cfg(feature = "tokio")]
    pub fn ship_detached(&self, level: LogLevel, message: String, fields: Map<String, Value>) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let shipper = self.clone();
        handle.spawn(async move {
            let _ = shipper.log(level, &message, &fields).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn send_log_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(json!({
                "level": "warn",
                "message": "tentativa falhou",
                "crate_name": "vibeguard-simulate",
                "fields": { "attempt": 1 }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let logger = LogShipper::new(server.uri(), "vibeguard-simulate");
        let mut fields = Map::new();
        fields.insert("attempt".into(), json!(1));
        let result = logger.log(LogLevel::Warn, "tentativa falhou", &fields).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn send_log_reports_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let logger = LogShipper::new(server.uri(), "crate");
        let result = logger.log(LogLevel::Error, "falha", &Map::new()).await;
        assert!(matches!(result, Err(LogError::Request(_))));
    }

    #[test]
    fn from_env_without_variable_is_disabled() {
        assert!(LogShipper::from_env("VIBEGUARD_LOGS_TEST_UNSET_VAR", "crate").is_none());
    }
}
