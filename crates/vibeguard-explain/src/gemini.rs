use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use vibeguard_core::{EffectsSummary, RiskVerdict};

use crate::errors::{ExplainError, Result};
use crate::prompt::build_prompt;
use crate::traits::Explainer;
use crate::types::{Explanation, RecommendedAction};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Configuração do cliente Gemini
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(20),
        }
    }

    /// Lê `GEMINI_API_KEY` e, opcionalmente, `GEMINI_MODEL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ExplainError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(model) = std::env::var("GEMINI_MODEL").ok().filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }
        Ok(config)
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Formato JSON pedido ao modelo
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelExplanation {
    headline: Option<String>,
    plain_english: Option<String>,
    #[serde(default)]
    bullet_points: Vec<String>,
    recommended_action: Option<String>,
    #[serde(default)]
    what_to_check: Vec<String>,
}

/// Explicador baseado na API `generateContent` do Gemini
pub struct GeminiExplainer {
    client: Client,
    config: GeminiConfig,
}

impl GeminiExplainer {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExplainError::Request(format!("Falha ao criar cliente HTTP: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplainError::Request(format!("HTTP {}", status)));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(ExplainError::InvalidResponse("empty model response".to_string()));
        }
        Ok(text)
    }
}

#[async_trait]
impl Explainer for GeminiExplainer {
    async fn explain(&self, effects: &EffectsSummary, verdict: &RiskVerdict) -> Result<Explanation> {
        let prompt = build_prompt(effects, verdict);
        debug!(model = %self.config.model, "solicitando explicacao");
        let text = self.generate(&prompt).await?;
        parse_model_response(&text)
    }
}

/// Extrai o objeto JSON da resposta do modelo, que pode vir cercado de texto
pub fn parse_model_response(text: &str) -> Result<Explanation> {
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(ExplainError::InvalidResponse("no JSON found in response".to_string()));
    };
    if end < start {
        return Err(ExplainError::InvalidResponse("no JSON found in response".to_string()));
    }

    let parsed: ModelExplanation = serde_json::from_str(&text[start..=end])
        .map_err(|e| ExplainError::InvalidResponse(e.to_string()))?;

    let required = |field: Option<String>, name: &str| {
        field
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ExplainError::InvalidResponse(format!("missing {}", name)))
    };

    let headline = required(parsed.headline, "headline")?;
    let plain_english_summary = required(parsed.plain_english, "plainEnglish")?;
    let recommended_action: RecommendedAction =
        required(parsed.recommended_action, "recommendedAction")?.parse()?;

    Ok(Explanation {
        headline,
        plain_english_summary,
        bullet_points: parsed.bullet_points,
        recommended_action,
        what_to_check: parsed.what_to_check,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_wrapped_in_prose() {
        let text = r#"Here you go:
```json
{"headline":"Safe","plainEnglish":"You move coins between your own wallets.","recommendedAction":"Sign"}
```"#;
        let explanation = parse_model_response(text).unwrap();
        assert_eq!(explanation.headline, "Safe");
        assert_eq!(explanation.recommended_action, RecommendedAction::Sign);
        assert!(explanation.bullet_points.is_empty());
    }

    #[test]
    fn rejects_missing_fields_and_unknown_actions() {
        assert!(parse_model_response("no json here").is_err());
        assert!(parse_model_response(r#"{"headline":"x","recommendedAction":"Sign"}"#).is_err());
        assert!(parse_model_response(
            r#"{"headline":"x","plainEnglish":"y","recommendedAction":"Probably fine"}"#
        )
        .is_err());
    }
}
