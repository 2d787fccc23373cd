use async_trait::async_trait;
use reqwest::StatusCode;

use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use super::{ContentGenerator, ServiceError};
use crate::config::Config;

/// HTTP client for Gemini's `generateContent`
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint_for(&config.api_base, &config.model),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ServiceError> {
        tracing::info!(endpoint = %self.endpoint, "📤 Sending request to Gemini");

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%status, "Gemini returned an error status");
            return Err(error_from_body(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ServiceError(format!("Invalid response from Gemini: {}", e)))
    }
}

/// `{base}/models/{model}:generateContent`, tolerating a `models/` prefix on the model name
fn endpoint_for(api_base: &str, model: &str) -> String {
    let model = model.trim();
    let model_path = if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    };
    format!("{}/{}:generateContent", api_base, model_path)
}

/// Prefer the service's own error message; fall back to status + raw body
fn error_from_body(status: StatusCode, body: &str) -> ServiceError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => match envelope.error.status {
            Some(code) => ServiceError(format!("{} ({})", envelope.error.message, code)),
            None => ServiceError(envelope.error.message),
        },
        _ => ServiceError(format!("API error {}: {}", status, body.trim())),
    }
}
