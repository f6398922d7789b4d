//! Gemini API client implementation
//!
//! Implements the LlmClient trait against the `generateContent` endpoint.
//! Transient failures are retried with exponential backoff.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{LlmClient, LlmError, ModelInput};
use crate::config::LlmConfig;

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Whether a failed attempt should be followed by another one.
/// Rate limits are surfaced immediately so the caller sees the retry-after hint.
fn should_retry(error: &LlmError, attempt: u32) -> bool {
    attempt < MAX_RETRIES && error.is_retryable() && !error.is_rate_limit()
}

/// Gemini API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
    temperature: f32,
}

impl GeminiClient {
    /// Create a new client from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let api_key = config.get_api_key().map_err(|e| LlmError::Config(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Build the request body for the Gemini API
    fn build_request_body(&self, input: &ModelInput) -> serde_json::Value {
        debug!(%self.model, entries = input.contents.len(), "build_request_body: called");
        let contents: Vec<serde_json::Value> = input
            .contents
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "role": entry.role,
                    "parts": entry.parts.iter().map(|p| serde_json::json!({ "text": p })).collect::<Vec<_>>(),
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.max_tokens,
                "temperature": self.temperature,
            },
        })
    }

    /// Pull the reply text out of the first candidate
    fn parse_response(api_response: GeminiResponse) -> Result<String, LlmError> {
        debug!(candidates = api_response.candidates.len(), "parse_response: called");
        let candidate = api_response.candidates.into_iter().next().ok_or_else(|| {
            let reason = api_response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            LlmError::InvalidResponse(reason)
        })?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
            debug!(%reason, "parse_response: empty candidate");
            return Err(LlmError::InvalidResponse(format!("empty reply (finish reason {})", reason)));
        }

        Ok(text)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, input: ModelInput) -> Result<String, LlmError> {
        debug!(%self.model, "generate: called");
        let url = self.endpoint();
        let body = self.build_request_body(&input);

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!(attempt, backoff_ms = backoff, "generate: retrying after transient error");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self
                .http
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    debug!(attempt, error = %e, "generate: network error");
                    let err = LlmError::Network(e);
                    if !should_retry(&err, attempt) {
                        return Err(err);
                    }
                    last_error = Some(err);
                    continue;
                }
            };

            let status = response.status().as_u16();

            if !response.status().is_success() {
                let err = if status == 429 {
                    debug!("generate: rate limited (429)");
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    LlmError::RateLimited {
                        retry_after: Duration::from_secs(retry_after),
                    }
                } else {
                    debug!(%status, "generate: API error");
                    let text = response.text().await.unwrap_or_default();
                    LlmError::ApiError { status, message: text }
                };

                if !should_retry(&err, attempt) {
                    return Err(err);
                }
                last_error = Some(err);
                continue;
            }

            debug!("generate: success");
            let api_response: GeminiResponse = response.json().await?;
            return Self::parse_response(api_response);
        }

        Err(last_error.unwrap_or_else(|| LlmError::InvalidResponse("Max retries exceeded".to_string())))
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}
