//! Gemini provider for the Javanese script assistant (native generateContent API)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{Error, Result};

use super::completion::TokenUsage;
use super::resolve_api_key;
use super::{CompletionProvider, CompletionRequest, CompletionResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Gemini completion provider
pub struct GeminiCompletionProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiCompletionProvider {
    /// Create a new provider (API key loaded from environment if not provided)
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: resolve_api_key(api_key, || std::env::var("GEMINI_API_KEY").ok()),
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the provider at another generateContent endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::ProviderNotConfigured("Gemini API key not set".to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
}

fn build_generate_request(request: CompletionRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: request.system_prompt.map(|prompt| GeminiContent {
            role: None,
            parts: vec![GeminiPart { text: prompt }],
        }),
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart { text: request.text }],
        }],
        generation_config: GenerationConfig {
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_output_tokens: request.max_tokens,
        },
    }
}

/// Concatenate the text parts of the first candidate; no candidate is an
/// empty reply
fn parse_generate_response(body: &str) -> Result<CompletionResponse> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    if let Some(api_error) = response.error {
        return Err(Error::Completion(format!(
            "Gemini API error: {}",
            api_error
                .message
                .unwrap_or_else(|| "unknown error".to_string())
        )));
    }

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(CompletionResponse {
        text,
        usage: response.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        }),
        model: response.model_version,
    })
}

#[async_trait]
impl CompletionProvider for GeminiCompletionProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let api_key = self.api_key()?;
        let generate_request = build_generate_request(request);

        debug!("Sending completion request to Gemini ({})", self.model);

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&generate_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Gemini API error: {} - {}", status, body);
            return Err(Error::Completion(format!(
                "Gemini API error: {} - {}",
                status, body
            )));
        }

        parse_generate_response(&body)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
