//! Groq provider for general chat (OpenAI-compatible chat completions)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{Error, Result};

use super::completion::TokenUsage;
use super::resolve_api_key;
use super::{CompletionProvider, CompletionRequest, CompletionResponse};

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama3-8b-8192";
const DEFAULT_TEMPERATURE: f32 = 0.8;
/// Model and temperature used when the caller brings no system prompt
const DEFAULT_PROMPT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
const DEFAULT_PROMPT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Fallback system prompt when the caller supplies none
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
Kamu adalah AbidinAI, asisten AI yang menulis jawaban dengan format rapi, \
terstruktur, dan mudah dipahami. Jawab hanya berdasarkan informasi yang \
faktual dan akurat. Jika pengguna bertanya siapa pembuatmu, jawab bahwa kamu \
dibuat dan dikembangkan oleh Abidin.";

/// Groq completion provider
pub struct GroqCompletionProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    default_prompt_model: String,
    base_url: String,
}

impl GroqCompletionProvider {
    /// Create a new provider (API key loaded from environment if not provided)
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: resolve_api_key(api_key, || std::env::var("GROQ_API_KEY").ok()),
            model: DEFAULT_MODEL.to_string(),
            default_prompt_model: DEFAULT_PROMPT_MODEL.to_string(),
            base_url: GROQ_API_BASE.to_string(),
        }
    }

    /// Set the model used with caller-supplied system prompts
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the model used with [`DEFAULT_SYSTEM_PROMPT`]
    pub fn with_default_prompt_model(mut self, model: impl Into<String>) -> Self {
        self.default_prompt_model = model.into();
        self
    }

    /// Point the provider at another OpenAI-compatible endpoint
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
            .ok_or_else(|| Error::ProviderNotConfigured("Groq API key not set".to_string()))
    }

    fn build_chat_request(&self, request: CompletionRequest) -> ChatRequest {
        let (system_prompt, model, temperature) = match request.system_prompt {
            Some(prompt) => (prompt, &self.model, DEFAULT_TEMPERATURE),
            None => (
                DEFAULT_SYSTEM_PROMPT.to_string(),
                &self.default_prompt_model,
                DEFAULT_PROMPT_TEMPERATURE,
            ),
        };

        ChatRequest {
            model: model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.text,
                },
            ],
            max_tokens: Some(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)),
            temperature: request.temperature.unwrap_or(temperature),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
    model: Option<String>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
}

/// Turn a chat completions body into a response, surfacing an `error` payload
fn parse_chat_response(body: &str) -> Result<CompletionResponse> {
    let chat_response: ChatResponse = serde_json::from_str(body)?;

    if let Some(api_error) = chat_response.error {
        return Err(Error::Completion(format!(
            "Groq API error: {}",
            api_error
                .message
                .unwrap_or_else(|| "unknown error".to_string())
        )));
    }

    // no choices reads as an empty reply, same as a choice without content
    let text = chat_response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default();

    Ok(CompletionResponse {
        text,
        usage: chat_response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
        model: chat_response.model,
    })
}

#[async_trait]
impl CompletionProvider for GroqCompletionProvider {
    fn name(&self) -> &'static str {
        "Groq"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let api_key = self.api_key()?;
        let chat_request = self.build_chat_request(request);

        debug!("Sending completion request to Groq ({})", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&chat_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Groq API error: {} - {}", status, body);
            return Err(Error::Completion(format!(
                "Groq API error: {} - {}",
                status, body
            )));
        }

        parse_chat_response(&body)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults() {
        let provider = GroqCompletionProvider::new(Some("test-key".to_string()));
        let request = provider.build_chat_request(CompletionRequest::new("halo"));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "meta-llama/llama-4-scout-17b-16e-instruct");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], DEFAULT_SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["content"], "halo");
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_caller_prompt_uses_base_model() {
        let provider = GroqCompletionProvider::new(Some("test-key".to_string()))
            .with_default_prompt_model("llama-3.3-70b-versatile");
        let request = provider.build_chat_request(
            CompletionRequest::new("halo").with_system_prompt("custom persona"),
        );
        assert_eq!(request.model, "llama3-8b-8192");
        assert!((request.temperature - 0.8).abs() < f32::EPSILON);

        let request = provider.build_chat_request(CompletionRequest::new("halo"));
        assert_eq!(request.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_chat_request_overrides() {
        let provider = GroqCompletionProvider::new(Some("test-key".to_string()))
            .with_model("llama-3.1-8b-instant");
        let request = provider.build_chat_request(
            CompletionRequest::new("halo")
                .with_system_prompt("custom")
                .with_max_tokens(64)
                .with_temperature(0.2),
        );

        assert_eq!(request.model, "llama-3.1-8b-instant");
        assert_eq!(request.messages[0].content, "custom");
        assert_eq!(request.max_tokens, Some(64));
        assert!((request.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "model": "llama3-8b-8192",
            "choices": [{"message": {"role": "assistant", "content": "Halo juga!"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
        }"#;
        let response = parse_chat_response(body).unwrap();
        assert_eq!(response.text, "Halo juga!");
        assert_eq!(response.model.as_deref(), Some("llama3-8b-8192"));
        assert_eq!(response.usage.unwrap().total_tokens, 13);
    }

    #[test]
    fn test_parse_error_payload() {
        let body = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#;
        match parse_chat_response(body) {
            Err(Error::Completion(msg)) => assert!(msg.contains("Invalid API Key")),
            other => panic!("expected completion error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_no_choices_is_empty_text() {
        assert_eq!(parse_chat_response(r#"{"choices": []}"#).unwrap().text, "");
        assert_eq!(parse_chat_response("{}").unwrap().text, "");
        assert_eq!(
            parse_chat_response(r#"{"choices": [{"message": {"role": "assistant"}}]}"#)
                .unwrap()
                .text,
            ""
        );
        assert!(matches!(
            parse_chat_response("not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let provider = GroqCompletionProvider::new(Some("k".to_string()))
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(provider.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let provider = GroqCompletionProvider::new(Some("   ".to_string()));
        assert!(!provider.is_configured());

        let provider = GroqCompletionProvider::new(Some(" gsk_test \n".to_string()));
        assert_eq!(provider.api_key().unwrap(), "gsk_test");
    }

    #[tokio::test]
    async fn test_unconfigured_provider_errors() {
        let mut provider = GroqCompletionProvider::new(None);
        provider.api_key = None;
        assert!(!provider.is_configured());
        assert!(matches!(
            provider.complete(CompletionRequest::new("halo")).await,
            Err(Error::ProviderNotConfigured(_))
        ));
    }
}
