//! HTTP gateway for Aksara
//!
//! Relays chat messages to the configured AI providers through the
//! [`ChatDispatcher`] and exposes the transliteration engine directly.
//! Provider keys come from the environment (GROQ_API_KEY, GEMINI_API_KEY).

pub mod config;
pub mod telemetry;

use std::sync::Arc;

use aksara::script::Direction;
use aksara::{
    ChatDispatcher, ChatReply, ChatRequest, CompletionProvider, Error, GeminiCompletionProvider,
    GroqCompletionProvider,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{debug, error};

use crate::config::GatewayConfig;

const EMPTY_MESSAGE_REPLY: &str = "Pesan tidak boleh kosong.";

/// Shared state for all handlers
pub struct AppState {
    dispatcher: ChatDispatcher,
    environment: String,
}

impl AppState {
    pub fn new(dispatcher: ChatDispatcher, environment: impl Into<String>) -> Self {
        Self {
            dispatcher,
            environment: environment.into(),
        }
    }

    /// Wire Groq as the general provider and Gemini as the script assistant
    pub fn from_config(config: &GatewayConfig) -> aksara::Result<Self> {
        let mut groq = GroqCompletionProvider::new(config.groq_api_key.clone());
        if let Some(model) = &config.groq_model {
            groq = groq.with_model(model);
        }

        let mut gemini = GeminiCompletionProvider::new(config.gemini_api_key.clone());
        if let Some(model) = &config.gemini_model {
            gemini = gemini.with_model(model);
        }

        let general: Arc<dyn CompletionProvider> = Arc::new(groq);
        let script_assistant: Arc<dyn CompletionProvider> = Arc::new(gemini);
        let dispatcher = ChatDispatcher::new(general, Some(script_assistant))?;

        Ok(Self::new(dispatcher, config.environment.clone()))
    }

    pub fn dispatcher(&self) -> &ChatDispatcher {
        &self.dispatcher
    }
}

/// Build the API router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/transliterate", post(transliterate))
        .route("/api/topic", post(topic))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Core errors as HTTP responses, in the `{reply}` shape the client renders
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub reply: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reply) = match &self.0 {
            Error::EmptyMessage => (StatusCode::BAD_REQUEST, EMPTY_MESSAGE_REPLY.to_string()),
            other => {
                error!("Chat request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Terjadi kesalahan pada server AbidinAI: {}", other),
                )
            }
        };
        (status, Json(ErrorBody { reply })).into_response()
    }
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let reply = state.dispatcher.reply(request).await?;
    debug!("Chat reply via {:?}", reply.route);
    Ok(Json(reply))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransliterateBody {
    pub text: String,
    /// Detected from the text when omitted
    #[serde(default)]
    pub direction: Option<Direction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransliterateResponse {
    pub result: String,
    pub direction: Direction,
}

async fn transliterate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TransliterateBody>,
) -> Json<TransliterateResponse> {
    let direction = body
        .direction
        .unwrap_or_else(|| Direction::detect(&body.text));
    let result = state
        .dispatcher
        .transliterator()
        .transliterate(&body.text, direction);
    Json(TransliterateResponse { result, direction })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicResponse {
    pub script_topic: bool,
    pub keyword: Option<String>,
}

async fn topic(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TopicBody>,
) -> Json<TopicResponse> {
    let keyword = state
        .dispatcher
        .gate()
        .matched_keyword(&body.message)
        .map(str::to_string);
    Json(TopicResponse {
        script_topic: keyword.is_some(),
        keyword,
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub providers: Vec<String>,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        environment: state.environment.clone(),
        providers: state
            .dispatcher
            .provider_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
