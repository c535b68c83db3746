//! Provider abstraction layer for chat completions
//!
//! Groq serves general chat; Gemini serves the Javanese script assistant.
mod completion;
mod gemini;
mod groq;

pub use completion::{CompletionProvider, CompletionRequest, CompletionResponse, TokenUsage};
pub use gemini::GeminiCompletionProvider;
pub use groq::GroqCompletionProvider;

/// Explicit key, else the environment; blank keys count as missing
fn resolve_api_key(
    explicit: Option<String>,
    from_env: impl FnOnce() -> Option<String>,
) -> Option<String> {
    explicit
        .or_else(from_env)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}
