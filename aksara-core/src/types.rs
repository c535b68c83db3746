//! Request and reply types shared with the HTTP layer

use serde::{Deserialize, Serialize};

/// Incoming chat message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Caller-supplied system prompt; ignored when too short to be a real prompt
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

/// Which path produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Javanese script assistant
    ScriptAssistant,
    /// General text completion (also the fallback)
    General,
}

/// Reply relayed to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub route: Route,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>, route: Route) -> Self {
        Self {
            reply: reply.into(),
            route,
        }
    }
}
