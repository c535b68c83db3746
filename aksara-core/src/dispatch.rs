//! Chat dispatch: topic gate in front of two completion providers
//!
//! Script-topic messages go to the script assistant when one is configured.
//! Anything else, and any script assistant failure, goes to the general
//! provider.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::assistant::ScriptAssistant;
use crate::error::{Error, Result};
use crate::providers::{CompletionProvider, CompletionRequest};
use crate::script::Transliterator;
use crate::topic::TopicGate;
use crate::types::{ChatReply, ChatRequest, Route};

/// Caller system prompts shorter than this (in chars) are ignored
pub const MIN_SYSTEM_PROMPT_CHARS: usize = 50;

const GENERAL_EMPTY_REPLY: &str = "Maaf, AI tidak memberikan balasan yang valid.";
const SCRIPT_EMPTY_REPLY: &str = "Maaf, AbidinAI tidak memberikan balasan yang valid.";

/// Routes chat messages between the script assistant and the general provider
pub struct ChatDispatcher {
    gate: TopicGate,
    transliterator: Transliterator,
    general: Arc<dyn CompletionProvider>,
    script_assistant: Option<Arc<dyn CompletionProvider>>,
}

impl ChatDispatcher {
    /// Build with the built-in keyword list and script tables
    pub fn new(
        general: Arc<dyn CompletionProvider>,
        script_assistant: Option<Arc<dyn CompletionProvider>>,
    ) -> Result<Self> {
        Ok(Self {
            gate: TopicGate::new()?,
            transliterator: Transliterator::new()?,
            general,
            script_assistant,
        })
    }

    /// Replace the topic gate
    pub fn with_gate(mut self, gate: TopicGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn gate(&self) -> &TopicGate {
        &self.gate
    }

    pub fn transliterator(&self) -> &Transliterator {
        &self.transliterator
    }

    /// Names of the configured providers, general first
    pub fn provider_names(&self) -> Vec<&'static str> {
        let mut names = vec![self.general.name()];
        if let Some(assistant) = &self.script_assistant {
            names.push(assistant.name());
        }
        names
    }

    /// Produce a reply for one chat message
    pub async fn reply(&self, request: ChatRequest) -> Result<ChatReply> {
        if request.message.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }

        if let Some(reply) = self.try_script_assistant(&request.message).await {
            return Ok(reply);
        }

        let system_prompt = request
            .system_prompt
            .filter(|prompt| prompt.chars().count() >= MIN_SYSTEM_PROMPT_CHARS);

        let mut completion = CompletionRequest::new(request.message);
        if let Some(prompt) = system_prompt {
            completion = completion.with_system_prompt(prompt);
        }

        debug!("Routing message to {}", self.general.name());
        let response = self.general.complete(completion).await?;

        Ok(ChatReply::new(
            non_empty_or(response.text, GENERAL_EMPTY_REPLY),
            Route::General,
        ))
    }

    /// `None` means the message should go to the general provider
    async fn try_script_assistant(&self, message: &str) -> Option<ChatReply> {
        let keyword = self.gate.matched_keyword(message)?;

        let assistant = match &self.script_assistant {
            Some(assistant) if assistant.is_configured() => assistant,
            _ => {
                debug!(
                    "Script topic ({}) but no script assistant configured",
                    keyword
                );
                return None;
            }
        };

        debug!(
            "Routing script topic ({}) to {}",
            keyword,
            assistant.name()
        );

        let system_prompt = ScriptAssistant::new(&self.transliterator).system_prompt(message);
        let request = CompletionRequest::new(message).with_system_prompt(system_prompt);

        match assistant.complete(request).await {
            Ok(response) => Some(ChatReply::new(
                non_empty_or(response.text, SCRIPT_EMPTY_REPLY),
                Route::ScriptAssistant,
            )),
            Err(e) => {
                warn!(
                    "{} failed, falling back to {}: {}",
                    assistant.name(),
                    self.general.name(),
                    e
                );
                None
            }
        }
    }
}

fn non_empty_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
