//! Aksara - Javanese script (Hanacaraka) transliteration with an AI chat router
//!
//! The transliteration engine and topic gate are pure and safe to share across
//! threads. The dispatcher puts the topic gate in front of two completion
//! providers: a script-aware assistant and a general fallback.

pub mod assistant;
pub mod dispatch;
pub mod error;
pub mod providers;
pub mod script;
pub mod topic;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Re-export the main components for convenience
pub use assistant::{REFERENCE_WORDS, ReferenceWord, ScriptAssistant, TransliterationHint};
pub use dispatch::ChatDispatcher;
pub use providers::{CompletionProvider, GeminiCompletionProvider, GroqCompletionProvider};
pub use script::{
    Direction, TransliterationRequest, Transliterator, latin_to_script, script_to_latin,
};
pub use topic::{TopicGate, is_script_topic};
