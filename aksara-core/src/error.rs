//! Error types for Aksara

use thiserror::Error;

/// Result type alias using Aksara's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in Aksara
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Keyword automaton failed to build: {0}")]
    Pattern(#[from] aho_corasick::BuildError),

    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Completion failed: {0}")]
    Completion(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
