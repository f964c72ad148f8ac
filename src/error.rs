use std::fmt;

/// Raised while building a sender from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is required")]
    MissingApiKey,

    #[error("Base URL is required")]
    MissingBaseUrl,

    #[error("Invalid base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("Sender address is required")]
    MissingSenderAddress,

    #[error("{0} environment variable is required")]
    MissingEnv(&'static str),
}

/// Failure to talk to the mail provider at all (as opposed to the provider
/// answering with a non-accepted status).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Could not read provider response: {0}")]
    Body(String),
}

/// Message data that cannot be turned into template fields.
#[derive(Debug, thiserror::Error)]
pub enum TemplateDataError {
    #[error("Message data could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Message data must serialize to an object, got {0}")]
    NotAnObject(&'static str),
}

/// Aggregated failure of a send call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendFailure {
    messages: Vec<String>,
}

impl SendFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Failure messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for SendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}

impl std::error::Error for SendFailure {}

/// Outcome of a send call: `Ok(())` only if every recipient was accepted.
pub type SendResult = std::result::Result<(), SendFailure>;

/// Combine two outcomes, keeping every failure message in order.
pub fn combine(left: SendResult, right: SendResult) -> SendResult {
    match (left, right) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(failure), Ok(())) | (Ok(()), Err(failure)) => Err(failure),
        (Err(mut left), Err(right)) => {
            left.messages.extend(right.messages);
            Err(left)
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
