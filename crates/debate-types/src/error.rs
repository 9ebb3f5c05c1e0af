use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebateError {
    #[error("{0}")]
    Validation(String),

    #[error("Not connected to server")]
    NotConnected,

    #[error("Session identifier must not be empty")]
    InvalidSessionId,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Persona catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for DebateError {
    fn from(e: serde_json::Error) -> Self {
        DebateError::Serialization(e.to_string())
    }
}
