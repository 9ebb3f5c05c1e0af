use serde::{Deserialize, Serialize};

use crate::session::DebateMode;
use crate::{DebateError, Result};

/// Client configuration supplied by the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the HTTP API serving the persona catalog
    pub api_base: String,
    /// Base URL of the debate stream endpoint (ws:// or wss://)
    pub ws_base: String,
    pub mode: DebateMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            ws_base: DEFAULT_WS_BASE.to_string(),
            mode: DebateMode::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig =
            serde_json::from_str(json).map_err(|e| DebateError::Config(e.to_string()))?;
        if config.ws_base.trim().is_empty() {
            return Err(DebateError::Config("ws_base must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/api/personas", self.api_base.trim_end_matches('/'))
    }

    pub fn stream_url(&self, session_id: &str) -> String {
        format!("{}/ws/debate/{}", self.ws_base.trim_end_matches('/'), session_id)
    }
}

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_WS_BASE: &str = "ws://localhost:8000";
