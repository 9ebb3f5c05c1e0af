//! Wire protocol spoken with the remote debate engine.
//!
//! Outbound frames carry an `action` tag, inbound frames a `type` tag.
//! Both are JSON text frames.

use serde::{Deserialize, Serialize};

use crate::session::DebateMode;
use crate::summary::Summary;
use crate::turn::DebateTurn;
use crate::{DebateError, Result};

/// Client → engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OutboundCommand {
    Start {
        question: String,
        persona_ids: Vec<String>,
        mode: DebateMode,
    },
}

impl OutboundCommand {
    pub fn start(question: impl Into<String>, persona_ids: Vec<String>, mode: DebateMode) -> Self {
        OutboundCommand::Start {
            question: question.into(),
            persona_ids,
            mode,
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Engine → client. Unrecognised `type` tags land in `Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    DebateResponse {
        data: DebateTurn,
    },
    DebateComplete {
        #[serde(default)]
        data: Summary,
    },
    Error {
        #[serde(default)]
        message: String,
    },
    #[serde(other)]
    Unknown,
}

impl InboundMessage {
    pub fn decode(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DebateError::Protocol(e.to_string()))
    }
}
