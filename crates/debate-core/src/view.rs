//! Read-only snapshot of the session for the host UI.
//! Rebuilt on demand from the controller; never written back.

use serde::Serialize;
use debate_types::{
    persona::Persona,
    summary::{SentimentBreakdown, Summary},
    turn::DebateTurn,
};

use crate::connection::ConnectionState;
use crate::controller::{DebateController, DebatePhase};

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub phase: DebatePhase,
    pub session_id: Option<String>,
    pub connection: ConnectionState,
    pub question: String,
    pub selected: Vec<Persona>,
    pub catalog: Vec<Persona>,
    pub turns: Vec<DebateTurn>,
    pub current_wave: u32,
    pub active_speaker: Option<String>,
    pub tension: u8,
    pub sentiment_tally: SentimentBreakdown,
    pub summary: Option<Summary>,
    pub validation_message: Option<String>,
    pub can_start: bool,
}

impl SessionView {
    pub fn capture(controller: &DebateController) -> Self {
        Self {
            phase: controller.phase().clone(),
            session_id: controller.session_id().map(String::from),
            connection: controller.connection_state(),
            question: controller.question().to_string(),
            selected: controller.selected().to_vec(),
            catalog: controller.catalog().to_vec(),
            turns: controller.turns().to_vec(),
            current_wave: controller.current_wave(),
            active_speaker: controller.active_speaker().map(String::from),
            tension: controller.tension(),
            sentiment_tally: controller.aggregator().sentiment_tally(),
            summary: controller.summary().cloned(),
            validation_message: controller.validation_message().map(String::from),
            can_start: controller.can_start(),
        }
    }

    pub fn to_json(&self) -> debate_types::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
