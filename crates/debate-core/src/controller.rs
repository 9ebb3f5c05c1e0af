//! Debate session state machine.
//!
//! ```text
//! Idle ──open──▶ Connecting ──transport open──▶ Idle
//! Idle/Completed ──request_start──▶ Running ──debate_complete──▶ Completed
//! Connecting/Running ──unrecoverable──▶ Errored
//! any ──reset──▶ Idle
//! ```
//!
//! Connectivity errors are advisory: they are recorded for display and never
//! move the session out of `Connecting` or `Running` on their own. There is no
//! timeout that turns a silent stream into `Errored`.

use std::rc::Rc;

use serde::Serialize;
use debate_types::{
    DebateError, Result,
    config::ClientConfig,
    event::DebateEvent,
    persona::Persona,
    session::{DebateMode, DebateSession, SessionStatus, new_session_id},
    summary::Summary,
    turn::DebateTurn,
};

use crate::aggregator::ResponseAggregator;
use crate::connection::{ConnectionManager, ConnectionState, validate_session_id};
use crate::event_bus::EventBus;
use crate::ports::TransportConnector;
use crate::view::SessionView;

pub const MAX_SELECTED_PERSONAS: usize = 6;
pub const MIN_SELECTED_PERSONAS: usize = 2;

pub const START_VALIDATION_MESSAGE: &str = "Please enter a question and select at least 2 personas";
pub const BUSY_VALIDATION_MESSAGE: &str = "A debate is already in progress";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "reason", rename_all = "snake_case")]
pub enum DebatePhase {
    Idle,
    Connecting,
    Running,
    Completed,
    Errored(String),
}

/// Single owned container for one debate session. All mutation goes through
/// the action methods below; readers get borrowed projections or a
/// [`SessionView`] snapshot.
pub struct DebateController {
    connection: ConnectionManager,
    aggregator: ResponseAggregator,
    phase: DebatePhase,
    question: String,
    selected: Vec<Persona>,
    catalog: Vec<Persona>,
    session: Option<DebateSession>,
    summary: Option<Summary>,
    validation_message: Option<String>,
}

impl DebateController {
    pub fn new(config: ClientConfig, connector: Rc<dyn TransportConnector>, events: EventBus) -> Self {
        Self {
            connection: ConnectionManager::new(config, connector, events),
            aggregator: ResponseAggregator::new(),
            phase: DebatePhase::Idle,
            question: String::new(),
            selected: Vec::new(),
            catalog: Vec::new(),
            session: None,
            summary: None,
            validation_message: None,
        }
    }

    // ─── Session setup ───────────────────────────────────────

    /// Generate a fresh identifier and open a transport for it.
    pub fn new_session(&mut self) -> Result<String> {
        let session_id = new_session_id();
        self.open_session(&session_id)?;
        Ok(session_id)
    }

    /// Address the transport by `session_id`, replacing any previous one.
    /// Results of the previous run are discarded; question and selection stay.
    /// An empty identifier is rejected before anything changes.
    pub fn open_session(&mut self, session_id: &str) -> Result<()> {
        validate_session_id(session_id)?;
        self.clear_run();
        self.phase = DebatePhase::Connecting;
        if let Err(e) = self.connection.open(session_id) {
            self.phase = DebatePhase::Errored(e.to_string());
            return Err(e);
        }
        Ok(())
    }

    pub fn load_catalog(&mut self, personas: Vec<Persona>) {
        self.catalog = personas;
    }

    // ─── User actions ────────────────────────────────────────

    pub fn set_question(&mut self, question: impl Into<String>) -> bool {
        if self.is_running() {
            return false;
        }
        self.question = question.into();
        true
    }

    /// Add a persona to the selection. Rejected without error while running,
    /// when already selected, or when the selection is full.
    pub fn select_persona(&mut self, persona: Persona) -> bool {
        if self.is_running() {
            log::debug!("Selection locked while debate is running");
            return false;
        }
        if self.selected.len() >= MAX_SELECTED_PERSONAS {
            log::debug!("Selection full, rejected {}", persona.id);
            return false;
        }
        if self.is_selected(&persona.id) {
            log::debug!("Persona {} already selected", persona.id);
            return false;
        }
        self.selected.push(persona);
        true
    }

    /// Select a persona from the loaded catalog by id.
    pub fn select_persona_by_id(&mut self, persona_id: &str) -> bool {
        match self.catalog.iter().find(|p| p.id == persona_id).cloned() {
            Some(persona) => self.select_persona(persona),
            None => {
                log::debug!("Persona {} not in catalog", persona_id);
                false
            }
        }
    }

    pub fn deselect_persona(&mut self, persona_id: &str) -> bool {
        if self.is_running() {
            return false;
        }
        let before = self.selected.len();
        self.selected.retain(|p| p.id != persona_id);
        self.selected.len() != before
    }

    /// Begin a debate run. On a failed guard nothing changes except the
    /// user-facing message.
    pub fn request_start(&mut self) -> Result<()> {
        if !matches!(self.phase, DebatePhase::Idle | DebatePhase::Completed) {
            self.validation_message = Some(BUSY_VALIDATION_MESSAGE.to_string());
            return Err(DebateError::Validation(BUSY_VALIDATION_MESSAGE.to_string()));
        }
        if self.selected.len() < MIN_SELECTED_PERSONAS || self.question.trim().is_empty() {
            self.validation_message = Some(START_VALIDATION_MESSAGE.to_string());
            return Err(DebateError::Validation(START_VALIDATION_MESSAGE.to_string()));
        }
        let session_id = match self.connection.session_id().map(str::to_string) {
            Some(id) if self.connection.is_ready() => id,
            _ => {
                self.validation_message = None;
                return Err(self.connection.report_not_connected());
            }
        };

        self.validation_message = None;
        self.clear_run();
        let mode = self.mode();
        let persona_ids = self.selected_ids();
        let mut session = DebateSession::new(session_id, self.question.clone(), persona_ids.clone(), mode);
        self.phase = DebatePhase::Running;

        let sent = self.connection.send_start(&self.question, &persona_ids, mode);
        match &sent {
            Ok(()) => session.status = SessionStatus::Running,
            Err(e) => {
                session.status = SessionStatus::Failed;
                self.phase = DebatePhase::Errored(e.to_string());
            }
        }
        self.session = Some(session);
        sent
    }

    /// Return to a fresh `Idle`. The transport is left alone.
    pub fn reset(&mut self) {
        self.question.clear();
        self.selected.clear();
        self.validation_message = None;
        self.clear_run();
        self.phase = DebatePhase::Idle;
    }

    // ─── Inbound events ──────────────────────────────────────

    /// Drain transport callbacks and apply them in order.
    /// Returns true if anything arrived.
    pub fn poll(&mut self) -> bool {
        let events = self.connection.pump();
        let changed = !events.is_empty();
        for event in events {
            self.handle_event(event);
        }
        changed
    }

    pub fn handle_event(&mut self, event: DebateEvent) {
        match event {
            DebateEvent::Connected => {
                if self.phase == DebatePhase::Connecting {
                    self.phase = DebatePhase::Idle;
                }
            }
            DebateEvent::Disconnected => {
                log::debug!("Stream closed in phase {:?}", self.phase);
            }
            DebateEvent::TurnReceived(turn) => {
                if self.is_running() {
                    self.aggregator.append(turn);
                } else {
                    log::debug!("Ignoring turn from {} outside a running debate", turn.persona_id);
                }
            }
            DebateEvent::SpeakerFinished { persona_id } => {
                if self.is_running() {
                    log::debug!("{} finished speaking", persona_id);
                    self.aggregator.clear_active_speaker();
                }
            }
            DebateEvent::DebateCompleted(summary) => {
                if !self.is_running() {
                    log::debug!("Ignoring completion outside a running debate");
                    return;
                }
                self.summary = Some(summary);
                self.aggregator.clear_active_speaker();
                if let Some(session) = self.session.as_mut() {
                    session.status = SessionStatus::Completed;
                }
                self.phase = DebatePhase::Completed;
                log::info!("Debate completed after {} turns", self.aggregator.turns().len());
            }
            DebateEvent::ConnectionError { message } => {
                log::warn!("Connectivity problem in phase {:?}: {}", self.phase, message);
            }
        }
    }

    fn clear_run(&mut self) {
        self.aggregator.reset();
        self.summary = None;
        self.session = None;
    }

    // ─── Projections ─────────────────────────────────────────

    pub fn phase(&self) -> &DebatePhase {
        &self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == DebatePhase::Running
    }

    pub fn can_start(&self) -> bool {
        matches!(self.phase, DebatePhase::Idle | DebatePhase::Completed)
            && self.selected.len() >= MIN_SELECTED_PERSONAS
            && !self.question.trim().is_empty()
            && self.connection.is_ready()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn selected(&self) -> &[Persona] {
        &self.selected
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().map(|p| p.id.clone()).collect()
    }

    pub fn is_selected(&self, persona_id: &str) -> bool {
        self.selected.iter().any(|p| p.id == persona_id)
    }

    pub fn catalog(&self) -> &[Persona] {
        &self.catalog
    }

    pub fn turns(&self) -> &[DebateTurn] {
        self.aggregator.turns()
    }

    pub fn aggregator(&self) -> &ResponseAggregator {
        &self.aggregator
    }

    pub fn current_wave(&self) -> u32 {
        self.aggregator.current_wave()
    }

    pub fn active_speaker(&self) -> Option<&str> {
        self.aggregator.active_speaker()
    }

    pub fn tension(&self) -> u8 {
        self.aggregator.tension()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn session(&self) -> Option<&DebateSession> {
        self.session.as_ref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.connection.session_id()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection.state()
    }

    pub fn connection_error(&self) -> Option<&str> {
        self.connection.error()
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    fn mode(&self) -> DebateMode {
        self.connection.config().mode
    }

    pub fn view(&self) -> SessionView {
        SessionView::capture(self)
    }
}
