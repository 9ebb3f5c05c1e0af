//! Connection manager. Owns the single live transport for a session.
//!
//! Translates user intent into outbound frames and raw transport callbacks
//! into typed [`DebateEvent`]s. Holds connectivity state only; all debate
//! state lives in the controller.

use std::rc::Rc;

use serde::Serialize;
use debate_types::{
    DebateError, Result,
    config::ClientConfig,
    event::{DebateEvent, TransportEvent},
    protocol::{InboundMessage, OutboundCommand},
    session::DebateMode,
};

use crate::event_bus::EventBus;
use crate::ports::{TransportConnector, TransportPort};

/// Marker recorded when the transport itself reports a failure.
pub const CONNECTION_ERROR: &str = "Connection error";

/// Externally observable connectivity. An error is shown in preference to
/// the open/closed flag, matching what the status line displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ConnectionState {
    NotConnected,
    Connected,
    Error(String),
}

pub struct ConnectionManager {
    config: ClientConfig,
    connector: Rc<dyn TransportConnector>,
    events: EventBus,
    transport: Option<Box<dyn TransportPort>>,
    session_id: Option<String>,
    connected: bool,
    error: Option<String>,
}

impl ConnectionManager {
    pub fn new(config: ClientConfig, connector: Rc<dyn TransportConnector>, events: EventBus) -> Self {
        Self {
            config,
            connector,
            events,
            transport: None,
            session_id: None,
            connected: false,
            error: None,
        }
    }

    /// Open a transport addressed by `session_id`, closing any previous one first.
    pub fn open(&mut self, session_id: &str) -> Result<()> {
        validate_session_id(session_id)?;

        self.teardown();
        // Anything still queued belongs to the transport just closed
        let stale = self.events.discard();
        if stale > 0 {
            log::debug!("Dropped {} events from previous transport", stale);
        }

        let url = self.config.stream_url(session_id);
        log::info!("Connecting to debate stream: {}", url);
        self.session_id = Some(session_id.to_string());

        match self.connector.connect(&url, self.events.clone()) {
            Ok(transport) => {
                self.transport = Some(transport);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to open transport for {}: {}", session_id, e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Close the live transport, if any, and reset connectivity.
    pub fn teardown(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            transport.close();
            log::info!("Transport closed");
        }
        self.connected = false;
        self.error = None;
    }

    /// Transmit the single start command for a debate run.
    ///
    /// Not ready is reported as [`DebateError::NotConnected`] and recorded as
    /// the current connectivity error; nothing is sent.
    pub fn send_start(&mut self, question: &str, persona_ids: &[String], mode: DebateMode) -> Result<()> {
        if !self.is_ready() {
            return Err(self.report_not_connected());
        }

        let frame = OutboundCommand::start(question, persona_ids.to_vec(), mode).encode()?;
        log::info!(
            "Starting debate: {} personas, mode {}",
            persona_ids.len(),
            mode.as_str()
        );
        let sent = match self.transport.as_ref() {
            Some(transport) => transport.send_text(&frame),
            None => Err(DebateError::NotConnected),
        };
        sent.map_err(|e| self.record(e))
    }

    /// Drain queued transport callbacks and translate them in arrival order.
    pub fn pump(&mut self) -> Vec<DebateEvent> {
        if !self.events.has_pending() {
            return Vec::new();
        }
        self.events
            .drain()
            .into_iter()
            .filter_map(|event| self.handle(event))
            .collect()
    }

    pub fn handle(&mut self, event: TransportEvent) -> Option<DebateEvent> {
        match event {
            TransportEvent::Opened => {
                log::info!("WebSocket connected");
                self.connected = true;
                self.error = None;
                Some(DebateEvent::Connected)
            }
            TransportEvent::Failed => {
                log::error!("WebSocket error");
                self.error = Some(CONNECTION_ERROR.to_string());
                Some(DebateEvent::ConnectionError {
                    message: CONNECTION_ERROR.to_string(),
                })
            }
            TransportEvent::Closed => {
                log::info!("WebSocket closed");
                self.connected = false;
                Some(DebateEvent::Disconnected)
            }
            TransportEvent::Message(text) => self.decode(&text),
        }
    }

    fn decode(&mut self, text: &str) -> Option<DebateEvent> {
        let message = match InboundMessage::decode(text) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("Dropping undecodable frame: {}", e);
                return None;
            }
        };

        match message {
            InboundMessage::DebateResponse { data } if data.is_final => {
                Some(DebateEvent::SpeakerFinished {
                    persona_id: data.persona_id,
                })
            }
            InboundMessage::DebateResponse { data } => Some(DebateEvent::TurnReceived(data)),
            InboundMessage::DebateComplete { data } => Some(DebateEvent::DebateCompleted(data)),
            InboundMessage::Error { message } => {
                log::error!("WebSocket error: {}", message);
                self.error = Some(message.clone());
                Some(DebateEvent::ConnectionError { message })
            }
            InboundMessage::Unknown => {
                log::debug!("Ignoring unknown message type");
                None
            }
        }
    }

    /// Record a start attempt against a transport that is not ready.
    pub fn report_not_connected(&mut self) -> DebateError {
        log::error!("WebSocket not connected");
        self.record(DebateError::NotConnected)
    }

    fn record(&mut self, e: DebateError) -> DebateError {
        self.error = Some(e.to_string());
        e
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Connected and the transport still accepts frames. The open flag lags
    /// behind a socket that is closing until its close callback is pumped.
    pub fn is_ready(&self) -> bool {
        self.connected && self.transport.as_ref().is_some_and(|t| t.is_open())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn state(&self) -> ConnectionState {
        match (&self.error, self.connected) {
            (Some(reason), _) => ConnectionState::Error(reason.clone()),
            (None, true) => ConnectionState::Connected,
            (None, false) => ConnectionState::NotConnected,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

pub fn validate_session_id(session_id: &str) -> Result<()> {
    if session_id.trim().is_empty() {
        return Err(DebateError::InvalidSessionId);
    }
    Ok(())
}

impl Drop for ConnectionManager {
    fn drop(&mut self) {
        self.teardown();
    }
}
