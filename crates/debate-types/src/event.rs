use serde::{Deserialize, Serialize};

use crate::summary::Summary;
use crate::turn::DebateTurn;

/// Raw lifecycle callbacks of the transport, queued by the platform adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransportEvent {
    Opened,
    /// A text frame, not yet decoded
    Message(String),
    Failed,
    Closed,
}

/// Typed events produced by the connection manager for the session controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DebateEvent {
    /// Transport is open and ready to send
    Connected,

    /// Transport closed; nothing further will arrive on it
    Disconnected,

    /// A live turn to append to the log
    TurnReceived(DebateTurn),

    /// The named speaker finished; no text attached
    SpeakerFinished { persona_id: String },

    /// Terminal summary for the running debate
    DebateCompleted(Summary),

    /// Advisory connectivity problem: transport failure or an `error` envelope
    ConnectionError { message: String },
}
