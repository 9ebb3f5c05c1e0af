use serde::{Deserialize, Serialize};

/// Lifecycle status of a debate run, as the engine and replay views name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// How the engine schedules persona turns within a wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebateMode {
    Sequential,
    Parallel,
    #[default]
    Hybrid,
}

impl DebateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateMode::Sequential => "sequential",
            DebateMode::Parallel => "parallel",
            DebateMode::Hybrid => "hybrid",
        }
    }
}

/// One run of the debate feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateSession {
    pub id: String,
    pub question: String,
    pub selected_persona_ids: Vec<String>,
    pub status: SessionStatus,
    pub mode: DebateMode,
    pub created_at: String,
}

impl DebateSession {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        selected_persona_ids: Vec<String>,
        mode: DebateMode,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            selected_persona_ids,
            status: SessionStatus::Pending,
            mode,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Opaque identifier addressing one transport endpoint.
pub fn new_session_id() -> String {
    format!("session-{}", uuid::Uuid::new_v4())
}
