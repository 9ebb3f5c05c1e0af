//! Port traits: the boundary between the session core and the browser.
//!
//! Implementations live in `debate-platform`. The core never imports
//! platform code; it only depends on these traits.

use async_trait::async_trait;
use debate_types::{Result, persona::Persona};

use crate::event_bus::EventBus;

// ─── Transport Port ──────────────────────────────────────────

/// One live bidirectional stream to the debate engine.
///
/// Implementations push their open/message/error/close callbacks into the
/// `EventBus` they were created with and do no decoding of their own.
pub trait TransportPort {
    /// Send one text frame
    fn send_text(&self, text: &str) -> Result<()>;

    /// Whether the underlying stream is open and accepting frames
    fn is_open(&self) -> bool;

    /// Close the stream and detach all callbacks. Must be idempotent.
    fn close(&mut self);
}

/// Creates transports. Held by the connection manager so it can replace
/// the live transport when the session identifier changes.
pub trait TransportConnector {
    fn connect(&self, url: &str, events: EventBus) -> Result<Box<dyn TransportPort>>;
}

// ─── Persona Catalog Port ────────────────────────────────────

#[async_trait(?Send)]
pub trait PersonaCatalogPort {
    /// Fetch the full list of selectable personas
    async fn fetch_personas(&self) -> Result<Vec<Persona>>;
}

/// Fetch the catalog once; failures are logged and yield an empty list.
pub async fn fetch_catalog_or_empty(catalog: &dyn PersonaCatalogPort) -> Vec<Persona> {
    match catalog.fetch_personas().await {
        Ok(personas) => {
            log::info!("Persona catalog loaded: {} personas", personas.len());
            personas
        }
        Err(e) => {
            log::error!("Error fetching personas: {}", e);
            Vec::new()
        }
    }
}
