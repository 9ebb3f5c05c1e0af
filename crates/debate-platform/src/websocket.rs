//! WebSocket transport adapter.
//!
//! Browser callbacks never touch session state. Each one pushes a raw
//! [`TransportEvent`] onto the shared [`EventBus`]; the controller drains the
//! bus on its next poll and does all decoding there.

use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use debate_core::event_bus::EventBus;
use debate_core::ports::{TransportConnector, TransportPort};
use debate_types::{DebateError, Result, event::TransportEvent};

/// Opens browser WebSockets for the connection manager.
#[derive(Default)]
pub struct WebSocketConnector;

impl WebSocketConnector {
    pub fn new() -> Self {
        Self
    }
}

impl TransportConnector for WebSocketConnector {
    fn connect(&self, url: &str, events: EventBus) -> Result<Box<dyn TransportPort>> {
        Ok(Box::new(WebSocketTransport::open(url, events)?))
    }
}

/// One live socket plus the handlers attached to it. The closures are owned
/// here so that closing the transport also releases them.
pub struct WebSocketTransport {
    socket: WebSocket,
    _onopen: Closure<dyn FnMut(Event)>,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(Event)>,
    _onclose: Closure<dyn FnMut(CloseEvent)>,
    closed: bool,
}

impl WebSocketTransport {
    pub fn open(url: &str, events: EventBus) -> Result<Self> {
        let socket = WebSocket::new(url)
            .map_err(|e| DebateError::Transport(format!("Failed to open WebSocket: {:?}", e)))?;

        let bus = events.clone();
        let onopen = Closure::wrap(Box::new(move |_event: Event| {
            bus.emit(TransportEvent::Opened);
        }) as Box<dyn FnMut(Event)>);
        socket.set_onopen(Some(onopen.as_ref().unchecked_ref()));

        let bus = events.clone();
        let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
            match event.data().dyn_into::<js_sys::JsString>() {
                Ok(text) => bus.emit(TransportEvent::Message(text.into())),
                Err(_) => log::warn!("Ignoring non-text WebSocket frame"),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let bus = events.clone();
        let onerror = Closure::wrap(Box::new(move |_event: Event| {
            bus.emit(TransportEvent::Failed);
        }) as Box<dyn FnMut(Event)>);
        socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        let bus = events;
        let onclose = Closure::wrap(Box::new(move |event: CloseEvent| {
            log::debug!("WebSocket close code {}", event.code());
            bus.emit(TransportEvent::Closed);
        }) as Box<dyn FnMut(CloseEvent)>);
        socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        Ok(Self {
            socket,
            _onopen: onopen,
            _onmessage: onmessage,
            _onerror: onerror,
            _onclose: onclose,
            closed: false,
        })
    }

    pub fn url(&self) -> String {
        self.socket.url()
    }
}

impl TransportPort for WebSocketTransport {
    fn send_text(&self, text: &str) -> Result<()> {
        self.socket
            .send_with_str(text)
            .map_err(|e| DebateError::Transport(format!("send failed: {:?}", e)))
    }

    fn is_open(&self) -> bool {
        !self.closed && self.socket.ready_state() == WebSocket::OPEN
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        // Detach first so nothing from this socket reaches the bus again
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        self.socket.set_onclose(None);
        if let Err(e) = self.socket.close() {
            log::warn!("WebSocket close failed: {:?}", e);
        }
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        self.close();
    }
}
