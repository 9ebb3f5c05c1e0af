//! Browser adapters for the debate session core.
//!
//! [`websocket`] provides the live stream transport, [`catalog`] the persona
//! list over HTTP. Both only compile to something useful on wasm32.

pub mod websocket;
pub mod catalog;

pub use catalog::HttpPersonaCatalog;
pub use websocket::{WebSocketConnector, WebSocketTransport};
