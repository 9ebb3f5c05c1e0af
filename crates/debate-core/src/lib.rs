//! Debate session core.
//!
//! Everything here is single-threaded and platform-free. Browser adapters
//! implement the traits in [`ports`] and feed raw transport callbacks into an
//! [`event_bus::EventBus`]; the [`controller::DebateController`] drains it.

pub mod ports;
pub mod event_bus;
pub mod tension;
pub mod aggregator;
pub mod connection;
pub mod controller;
pub mod view;
