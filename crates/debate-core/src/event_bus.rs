//! Queue between the transport callbacks and the session controller.
//!
//! Socket callbacks fire on the browser event loop; the controller only
//! mutates state when the host polls. Everything a transport reports waits
//! here in delivery order until then.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use debate_types::event::TransportEvent;

/// Handle shared by the connection manager and every transport it opens.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<TransportEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called from transport callbacks.
    pub fn emit(&self, event: TransportEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    /// Take everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<TransportEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Drop queued events without applying them. Returns how many were dropped.
    pub fn discard(&self) -> usize {
        let mut queue = self.queue.borrow_mut();
        let dropped = queue.len();
        queue.clear();
        dropped
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
