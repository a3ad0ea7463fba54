//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to follow an action up with another one (for
//! example a notification after a post is created), it uses the Dispatcher.
//! Dispatched actions are queued on a channel the store drains right after
//! the current action is reduced, so they pass through the full middleware
//! chain before `Store::dispatch` returns.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action behind the one currently being processed
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
