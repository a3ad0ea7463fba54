use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod logging;
pub mod notification_middleware;

pub use logging::LoggingMiddleware;
pub use notification_middleware::NotificationMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
