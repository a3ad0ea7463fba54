use std::sync::mpsc::{self, Receiver};

use chrono::Utc;
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::actions::{Action, FriendAction, NotificationAction, PostAction, ThemeAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{Comment, NewPost, Post};
use crate::middleware::{LoggingMiddleware, Middleware, NotificationMiddleware};
use crate::reducers::reduce;
use crate::state::{AppState, Category};
use crate::storage::KeyValueStorage;

/// What a dispatched action did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reduced, persisted and announced to subscribers
    Applied,
    /// The id the action refers to matched nothing; state is unchanged
    NotFound,
    /// A middleware swallowed the action before it reached the reducer
    Consumed,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Store - holds application state and manages the action loop
///
/// Every mutation goes through [`Store::dispatch`]: the target lookup, the
/// middleware chain, the reducer, persistence of the touched categories and
/// finally the subscribers. Follow-up actions queued by middleware are
/// processed before `dispatch` returns.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
    storage: Box<dyn KeyValueStorage>,
    subscribers: Vec<Subscriber>,
}

impl Store {
    /// Store over an explicit state, without any middleware
    pub(crate) fn new(initial_state: AppState, storage: impl KeyValueStorage + 'static) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
            storage: Box::new(storage),
            subscribers: Vec::new(),
        }
    }

    /// Store over an injected snapshot, with the default middleware installed.
    /// Nothing is written until the first applied action.
    pub fn with_state(state: AppState, storage: impl KeyValueStorage + 'static) -> Self {
        Self::new(state, storage).with_default_middleware()
    }

    /// Load the state from `storage`, install the default middleware and
    /// write every category back, so storage mirrors the state from the start.
    pub fn open(storage: impl KeyValueStorage + 'static) -> Self {
        let state = AppState::load(&storage);
        let mut store = Self::with_state(state, storage);
        store.persist_all();
        log::info!(
            "Store opened: {} posts, {} friends, {} notifications",
            store.state.posts.len(),
            store.state.friends.len(),
            store.state.notifications.len()
        );
        store
    }

    /// Add logging and notification middleware, in that order
    pub fn with_default_middleware(mut self) -> Self {
        self.add_middleware(Box::new(LoggingMiddleware::new()));
        self.add_middleware(Box::new(NotificationMiddleware::new()));
        self
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Register a consumer called with the new snapshot after each applied dispatch
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &dyn KeyValueStorage {
        &*self.storage
    }

    /// Process an action and every follow-up it triggers
    ///
    /// Follow-ups belong to the action that queued them: when the action is
    /// not applied, they are dropped along with it.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.process(action);
        if !outcome.is_applied() {
            self.discard_follow_ups();
            return outcome;
        }

        let mut changed = true;

        while let Ok(follow_up) = self.action_rx.try_recv() {
            changed |= self.process(follow_up).is_applied();
        }

        if changed {
            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
        outcome
    }

    fn discard_follow_ups(&mut self) {
        while let Ok(dropped) = self.action_rx.try_recv() {
            log::debug!("Dropping follow-up {:?}", dropped);
        }
    }

    fn process(&mut self, action: Action) -> Outcome {
        if let Some(target) = action.target() {
            if !self.state.contains(&target) {
                log::debug!("Ignoring {:?}: {:?} not found", action, target);
                return Outcome::NotFound;
            }
        }

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return Outcome::Consumed;
            }
        }

        self.state = reduce(self.state.clone(), &action);
        self.persist(action.categories());
        Outcome::Applied
    }

    /// Write the given categories to storage; failures are logged, never returned
    fn persist(&mut self, categories: &[Category]) {
        for &category in categories {
            match self.state.encode(category) {
                Ok(json) => self.storage.set(category.key(), &json),
                Err(e) => log::error!("Failed to serialize {}: {}", category, e),
            }
        }
    }

    /// Write every category to storage
    pub fn persist_all(&mut self) {
        let categories: Vec<Category> = Category::iter().collect();
        self.persist(&categories);
    }

    /// Publish a new post by the current user at the top of the feed
    pub fn create_post(&mut self, draft: NewPost) -> Outcome {
        let post = Post::new(
            Uuid::new_v4().to_string(),
            self.state.current_user.clone(),
            draft,
            Utc::now(),
        );
        self.dispatch(Action::Post(PostAction::Created(post)))
    }

    pub fn like_post(&mut self, post_id: &str) -> Outcome {
        self.dispatch(Action::Post(PostAction::Like(post_id.to_string())))
    }

    pub fn bookmark_post(&mut self, post_id: &str) -> Outcome {
        self.dispatch(Action::Post(PostAction::Bookmark(post_id.to_string())))
    }

    pub fn add_comment(&mut self, post_id: &str, content: impl Into<String>) -> Outcome {
        let comment = Comment::new(
            Uuid::new_v4().to_string(),
            self.state.current_user.clone(),
            content,
            Utc::now(),
        );
        self.dispatch(Action::Post(PostAction::CommentAdded {
            post_id: post_id.to_string(),
            comment,
        }))
    }

    pub fn add_friend(&mut self, user_id: &str) -> Outcome {
        self.dispatch(Action::Friend(FriendAction::Add(user_id.to_string())))
    }

    pub fn mark_notification_as_read(&mut self, notification_id: &str) -> Outcome {
        self.dispatch(Action::Notification(NotificationAction::MarkRead(
            notification_id.to_string(),
        )))
    }

    pub fn mark_all_notifications_as_read(&mut self) -> Outcome {
        self.dispatch(Action::Notification(NotificationAction::MarkAllRead))
    }

    pub fn toggle_theme(&mut self) -> Outcome {
        self.dispatch(Action::Theme(ThemeAction::Toggle))
    }
}
