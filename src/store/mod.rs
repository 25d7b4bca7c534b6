//! Unidirectional data flow: views dispatch [`Action`]s, the store reduces them
//! one at a time into new immutable [`AppState`] snapshots.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::state::AppState;

mod action;
pub mod reducer;

pub use action::Action;
pub use reducer::reduce;

/// Pure function producing the next snapshot.
pub type Reducer = fn(&AppState, &Action) -> AppState;

/// Receives every snapshot the store publishes, in order.
pub trait StateSubscriber {
    fn state_changed(&mut self, state: &AppState);
}

impl<F> StateSubscriber for F
where
    F: FnMut(&AppState),
{
    fn state_changed(&mut self, state: &AppState) {
        self(state)
    }
}

/// Cloneable handle views use to queue actions.
///
/// Dispatching never applies anything; the owning [`Store`] drains the
/// queue in [`Store::process_pending`].
#[derive(Clone, Default)]
pub struct Dispatcher {
    queue: Arc<Mutex<VecDeque<Action>>>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.pending())
            .finish()
    }
}

impl Dispatcher {
    pub fn dispatch(&self, action: Action) {
        log::trace!("Dispatch {:?}", action);
        self.queue.lock().push_back(action);
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Removes and returns everything queued so far.
    pub fn take_pending(&self) -> Vec<Action> {
        self.queue.lock().drain(..).collect()
    }
}

/// Owns the current snapshot and serializes every change to it.
pub struct Store {
    state: Arc<AppState>,
    reducer: Reducer,
    dispatcher: Dispatcher,
    subscribers: Vec<Box<dyn StateSubscriber>>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("version", &self.state.version)
            .field("dispatcher", &self.dispatcher)
            .field("subscribers", &format!("<{} subscribers>", self.subscribers.len()))
            .finish()
    }
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self::with_reducer(state, reduce)
    }

    pub fn with_reducer(state: AppState, reducer: Reducer) -> Self {
        Self {
            state: Arc::new(state),
            reducer,
            dispatcher: Dispatcher::default(),
            subscribers: Vec::new(),
        }
    }

    /// The current snapshot. Holding it across dispatches is safe: it never changes.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn dispatch(&self, action: Action) {
        self.dispatcher.dispatch(action);
    }

    pub fn has_pending(&self) -> bool {
        self.dispatcher.pending() > 0
    }

    pub fn subscribe(&mut self, subscriber: impl StateSubscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies queued actions in dispatch order and returns how many changed the state.
    ///
    /// Actions queued by subscribers during this call are applied in the same pass.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let batch = self.dispatcher.take_pending();
            if batch.is_empty() {
                return applied;
            }
            for action in &batch {
                if self.apply(action) {
                    applied += 1;
                }
            }
        }
    }

    fn apply(&mut self, action: &Action) -> bool {
        let mut next = (self.reducer)(&self.state, action);
        if next == *self.state {
            log::debug!("{:?} left the state unchanged", action);
            return false;
        }

        next.version = self.state.version + 1;
        self.state = Arc::new(next);
        log::debug!("Applied {:?} -> version {}", action, self.state.version);

        for subscriber in &mut self.subscribers {
            subscriber.state_changed(&self.state);
        }
        true
    }
}
