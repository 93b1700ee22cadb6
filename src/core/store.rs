//! # Store
//!
//! Owns the one `AppState` snapshot and the list of subscribers.
//!
//! ```text
//! dispatch(action)
//!     │
//!     ▼
//! reduce(&state, action) ──► state = next ──► subscriber(&state) for each
//! ```
//!
//! There is no global store. `tui::run` builds one and lends it to whoever
//! needs it. `dispatch` takes `&mut self`, so nothing can dispatch while a
//! reduction or notification is in progress.

use std::sync::Arc;

use log::debug;

use crate::core::action::{Action, reduce};
use crate::core::state::AppState;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AppState)>;

pub struct Store {
    state: Arc<AppState>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::new())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Cheap handle to the current snapshot. Stays valid after later dispatches.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Registers a callback invoked with the new state after every dispatch.
    /// Subscribers run in registration order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if the id was unknown (already removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        let next = reduce(&self.state, action);
        debug!(
            "Dispatched {}: is_loading={}, characters={}, error={:?}",
            kind,
            next.is_loading,
            next.characters.len(),
            next.error.as_ref().map(|e| e.message.as_str())
        );
        self.state = next;

        let state: &AppState = &self.state;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Character, ErrorInfo};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_store_starts_with_initial_state() {
        let store = Store::new();
        assert_eq!(*store.state(), AppState::new());
    }

    #[test]
    fn test_dispatch_replaces_state() {
        let mut store = Store::new();
        let before = store.snapshot();

        store.dispatch(Action::Requested);

        assert!(store.state().is_loading);
        // The old snapshot is not mutated
        assert!(!before.is_loading);
    }

    #[test]
    fn test_subscriber_sees_new_state() {
        let mut store = Store::new();
        let seen: Rc<RefCell<Vec<AppState>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        store.dispatch(Action::Requested);
        store.dispatch(Action::Succeeded(vec![Character::new(1, "Rick", "u")]));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_loading);
        assert!(!seen[1].is_loading);
        assert_eq!(seen[1].characters.len(), 1);
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let mut store = Store::new();
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        store.subscribe(move |_| first.borrow_mut().push("first"));
        store.subscribe(move |_| second.borrow_mut().push("second"));

        store.dispatch(Action::Requested);

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_noop_dispatch_still_notifies() {
        let mut store = Store::new();
        store.dispatch(Action::Requested);
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let before = store.snapshot();
        store.dispatch(Action::Requested);

        assert_eq!(*count.borrow(), 1);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = Store::new();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch(Action::Requested);
        assert!(store.unsubscribe(id));
        store.dispatch(Action::Failed(ErrorInfo::new("x")));

        assert_eq!(*count.borrow(), 1);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_with_state() {
        let state = AppState {
            characters: vec![Character::new(7, "Birdperson", "b")],
            is_loading: false,
            error: None,
        };
        let store = Store::with_state(state.clone());
        assert_eq!(*store.state(), state);
    }
}
