// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::action::Action;

/// A channel that accepts dispatched actions.
pub trait Dispatch: Send + Sync {
    /// Delivers an action.
    fn dispatch(&self, action: &Action);
}

type Subscriber = Box<dyn Fn(&Action) + Send + Sync>;

/// Fans every action out to its subscribers, in registration order.
#[derive(Default)]
pub struct Dispatcher {
    subscribers: Vec<Subscriber>,
}

impl Dispatcher {
    /// Creates a dispatcher without subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscriber.
    pub fn register(&mut self, callback: impl Fn(&Action) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(callback));
    }
}

impl Dispatch for Dispatcher {
    fn dispatch(&self, action: &Action) {
        tracing::trace!(kind = action.kind(), subscribers = self.subscribers.len(), "dispatching");
        for sub in &self.subscribers {
            sub(action);
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Records every dispatched action.
#[derive(Debug, Default)]
pub struct ActionLog {
    actions: Mutex<Vec<Action>>,
}

impl ActionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded actions in dispatch order.
    pub fn actions(&self) -> Vec<Action> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forgets all recorded actions.
    pub fn clear(&self) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Dispatch for ActionLog {
    fn dispatch(&self, action: &Action) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action.clone());
    }
}
