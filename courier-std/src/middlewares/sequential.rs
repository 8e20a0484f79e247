//! # Sequential-Handling Guard
//!
//! Guarantees that a message is fully handled (drained through every
//! subsequent middleware, including all subscriber notifications) before
//! any message published as a side effect of that handling begins its own
//! traversal.
//!
//! # Mechanics
//!
//! Two states: **idle** (no message draining) and **draining** (one
//! message actively traversing the rest of the chain). While draining,
//! re-entrant `handle` calls on the same bus land here, park their message
//! on a FIFO queue and return immediately; the outer call drains the queue
//! one message at a time after its own message completes. This converts
//! nested publishes from recursion into iteration: without the guard, a
//! subscriber that publishes during notification would see the new
//! message's subscribers run before the original message's remaining ones.
//!
//! # Failure semantics
//!
//! The first error, whether from the directly handled message or from a
//! queued head, aborts the drain. The guard resets to idle but keeps the
//! remaining queue: backlog is surfaced, never silently lost. Whichever
//! `handle` call next reaches the guard picks it up (after that call's own
//! message).

use courier_core::{DispatchError, Message, Middleware, Next};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct GuardState {
    draining: bool,
    pending: VecDeque<Arc<dyn Message>>,
}

/// Middleware enforcing finish-one-message-before-the-next ordering.
///
/// Place it in front of the middlewares whose effects must stay ordered,
/// usually first in the chain, ahead of subscriber notification.
#[derive(Default)]
pub struct SequentialHandling {
    state: Mutex<GuardState>,
}

impl SequentialHandling {
    /// Create a guard in the idle state with an empty queue.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GuardState::default()),
        }
    }

    /// Number of messages parked on the pending queue.
    ///
    /// Nonzero after a drain was aborted by an error; those messages are
    /// handled by the next dispatch that reaches the guard.
    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    // The lock is never held across `next.run`, so released state is
    // always consistent and a poisoned lock can be recovered.
    fn lock(&self) -> MutexGuard<'_, GuardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn drain(&self, first: Arc<dyn Message>, next: Next<'_>) -> Result<(), DispatchError> {
        let mut current = first;
        loop {
            next.run(current)?;
            current = match self.lock().pending.pop_front() {
                Some(message) => message,
                None => return Ok(()),
            };
        }
    }
}

impl Middleware for SequentialHandling {
    fn handle(&self, message: Arc<dyn Message>, next: Next<'_>) -> Result<(), DispatchError> {
        {
            let mut state = self.lock();
            if state.draining {
                state.pending.push_back(message);
                return Ok(());
            }
            state.draining = true;
        }

        let result = self.drain(message, next);
        self.lock().draining = false;
        result
    }
}
