//! Testing utilities for Courier.
//!
//! This module provides fixtures to make testing middlewares, subscribers,
//! and bus assemblies easier.
//!
//! # Features
//!
//! - [`RecordingSubscriber`]: pushes its label onto a shared log when invoked
//! - [`CountingSubscriber`]: counts invocations
//! - [`FailingSubscriber`]: always fails with a fixed error message
//! - [`RecordingMiddleware`]: records its label, then delegates

use courier_core::{BoxError, DispatchError, Message, Middleware, Next, Subscriber};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

/// A shared invocation log, written to by recording fixtures.
pub type SharedLog = Arc<Mutex<Vec<String>>>;

// ============================================================================
// Recording Subscriber
// ============================================================================

/// A subscriber that appends its label to a shared log on every message.
///
/// Several recording subscribers sharing one log make invocation order
/// across subscribers observable.
///
/// # Example
///
/// ```rust,ignore
/// let log: SharedLog = Arc::new(Mutex::new(Vec::new()));
/// let descriptor = SubscriberDescriptor::callable(
///     RecordingSubscriber::new("mail", log.clone()),
/// );
///
/// // After dispatch:
/// assert_eq!(*log.lock().unwrap(), vec!["mail"]);
/// ```
pub struct RecordingSubscriber {
    label: String,
    log: SharedLog,
}

impl RecordingSubscriber {
    /// Create a recording subscriber writing to a shared log.
    pub fn new(label: impl Into<String>, log: SharedLog) -> Self {
        Self {
            label: label.into(),
            log,
        }
    }
}

impl Subscriber for RecordingSubscriber {
    fn on_message(&self, _message: &dyn Message) -> Result<(), BoxError> {
        self.log.lock().unwrap().push(self.label.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Subscriber
// ============================================================================

/// A subscriber that counts invocations.
///
/// Clones share the counter.
pub struct CountingSubscriber {
    count: Arc<AtomicUsize>,
}

impl CountingSubscriber {
    /// Create a new counting subscriber.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingSubscriber {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Subscriber for CountingSubscriber {
    fn on_message(&self, _message: &dyn Message) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Subscriber
// ============================================================================

/// The error a [`FailingSubscriber`] produces.
#[derive(Error, Debug, Clone)]
#[error("{reason}")]
pub struct SubscriberFailure {
    /// The reason the subscriber was configured to fail with.
    pub reason: String,
}

/// A subscriber that always fails.
///
/// Useful for verifying fail-fast notification and error propagation.
pub struct FailingSubscriber {
    reason: String,
}

impl FailingSubscriber {
    /// Create a failing subscriber with the given error message.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Subscriber for FailingSubscriber {
    fn on_message(&self, _message: &dyn Message) -> Result<(), BoxError> {
        Err(Box::new(SubscriberFailure {
            reason: self.reason.clone(),
        }))
    }
}

// ============================================================================
// Recording Middleware
// ============================================================================

/// A middleware that records its label on a shared log, then delegates.
///
/// Several recording middlewares sharing one log make chain order
/// observable.
pub struct RecordingMiddleware {
    label: String,
    log: SharedLog,
}

impl RecordingMiddleware {
    /// Create a recording middleware writing to a shared log.
    pub fn new(label: impl Into<String>, log: SharedLog) -> Self {
        Self {
            label: label.into(),
            log,
        }
    }
}

impl Middleware for RecordingMiddleware {
    fn handle(&self, message: Arc<dyn Message>, next: Next<'_>) -> Result<(), DispatchError> {
        self.log.lock().unwrap().push(self.label.clone());
        next.run(message)
    }
}
