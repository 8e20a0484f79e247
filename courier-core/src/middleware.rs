//! # Chain Layer (Middleware)
//!
//! The ordered interception chain every message travels before it reaches
//! its subscribers.
//!
//! A middleware receives the message together with a [`Next`] continuation
//! for the remainder of the chain. It may act before delegating, after
//! delegating, or not delegate at all: dropping `next` without calling
//! [`Next::run`] terminates the chain early and is an intentional
//! short-circuit, not an error.
//!
//! # Design
//!
//! - **Ordered**: middlewares run in configured append order; the same
//!   middleware appended twice runs twice.
//! - **Re-entrant**: a middleware (or a subscriber downstream of one) may
//!   call back into the bus while a dispatch is in flight; the
//!   sequential-handling guard turns such calls into queued work instead of
//!   nested traversals.
//! - **Iterative**: [`Next`] is a slice over the remaining links, so call
//!   depth is bounded by chain length and no per-link closure is allocated.

use crate::{error::DispatchError, message::Message};
use std::sync::Arc;

/// A chain link that may act before and after delegating to the rest of
/// the chain.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Middleware`",
    label = "missing `Middleware` implementation",
    note = "Middlewares implement `handle(message, next)` and call `next.run(message)` to continue the chain."
)]
pub trait Middleware: Send + Sync + 'static {
    /// Handle a message, delegating to `next` to continue the chain.
    ///
    /// Not invoking `next` short-circuits the remainder of the chain; this
    /// must not be treated as an error.
    fn handle(&self, message: Arc<dyn Message>, next: Next<'_>) -> Result<(), DispatchError>;
}

// Blanket impl for closures.
impl<F> Middleware for F
where
    F: Fn(Arc<dyn Message>, Next<'_>) -> Result<(), DispatchError> + Send + Sync + 'static,
{
    fn handle(&self, message: Arc<dyn Message>, next: Next<'_>) -> Result<(), DispatchError> {
        (self)(message, next)
    }
}

/// The continuation for the remainder of a middleware chain.
///
/// Calling [`run`](Next::run) executes the next middleware with a
/// continuation for the links after it; an exhausted continuation is a
/// no-op. `Next` is `Copy`, so a middleware that owns the tail of the
/// chain (such as the sequential-handling guard) can run several messages
/// through it.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    middlewares: &'a [Arc<dyn Middleware>],
}

impl<'a> Next<'a> {
    /// Create a continuation over an ordered slice of middlewares.
    pub fn new(middlewares: &'a [Arc<dyn Middleware>]) -> Self {
        Self { middlewares }
    }

    /// Delegate the message to the remainder of the chain.
    pub fn run(self, message: Arc<dyn Message>) -> Result<(), DispatchError> {
        match self.middlewares.split_first() {
            Some((head, tail)) => head.handle(message, Next { middlewares: tail }),
            None => Ok(()),
        }
    }

    /// Number of links remaining in the chain.
    pub fn remaining(&self) -> usize {
        self.middlewares.len()
    }
}
