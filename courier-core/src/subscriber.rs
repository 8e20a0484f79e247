//! # Terminal Layer (Subscriber)
//!
//! Subscribers are the endpoints of the dispatch pipeline: units of
//! behavior that receive a message and produce no value, only side effects
//! or an error.
//!
//! A resolved subscriber is held as `Arc<dyn Subscriber>`, the invokable
//! form a descriptor resolves into at dispatch time. Errors returned here
//! are opaque to Courier: the pipeline fail-fasts the remaining
//! subscribers for the current message and propagates the error unchanged.

use crate::{error::BoxError, message::Message};

/// The terminal endpoint of the dispatch pipeline.
///
/// Subscribers for one message run in registration order; the first error
/// skips the rest and surfaces to the caller of `handle`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Subscriber`",
    label = "missing `Subscriber` implementation",
    note = "Subscribers implement `on_message`; closures of type `Fn(&dyn Message) -> Result<(), BoxError>` work directly."
)]
pub trait Subscriber: Send + Sync + 'static {
    /// Receive a message this subscriber is registered for.
    fn on_message(&self, message: &dyn Message) -> Result<(), BoxError>;
}

// Blanket impl for closures.
impl<F> Subscriber for F
where
    F: Fn(&dyn Message) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn on_message(&self, message: &dyn Message) -> Result<(), BoxError> {
        (self)(message)
    }
}

/// The legacy subscriber capability: an object exposing `notify`.
///
/// Pre-existing subscriber objects that were written against a `notify`
/// entry point are registered via the legacy descriptor variant and wrapped
/// into a [`Subscriber`] at resolution time.
pub trait Notifiable: Send + Sync + 'static {
    /// Receive a message through the legacy entry point.
    fn notify(&self, message: &dyn Message) -> Result<(), BoxError>;
}
