//! Logging middleware for message observation.

use courier_core::{DispatchError, Message, Middleware, Next};
use std::sync::Arc;

/// A middleware that logs messages for debugging/observation.
///
/// Emits `tracing` events when the `tracing` feature is enabled and is
/// inert otherwise. Place it ahead of the middlewares whose traffic it
/// should observe.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn handle(&self, message: Arc<dyn Message>, next: Next<'_>) -> Result<(), DispatchError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = message.type_name(), "handling message");

        let result = next.run(message);

        #[cfg(feature = "tracing")]
        if let Err(error) = &result {
            tracing::error!(%error, "message handling failed");
        }
        result
    }
}
