//! The message bus.

use courier_core::{DispatchError, Message, Middleware, Next};
use std::sync::Arc;

/// An ordered middleware chain with a dispatch entry point.
///
/// The chain is mutable at configuration time only: `append_middleware`
/// takes `&mut self`, so once the bus is shared (typically behind an
/// `Arc`), dispatch-time mutation is unrepresentable. There is no
/// deduplication; the same middleware appended twice runs twice, in the
/// positions appended.
///
/// # Example
///
/// ```rust,ignore
/// let bus = MessageBus::builder()
///     .middleware(SequentialHandling::new())
///     .middleware(NotifySubscribers::new(resolver))
///     .build();
///
/// bus.handle(OrderPlaced { order_id: 17 })?;
/// ```
#[derive(Default)]
pub struct MessageBus {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MessageBus {
    /// Create a bus with an empty chain.
    ///
    /// Dispatching on an empty chain is a no-op.
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Start building a bus.
    pub fn builder() -> MessageBusBuilder {
        MessageBusBuilder::new()
    }

    /// Append a middleware to the end of the chain.
    ///
    /// Configuration-time only; order-sensitive.
    pub fn append_middleware(&mut self, middleware: impl Middleware) {
        self.middlewares.push(Arc::new(middleware));
    }

    /// Dispatch a message through the chain.
    pub fn handle<M: Message>(&self, message: M) -> Result<(), DispatchError> {
        self.handle_dyn(Arc::new(message))
    }

    /// Dispatch an already type-erased message through the chain.
    pub fn handle_dyn(&self, message: Arc<dyn Message>) -> Result<(), DispatchError> {
        Next::new(&self.middlewares).run(message)
    }
}

/// Builder for a [`MessageBus`].
#[derive(Default)]
pub struct MessageBusBuilder {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MessageBusBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Append a middleware.
    pub fn middleware(mut self, middleware: impl Middleware) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// Build the bus.
    pub fn build(self) -> MessageBus {
        MessageBus {
            middlewares: self.middlewares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MessageBus;
    use crate::testing::RecordingMiddleware;
    use courier_core::Message;
    use std::sync::{Arc, Mutex};

    struct Ping;
    impl Message for Ping {}

    #[test]
    fn test_empty_chain_is_a_noop() {
        let bus = MessageBus::new();
        assert!(bus.handle(Ping).is_ok());
    }

    #[test]
    fn test_middlewares_run_in_append_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = MessageBus::new();
        bus.append_middleware(RecordingMiddleware::new("outer", log.clone()));
        bus.append_middleware(RecordingMiddleware::new("inner", log.clone()));

        bus.handle(Ping).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_same_middleware_appended_twice_runs_twice() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let bus = MessageBus::builder()
            .middleware(RecordingMiddleware::new("again", log.clone()))
            .middleware(RecordingMiddleware::new("again", log.clone()))
            .build();

        bus.handle(Ping).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["again", "again"]);
    }
}
