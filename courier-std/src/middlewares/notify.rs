//! Subscriber notification middleware.

use crate::subscribers::SubscriberResolver;
use courier_core::{DispatchError, Message, Middleware, Next};
use std::sync::Arc;

/// Resolves the message's subscribers and invokes each in order.
///
/// Fail-fast: the first subscriber error skips the remaining subscribers
/// for this message and surfaces up through the chain. `next` is invoked
/// only when every subscriber completed, so later middlewares (domain
/// event storage, for instance) still get their turn; configured last, the
/// delegation is a no-op.
pub struct NotifySubscribers {
    resolver: SubscriberResolver,
}

impl NotifySubscribers {
    /// Create the middleware around a subscriber resolver.
    pub fn new(resolver: SubscriberResolver) -> Self {
        Self { resolver }
    }
}

impl Middleware for NotifySubscribers {
    fn handle(&self, message: Arc<dyn Message>, next: Next<'_>) -> Result<(), DispatchError> {
        let subscribers = self.resolver.resolve_subscribers(message.as_ref())?;
        for subscriber in &subscribers {
            subscriber
                .on_message(message.as_ref())
                .map_err(DispatchError::Subscriber)?;
        }
        next.run(message)
    }
}

#[cfg(test)]
mod tests {
    use super::NotifySubscribers;
    use crate::naming::TypeNameResolver;
    use crate::subscribers::{CallableResolver, SubscriberCollection, SubscriberResolver};
    use crate::testing::CountingSubscriber;
    use courier_core::{Message, Middleware, Next};
    use std::sync::Arc;

    struct Unheard;
    impl Message for Unheard {}

    #[test]
    fn test_no_subscribers_is_not_an_error() {
        let resolver = SubscriberResolver::new(
            Arc::new(TypeNameResolver),
            SubscriberCollection::builder().build(),
            CallableResolver::new(),
        );
        let middleware = NotifySubscribers::new(resolver);

        assert!(
            middleware
                .handle(Arc::new(Unheard), Next::new(&[]))
                .is_ok()
        );
    }

    #[test]
    fn test_subscribers_run_before_delegation() {
        let counter = CountingSubscriber::new();
        let resolver = SubscriberResolver::new(
            Arc::new(TypeNameResolver),
            SubscriberCollection::builder()
                .subscribe(
                    std::any::type_name::<Unheard>(),
                    crate::subscribers::SubscriberDescriptor::callable(counter.clone()),
                )
                .build(),
            CallableResolver::new(),
        );
        let middleware = NotifySubscribers::new(resolver);

        middleware
            .handle(Arc::new(Unheard), Next::new(&[]))
            .unwrap();
        assert_eq!(counter.count(), 1);
    }
}
