//! Descriptor and subscriber resolution.

use crate::subscribers::collection::{SubscriberCollection, SubscriberDescriptor};
use courier_core::{
    BoxError, DispatchError, Message, NameResolver, Notifiable, Service, ServiceLocator,
    Subscriber, UnresolvableSubscriberError,
};
use std::sync::Arc;

/// Converts a raw [`SubscriberDescriptor`] into an invokable subscriber.
///
/// Resolution happens fresh on every dispatch that needs the descriptor.
/// Nothing is cached: a locator that returns a different instance on a
/// later call (non-singleton services) stays correct. The locator is
/// touched only by the two service-addressed variants.
#[derive(Default)]
pub struct CallableResolver {
    locator: Option<Arc<dyn ServiceLocator>>,
}

impl CallableResolver {
    /// A resolver without a service locator.
    ///
    /// Direct and legacy descriptors still resolve; service-addressed
    /// descriptors fail with
    /// [`UnresolvableSubscriberError::LocatorMissing`].
    pub fn new() -> Self {
        Self { locator: None }
    }

    /// A resolver backed by a service locator.
    pub fn with_locator(locator: Arc<dyn ServiceLocator>) -> Self {
        Self {
            locator: Some(locator),
        }
    }

    /// Resolve a descriptor into an invokable subscriber.
    pub fn resolve(
        &self,
        descriptor: &SubscriberDescriptor,
    ) -> Result<Arc<dyn Subscriber>, UnresolvableSubscriberError> {
        match descriptor {
            SubscriberDescriptor::Callable(subscriber) => Ok(Arc::clone(subscriber)),
            SubscriberDescriptor::Service { id } => self
                .locate(id)?
                .as_subscriber()
                .ok_or_else(|| UnresolvableSubscriberError::NotInvokable { id: id.clone() }),
            SubscriberDescriptor::ServiceMethod { id, method } => self
                .locate(id)?
                .method(method)
                .ok_or_else(|| UnresolvableSubscriberError::MethodNotFound {
                    id: id.clone(),
                    method: method.clone(),
                }),
            SubscriberDescriptor::Notify(object) => {
                Ok(Arc::new(NotifyAdapter(Arc::clone(object))))
            }
        }
    }

    fn locate(&self, id: &str) -> Result<Arc<dyn Service>, UnresolvableSubscriberError> {
        let locator = self
            .locator
            .as_ref()
            .ok_or_else(|| UnresolvableSubscriberError::LocatorMissing { id: id.to_string() })?;
        Ok(locator.resolve(id)?)
    }
}

// Wraps a legacy `notify` object as a subscriber.
struct NotifyAdapter(Arc<dyn Notifiable>);

impl Subscriber for NotifyAdapter {
    fn on_message(&self, message: &dyn Message) -> Result<(), BoxError> {
        self.0.notify(message)
    }
}

/// Answers "which invokable subscribers apply to this message".
///
/// Composes the configured naming strategy, the descriptor collection, and
/// the callable resolver. The returned sequence preserves registration
/// order, since later subscribers may depend on side effects of earlier
/// ones.
pub struct SubscriberResolver {
    names: Arc<dyn NameResolver>,
    collection: SubscriberCollection,
    callables: CallableResolver,
}

impl SubscriberResolver {
    /// Compose a resolver from its three parts.
    pub fn new(
        names: Arc<dyn NameResolver>,
        collection: SubscriberCollection,
        callables: CallableResolver,
    ) -> Self {
        Self {
            names,
            collection,
            callables,
        }
    }

    /// Resolve the ordered subscribers for a message.
    ///
    /// An empty result means nobody is listening and is not an error.
    pub fn resolve_subscribers(
        &self,
        message: &dyn Message,
    ) -> Result<Vec<Arc<dyn Subscriber>>, DispatchError> {
        let name = self.names.resolve_name(message)?;
        self.collection
            .descriptors_for(&name)
            .iter()
            .map(|descriptor| {
                self.callables
                    .resolve(descriptor)
                    .map_err(DispatchError::from)
            })
            .collect()
    }
}
