//! Descriptor storage.

use courier_core::{Notifiable, Subscriber};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The configuration-time representation of "how to obtain a subscriber".
///
/// A closed set of four forms. Service-addressed variants are resolved
/// through the configured service locator at dispatch time; the other two
/// never touch it.
pub enum SubscriberDescriptor {
    /// A ready-made subscriber, used as-is.
    Callable(Arc<dyn Subscriber>),
    /// A service addressed by identifier; the located service must accept
    /// messages directly.
    Service {
        /// Locator identifier of the service.
        id: String,
    },
    /// A service addressed by identifier plus a named handler method bound
    /// on it.
    ServiceMethod {
        /// Locator identifier of the service.
        id: String,
        /// Name of the handler method to bind.
        method: String,
    },
    /// A legacy object exposing `notify`.
    Notify(Arc<dyn Notifiable>),
}

impl SubscriberDescriptor {
    /// Descriptor for a ready-made subscriber.
    pub fn callable(subscriber: impl Subscriber) -> Self {
        Self::Callable(Arc::new(subscriber))
    }

    /// Descriptor for a service addressed by identifier.
    pub fn service(id: impl Into<String>) -> Self {
        Self::Service { id: id.into() }
    }

    /// Descriptor for a named handler method on a located service.
    pub fn service_method(id: impl Into<String>, method: impl Into<String>) -> Self {
        Self::ServiceMethod {
            id: id.into(),
            method: method.into(),
        }
    }

    /// Descriptor for a legacy `notify` object.
    pub fn notify(object: impl Notifiable) -> Self {
        Self::Notify(Arc::new(object))
    }
}

impl fmt::Debug for SubscriberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Callable"),
            Self::Service { id } => f.debug_struct("Service").field("id", id).finish(),
            Self::ServiceMethod { id, method } => f
                .debug_struct("ServiceMethod")
                .field("id", id)
                .field("method", method)
                .finish(),
            Self::Notify(_) => f.write_str("Notify"),
        }
    }
}

/// Per-name ordered lists of raw subscriber descriptors.
///
/// The collection stores descriptors exactly as registered and never
/// resolves them itself; constructing it instantiates no backing service.
/// Lookup for an unknown name yields an empty slice: nobody listening is
/// not an error.
#[derive(Debug, Default)]
pub struct SubscriberCollection {
    entries: HashMap<String, Vec<SubscriberDescriptor>>,
}

impl SubscriberCollection {
    /// Start building a collection.
    pub fn builder() -> SubscriberCollectionBuilder {
        SubscriberCollectionBuilder::new()
    }

    /// The descriptors registered under a name, in registration order.
    pub fn descriptors_for(&self, name: &str) -> &[SubscriberDescriptor] {
        self.entries.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of registered message names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any name has descriptors registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, Vec<SubscriberDescriptor>>> for SubscriberCollection {
    fn from(entries: HashMap<String, Vec<SubscriberDescriptor>>) -> Self {
        Self { entries }
    }
}

/// Builder for a [`SubscriberCollection`].
#[derive(Debug, Default)]
pub struct SubscriberCollectionBuilder {
    entries: HashMap<String, Vec<SubscriberDescriptor>>,
}

impl SubscriberCollectionBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Append a descriptor under a message name.
    ///
    /// Registration order per name is the notification order.
    pub fn subscribe(mut self, name: impl Into<String>, descriptor: SubscriberDescriptor) -> Self {
        self.entries.entry(name.into()).or_default().push(descriptor);
        self
    }

    /// Build the collection.
    pub fn build(self) -> SubscriberCollection {
        SubscriberCollection {
            entries: self.entries,
        }
    }
}
