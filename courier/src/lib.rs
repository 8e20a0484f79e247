//! # courier - In-Process Message Dispatch Pipeline
//!
//! `courier` routes opaque messages through an ordered middleware chain to
//! name-keyed subscribers. Producers of events stay decoupled from
//! consumers: a dispatch derives the message's logical name, resolves the
//! subscribers registered under it (lazily, without instantiating services
//! nobody asked for) and invokes them in registration order.
//!
//! Messages published while another message is being handled are queued,
//! not recursed into: the sequential-handling guard finishes the current
//! message (all middlewares, all subscribers) before the next one starts.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::{
//!     CallableResolver, MessageBus, NotifySubscribers, SelfNamingResolver,
//!     SequentialHandling, SubscriberCollection, SubscriberDescriptor,
//!     SubscriberResolver,
//! };
//!
//! let collection = SubscriberCollection::builder()
//!     .subscribe("order.placed", SubscriberDescriptor::service_method("mail", "send_confirmation"))
//!     .subscribe("order.placed", SubscriberDescriptor::callable(log_order))
//!     .build();
//!
//! let resolver = SubscriberResolver::new(
//!     Arc::new(SelfNamingResolver),
//!     collection,
//!     CallableResolver::with_locator(locator),
//! );
//!
//! let bus = MessageBus::builder()
//!     .middleware(SequentialHandling::new())
//!     .middleware(NotifySubscribers::new(resolver))
//!     .build();
//!
//! bus.handle(OrderPlaced { order_id: 17 })?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use courier_core::{
    // Error types
    BoxError,
    ConfigurationError,
    DispatchError,
    // Message
    Message,
    MessageName,
    // Chain
    Middleware,
    // Naming
    NameResolver,
    Next,
    NotFoundError,
    // Subscribers
    Notifiable,
    // Service boundary
    Service,
    ServiceLocator,
    Subscriber,
    UnresolvableSubscriberError,
};

pub use courier_std::{
    bus::{MessageBus, MessageBusBuilder},
    locator::ServiceMap,
    middlewares::{LoggingMiddleware, NotifySubscribers, SequentialHandling},
    naming::{SelfNamingResolver, TypeNameResolver},
    subscribers::{
        CallableResolver, SubscriberCollection, SubscriberCollectionBuilder, SubscriberDescriptor,
        SubscriberResolver,
    },
};

// Test fixtures
pub use courier_std::testing;
