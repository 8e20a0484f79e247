//! # courier-core
//!
//! Core traits for the Courier message dispatch pipeline.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! middlewares and extensions that don't need the full `courier-std`
//! implementation.
//!
//! # Pipeline Anatomy
//!
//! A dispatch passes an opaque [`Message`] through three stages:
//!
//! ## Stage 1: Chain ([`Middleware`])
//!
//! An ordered chain of interceptors, each handed a [`Next`] continuation
//! for the remainder. A middleware may act before delegating, after
//! delegating, or short-circuit by not delegating at all. The chain is
//! mutable at configuration time only; dispatch never changes it.
//!
//! ## Stage 2: Resolution ([`NameResolver`], [`ServiceLocator`])
//!
//! The message's logical name is derived by the configured [`NameResolver`]
//! strategy, and the raw subscriber descriptors registered under that name
//! are resolved into invokables. Resolution is lazy: services are located
//! through the embedding application's [`ServiceLocator`] only at first use.
//!
//! ## Stage 3: Terminal ([`Subscriber`])
//!
//! Resolved subscribers receive the message in registration order.
//! Subscriber errors are opaque to Courier: they fail-fast the rest of the
//! list and propagate to the caller unchanged.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Top-level error surfaced by a dispatch
//! - [`ConfigurationError`] - Missing naming capability
//! - [`UnresolvableSubscriberError`] - Descriptor resolution failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod message;
mod middleware;
mod name;
mod service;
mod subscriber;

// Re-exports
pub use error::{
    BoxError, ConfigurationError, DispatchError, NotFoundError, UnresolvableSubscriberError,
};
pub use message::Message;
pub use middleware::{Middleware, Next};
pub use name::{MessageName, NameResolver};
pub use service::{Service, ServiceLocator};
pub use subscriber::{Notifiable, Subscriber};
