//! Error types for Courier.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Top-level error surfaced by `handle`
//! - [`ConfigurationError`] - A message lacks a capability the active
//!   configuration requires
//! - [`UnresolvableSubscriberError`] - A descriptor cannot be turned into an
//!   invokable subscriber
//! - [`NotFoundError`] - A service locator miss

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type surfaced by a dispatch.
///
/// Courier performs no retries and no suppression: the first error raised
/// anywhere in the chain propagates to the caller of `handle` unchanged.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The active configuration requires a capability the message lacks.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A subscriber descriptor could not be resolved into an invokable.
    #[error("unresolvable subscriber: {0}")]
    Unresolvable(#[from] UnresolvableSubscriberError),

    /// A subscriber failed while handling the message.
    ///
    /// The underlying error is passed through opaque and unwrapped; Courier
    /// does not reinterpret subscriber failures.
    #[error("subscriber failed")]
    Subscriber(#[source] BoxError),

    /// A middleware's own logic failed.
    #[error(transparent)]
    Middleware(BoxError),
}

/// Errors raised when a message lacks a required naming capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The self-naming strategy is active but the message does not name
    /// itself.
    #[error("message `{type_name}` does not provide a message name")]
    UnnamedMessage {
        /// Concrete type of the offending message.
        type_name: &'static str,
    },
}

/// Errors raised when a subscriber descriptor cannot be resolved.
///
/// These surface a configuration-time class of bug at the first dispatch
/// that needs the descriptor, never earlier.
#[derive(Error, Debug)]
pub enum UnresolvableSubscriberError {
    /// The service locator had no service under the descriptor's id.
    #[error(transparent)]
    ServiceNotFound(#[from] NotFoundError),

    /// The located service cannot receive messages directly.
    #[error("service `{id}` cannot receive messages directly")]
    NotInvokable {
        /// Identifier the service was located under.
        id: String,
    },

    /// The located service exposes no handler method under the given name.
    #[error("service `{id}` exposes no handler method `{method}`")]
    MethodNotFound {
        /// Identifier the service was located under.
        id: String,
        /// The missing method name.
        method: String,
    },

    /// A descriptor references a service but no locator is configured.
    #[error("descriptor references service `{id}` but no service locator is configured")]
    LocatorMissing {
        /// Identifier the descriptor referenced.
        id: String,
    },
}

/// Error returned by a [`ServiceLocator`] for an unknown identifier.
///
/// [`ServiceLocator`]: crate::ServiceLocator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no service registered under id `{0}`")]
pub struct NotFoundError(pub String);

// Convenience conversion for middlewares carrying their own error types.
impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Middleware(err)
    }
}
