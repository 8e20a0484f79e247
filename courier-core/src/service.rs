//! Service locator boundary.
//!
//! Courier does not instantiate handler services itself. Descriptors that
//! address a service by identifier are resolved through a
//! [`ServiceLocator`] supplied by the embedding application, and only
//! when a dispatch actually needs them, never at configuration time.

use crate::{error::NotFoundError, subscriber::Subscriber};
use std::sync::Arc;

/// A handler service materialized by a [`ServiceLocator`].
///
/// Rust has no runtime method reflection, so a located service hands out
/// its invokable entry points explicitly: [`as_subscriber`] for the
/// service addressed by bare identifier, [`method`] for the
/// identifier-plus-method descriptor form. Both default to `None`, which
/// the resolver reports as the matching unresolvable-subscriber error.
///
/// # Example
///
/// ```rust,ignore
/// impl Service for MailService {
///     fn method(self: Arc<Self>, name: &str) -> Option<Arc<dyn Subscriber>> {
///         match name {
///             "send_confirmation" => {
///                 Some(Arc::new(move |message: &dyn Message| {
///                     self.send_confirmation(message)
///                 }))
///             }
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// [`as_subscriber`]: Service::as_subscriber
/// [`method`]: Service::method
pub trait Service: Send + Sync + 'static {
    /// The service's direct message entry point, when it has one.
    fn as_subscriber(self: Arc<Self>) -> Option<Arc<dyn Subscriber>> {
        None
    }

    /// Bind the named handler method, when the service exposes it.
    fn method(self: Arc<Self>, name: &str) -> Option<Arc<dyn Subscriber>> {
        let _ = name;
        None
    }
}

/// External capability mapping an identifier to an instantiated service.
///
/// Called lazily, only for descriptor variants that address a service by
/// identifier; direct and legacy subscribers never touch the locator.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `ServiceLocator`",
    label = "missing `ServiceLocator` implementation",
    note = "Service locators implement `resolve(id)`, failing with `NotFoundError` for unknown identifiers."
)]
pub trait ServiceLocator: Send + Sync + 'static {
    /// Resolve an identifier to a service instance.
    fn resolve(&self, id: &str) -> Result<Arc<dyn Service>, NotFoundError>;
}
