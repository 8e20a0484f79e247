//! In-memory service locator.

use courier_core::{NotFoundError, Service, ServiceLocator};
use std::collections::HashMap;
use std::sync::Arc;

/// A `HashMap`-backed service locator.
///
/// Suitable for embedding applications that wire their services by hand
/// and for tests. Services are registered up front; `resolve` hands out
/// shared references, so every lookup of the same id yields the same
/// instance.
#[derive(Default, Clone)]
pub struct ServiceMap {
    services: HashMap<String, Arc<dyn Service>>,
}

impl ServiceMap {
    /// Create a new empty service map.
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    /// Register a service under an identifier.
    ///
    /// A later registration under the same identifier replaces the earlier
    /// one.
    pub fn insert(&mut self, id: impl Into<String>, service: Arc<dyn Service>) {
        self.services.insert(id.into(), service);
    }

    /// Register a service, chaining style.
    pub fn with(mut self, id: impl Into<String>, service: Arc<dyn Service>) -> Self {
        self.insert(id, service);
        self
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no services are registered.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceLocator for ServiceMap {
    fn resolve(&self, id: &str) -> Result<Arc<dyn Service>, NotFoundError> {
        self.services
            .get(id)
            .cloned()
            .ok_or_else(|| NotFoundError(id.to_string()))
    }
}
