#![allow(dead_code)]

use courier::testing::SharedLog;
use courier::{
    BoxError, CallableResolver, Message, MessageBus, Middleware, Next, NotFoundError,
    NotifySubscribers, SequentialHandling, Service, ServiceLocator, SubscriberCollection,
    SubscriberResolver,
};
use std::sync::{Arc, Mutex, OnceLock};

// ============================================================================
// Test Message Types
// ============================================================================

#[derive(Clone)]
pub struct OrderPlaced {
    pub order_id: u64,
}

impl Message for OrderPlaced {
    fn message_name(&self) -> Option<&'static str> {
        Some("order.placed")
    }
}

#[derive(Clone)]
pub struct InvoiceRaised;

impl Message for InvoiceRaised {
    fn message_name(&self) -> Option<&'static str> {
        Some("invoice.raised")
    }
}

#[derive(Clone)]
pub struct StockReserved;

impl Message for StockReserved {
    fn message_name(&self) -> Option<&'static str> {
        Some("stock.reserved")
    }
}

// A message that does not name itself.
#[derive(Clone)]
pub struct Unnamed;

impl Message for Unnamed {}

// ============================================================================
// Bus Assembly
// ============================================================================

/// The canonical chain: sequential-handling guard in front of subscriber
/// notification.
pub fn standard_bus(resolver: SubscriberResolver) -> MessageBus {
    MessageBus::builder()
        .middleware(SequentialHandling::new())
        .middleware(NotifySubscribers::new(resolver))
        .build()
}

/// A bus slot that subscribers can capture before the bus exists.
///
/// Re-entrant fixtures need a handle on the bus they are registered with;
/// the cell breaks the construction cycle.
pub type BusCell = Arc<OnceLock<MessageBus>>;

pub fn bus_cell() -> BusCell {
    Arc::new(OnceLock::new())
}

pub fn install(cell: &BusCell, bus: MessageBus) {
    assert!(cell.set(bus).is_ok(), "bus installed twice");
}

/// Delegating wrapper so a middleware can stay inspectable after the bus
/// takes ownership of the chain.
pub struct Shared<M>(pub Arc<M>);

impl<M: Middleware> Middleware for Shared<M> {
    fn handle(
        &self,
        message: Arc<dyn Message>,
        next: Next<'_>,
    ) -> Result<(), courier::DispatchError> {
        self.0.handle(message, next)
    }
}

// ============================================================================
// Re-entrant Fixtures
// ============================================================================

/// A subscriber that records its label, then publishes further messages on
/// the shared bus.
pub struct PublishingSubscriber {
    label: String,
    log: SharedLog,
    bus: BusCell,
    publishes: Vec<Arc<dyn Message>>,
}

impl PublishingSubscriber {
    pub fn new(
        label: impl Into<String>,
        log: SharedLog,
        bus: BusCell,
        publishes: Vec<Arc<dyn Message>>,
    ) -> Self {
        Self {
            label: label.into(),
            log,
            bus,
            publishes,
        }
    }
}

impl courier::Subscriber for PublishingSubscriber {
    fn on_message(&self, _message: &dyn Message) -> Result<(), BoxError> {
        self.log.lock().unwrap().push(self.label.clone());
        let bus = self.bus.get().expect("bus installed before dispatch");
        for message in &self.publishes {
            bus.handle_dyn(Arc::clone(message))
                .map_err(|e| Box::new(e) as BoxError)?;
        }
        Ok(())
    }
}

// ============================================================================
// Test Services
// ============================================================================

/// A service reached through named handler methods only.
pub struct MailService {
    log: SharedLog,
}

impl MailService {
    pub fn new(log: SharedLog) -> Self {
        Self { log }
    }

    fn send_confirmation(&self, _message: &dyn Message) -> Result<(), BoxError> {
        self.log.lock().unwrap().push("mail.send_confirmation".into());
        Ok(())
    }
}

impl Service for MailService {
    fn method(self: Arc<Self>, name: &str) -> Option<Arc<dyn courier::Subscriber>> {
        match name {
            "send_confirmation" => Some(Arc::new(move |message: &dyn Message| {
                self.send_confirmation(message)
            })),
            _ => None,
        }
    }
}

/// A service with a direct message entry point.
pub struct AuditService {
    log: SharedLog,
}

impl AuditService {
    pub fn new(log: SharedLog) -> Self {
        Self { log }
    }
}

impl Service for AuditService {
    fn as_subscriber(self: Arc<Self>) -> Option<Arc<dyn courier::Subscriber>> {
        Some(Arc::new(move |_: &dyn Message| -> Result<(), BoxError> {
            self.log.lock().unwrap().push("audit".into());
            Ok(())
        }))
    }
}

/// A locator that records every lookup before delegating.
pub struct CountingLocator<L> {
    inner: L,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl<L> CountingLocator<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lookups(&self) -> Arc<Mutex<Vec<String>>> {
        self.lookups.clone()
    }
}

impl<L: ServiceLocator> ServiceLocator for CountingLocator<L> {
    fn resolve(&self, id: &str) -> Result<Arc<dyn Service>, NotFoundError> {
        self.lookups.lock().unwrap().push(id.to_string());
        self.inner.resolve(id)
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn self_naming_resolver(
    collection: SubscriberCollection,
    callables: CallableResolver,
) -> SubscriberResolver {
    SubscriberResolver::new(Arc::new(courier::SelfNamingResolver), collection, callables)
}

pub fn shared_log() -> SharedLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &SharedLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
