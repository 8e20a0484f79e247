//! Message trait for dispatchable values.

use std::any::Any;

/// An opaque unit of information passed through the dispatch pipeline.
///
/// Courier never inspects or mutates a message; the only thing the core
/// requires is that a name resolver can derive a stable logical name from
/// it. Messages travel the chain as `Arc<dyn Message>`, so cloning along
/// the way and parking in the pending queue are cheap.
///
/// # Example
///
/// ```rust,ignore
/// struct OrderPlaced { order_id: u64 }
///
/// impl Message for OrderPlaced {}
/// ```
///
/// A message may additionally name itself for the self-naming resolver
/// strategy by overriding [`message_name`](Message::message_name):
///
/// ```rust,ignore
/// impl Message for OrderPlaced {
///     fn message_name(&self) -> Option<&'static str> {
///         Some("order.placed")
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "missing `Message` implementation",
    note = "Messages must be `Send + Sync + 'static`; an empty `impl Message for {Self} {{}}` is usually enough."
)]
pub trait Message: Any + Send + Sync {
    /// Fully-qualified name of the concrete message type.
    ///
    /// This is the input of the type-based naming strategy. The default is
    /// always correct; overriding it is not supported.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The logical name this message assigns itself, if any.
    ///
    /// The self-naming resolver strategy calls this and treats `None` as a
    /// configuration error. Implementations must return a constant per
    /// message type, never per-instance state: two instances of the same
    /// type resolving to different names would split their subscribers.
    fn message_name(&self) -> Option<&'static str> {
        None
    }
}

impl dyn Message {
    /// Returns `true` if the boxed message is of type `T`.
    pub fn is<T: Message>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcast the message to a concrete type.
    ///
    /// Subscribers registered for a single logical name typically know the
    /// concrete type behind it and use this to recover it.
    pub fn downcast_ref<T: Message>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}
