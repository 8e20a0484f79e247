//! Subscriber resolution.
//!
//! Subscribers are registered as raw *descriptors* keyed by message name
//! and only turned into invokables when a dispatch needs them. The pieces:
//!
//! - [`SubscriberDescriptor`]: the configuration-time representation of
//!   "how to obtain a subscriber"
//! - [`SubscriberCollection`]: name → ordered descriptors, stored raw
//! - [`CallableResolver`]: descriptor → invokable, on demand
//! - [`SubscriberResolver`]: the composition answering "which invokables
//!   apply to this message"

pub mod collection;
pub mod resolver;

pub use collection::{SubscriberCollection, SubscriberCollectionBuilder, SubscriberDescriptor};
pub use resolver::{CallableResolver, SubscriberResolver};
