//! Message naming strategy.

use crate::{error::ConfigurationError, message::Message};
use std::borrow::Cow;

/// The stable logical name of a message, used as the subscriber lookup key.
///
/// Both stock strategies yield `'static` strings; custom strategies may
/// compute owned names, hence the `Cow`.
pub type MessageName = Cow<'static, str>;

/// Strategy for deriving a logical name from a message.
///
/// Exactly one strategy is active per bus configuration. Two messages that
/// should share subscribers must resolve to the same name; two logically
/// distinct messages must not collide. Resolution must be pure: the same
/// message always yields the same name.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `NameResolver`",
    label = "missing `NameResolver` implementation",
    note = "Name resolvers implement the single method `resolve_name`."
)]
pub trait NameResolver: Send + Sync + 'static {
    /// Derive the logical name of a message.
    fn resolve_name(&self, message: &dyn Message) -> Result<MessageName, ConfigurationError>;
}
