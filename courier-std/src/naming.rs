//! Naming strategies.
//!
//! Exactly one strategy is active per bus configuration; strategies are
//! not mixed. Custom strategies implement [`NameResolver`] directly.

use courier_core::{ConfigurationError, Message, MessageName, NameResolver};
use std::borrow::Cow;

/// Names a message after its fully-qualified concrete type.
///
/// Deterministic and total: it requires no cooperation from the message,
/// so it never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeNameResolver;

impl NameResolver for TypeNameResolver {
    fn resolve_name(&self, message: &dyn Message) -> Result<MessageName, ConfigurationError> {
        Ok(Cow::Borrowed(message.type_name()))
    }
}

/// Asks the message to name itself.
///
/// Requires every dispatched message to override
/// [`Message::message_name`]; a message that does not is a
/// [`ConfigurationError`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SelfNamingResolver;

impl NameResolver for SelfNamingResolver {
    fn resolve_name(&self, message: &dyn Message) -> Result<MessageName, ConfigurationError> {
        message
            .message_name()
            .map(Cow::Borrowed)
            .ok_or(ConfigurationError::UnnamedMessage {
                type_name: message.type_name(),
            })
    }
}
