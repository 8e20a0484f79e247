//! Standard middlewares.
//!
//! - [`SequentialHandling`]: finish handling one message before starting
//!   the next
//! - [`NotifySubscribers`]: resolve and invoke the message's subscribers
//! - [`LoggingMiddleware`]: observe messages via `tracing`

pub mod logging;
pub mod notify;
pub mod sequential;

pub use logging::LoggingMiddleware;
pub use notify::NotifySubscribers;
pub use sequential::SequentialHandling;
