//! # courier-std
//!
//! Standard implementations for the Courier message dispatch pipeline.
//!
//! This crate provides:
//! - **The bus**: [`bus::MessageBus`] and its builder
//! - **Naming strategies**: [`naming::TypeNameResolver`], [`naming::SelfNamingResolver`]
//! - **Subscriber resolution**: [`subscribers::SubscriberCollection`],
//!   [`subscribers::CallableResolver`], [`subscribers::SubscriberResolver`]
//! - **Standard middlewares**: sequential-handling guard, subscriber
//!   notification, logging
//! - **An in-memory service locator**: [`locator::ServiceMap`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use courier_core;

// Modules
pub mod bus;
pub mod locator;
pub mod middlewares;
pub mod naming;
pub mod subscribers;
pub mod testing;
