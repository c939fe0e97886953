//! gRPC service implementation.
//!
//! This module contains the request-handling layer: it validates and
//! normalizes incoming messages, delegates to the injected [`TodoStore`],
//! and maps outcomes back into wire messages or gRPC status codes.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`TodoHandler`).
//!
//! [`TodoStore`]: crate::server::storage::TodoStore

pub mod handler;
