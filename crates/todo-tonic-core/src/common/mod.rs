//! Shared protocol and domain types for the todo service.
//!
//! ## Structure
//!
//! - [`error`] - the unified [`Error`] enum and its `tonic::Status` mapping.
//! - [`proto`] - generated gRPC bindings for the `todo` protobuf package.
//! - [`types`] - domain types shared between the handler and storage layers.

pub mod error;
pub mod proto;
pub mod types;

pub use error::{Error, Result};
