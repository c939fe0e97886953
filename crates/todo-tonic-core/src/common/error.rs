//! Error types for the todo service.
//!
//! This module defines the central `Error` enum, which captures all
//! reportable failure cases across the handler and storage layers. It
//! implements `From<Error>` for `tonic::Status` so failures propagate to
//! gRPC clients with appropriate status codes and messages.
//!
//! ## Error Cases
//! - `NotFound`: No live record carries the requested id.
//! - `Storage`: The underlying store could not complete the operation
//!   (connectivity, constraint violation, timeout).
//! - `InvalidRequest`: The client request was malformed.

use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the todo service.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// No record with the given id exists at the time of the lookup.
    #[error("Todo with id {id} not found")]
    NotFound { id: i32 },

    /// The underlying store failed to complete the operation.
    #[error("Storage error: {context}")]
    Storage { context: String },

    /// The client request was invalid.
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { id } => Status::not_found(format!("Todo with id {} not found", id)),
            Error::Storage { context } => Status::internal(format!("Storage error: {}", context)),
            Error::InvalidRequest { reason } => Status::invalid_argument(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn not_found_maps_to_not_found_status() {
        let status = Status::from(Error::NotFound { id: 42 });
        assert_eq!(status.code(), Code::NotFound);
        assert!(status.message().contains("42"));
    }

    #[test]
    fn storage_maps_to_internal_status() {
        let status = Status::from(Error::Storage {
            context: "connection refused".into(),
        });
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("connection refused"));
    }

    #[test]
    fn invalid_request_maps_to_invalid_argument_status() {
        let status = Status::from(Error::InvalidRequest {
            reason: "bad field".into(),
        });
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "bad field");
    }
}
