//! Generated gRPC bindings for the `todo` protobuf package.
//!
//! The message and service types here are produced by `tonic-prost-build`
//! from `proto/todo.proto`; see `build.rs`. Treat them as a fixed external
//! contract - field numbers and the empty-string update sentinel are shared
//! with non-Rust clients.

tonic::include_proto!("todo");

/// Serialized file descriptor set for the `todo` package, used to register
/// gRPC server reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("todo_descriptor");
