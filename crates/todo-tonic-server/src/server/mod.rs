//! Server internals: configuration, storage, telemetry, and the gRPC service.

pub mod config;
pub mod service;
pub mod storage;
pub mod telemetry;
