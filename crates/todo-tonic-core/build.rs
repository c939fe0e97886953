//! Builds the gRPC client and server code for the `todo.proto` definition
//! using `tonic-prost-build`.
//!
//! The generated bindings land in the crate's `OUT_DIR` and are pulled in via
//! `tonic::include_proto!("todo")`. A serialized file descriptor set is also
//! written so the server can register gRPC reflection.

use std::env;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("todo_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(config, &["proto/todo.proto"], &["proto"])
        .unwrap();
}
