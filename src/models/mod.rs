//! Runtime models shared across the service binaries.

pub mod config;
