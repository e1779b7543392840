//! AWS-oriented adapters and handlers for the object decrypt step.
//!
//! This crate owns runtime integration details (the Lambda handler, storage
//! adapters, runtime configuration and log setup). Transform, contracts and
//! key derivation come from `decrypt_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod telemetry;
