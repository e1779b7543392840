//! Domain primitives for the object decrypt step.
//!
//! This crate owns the byte transform, the event and response contracts,
//! derived storage keys, and the error taxonomy. It excludes AWS SDK and
//! Lambda runtime concerns, which live in `decrypt_lambda`.

pub mod contract;
pub mod error;
pub mod storage_keys;
pub mod transform;
