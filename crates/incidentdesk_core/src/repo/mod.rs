//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage-adapter seam the incident collection persists
//!   through.
//! - Isolate SQLite and serialization details from service orchestration.
//!
//! # Invariants
//! - Storage values are opaque strings at the adapter boundary.
//! - A missing or unusable persisted collection is recovered with seed
//!   data, never surfaced as an error.

pub mod incident_repo;
pub mod kv_store;
