//! Domain model for incident records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Validate submission payloads before they reach reconciliation.
//!
//! # Invariants
//! - Every incident is identified by a stable `IncidentId`.
//! - Deletion is permanent removal from the collection; there are no
//!   tombstones and no undo.

pub mod incident;
