//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate reconciliation, deletion, and persistence into
//!   caller-facing APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod incident_service;
pub mod reconcile;
