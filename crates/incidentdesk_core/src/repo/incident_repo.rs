//! Incident collection repository over the key-value storage adapter.
//!
//! # Responsibility
//! - Serialize the full collection to its storage key and back.
//! - Supply first-run seed data when nothing usable is persisted.
//!
//! # Invariants
//! - Writes replace the whole collection; there is no partial write.
//! - A missing key and an unparseable payload are both recovered with the
//!   seed collection, never surfaced as an error.

use crate::model::incident::{Incident, Severity};
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use chrono::{DateTime, Utc};
use log::{info, warn};

/// Storage key holding the JSON-serialized incident array.
pub const STORAGE_KEY: &str = "ai_safety_incidents";

/// Repository binding the incident collection to one storage adapter.
pub struct IncidentRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> IncidentRepository<S> {
    /// Creates a repository using the provided storage adapter.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the persisted collection, falling back to seed data.
    ///
    /// # Contract
    /// - A missing key yields the seed collection (first-run default).
    /// - An unparseable payload is treated the same as a missing key and
    ///   logged as a warning; stored data is left untouched until the
    ///   next write-through.
    pub fn load_or_seed(&self) -> RepoResult<Vec<Incident>> {
        let Some(payload) = self.store.get(STORAGE_KEY)? else {
            info!("event=collection_load module=repo status=seed reason=missing");
            return Ok(seed_incidents());
        };

        match serde_json::from_str::<Vec<Incident>>(&payload) {
            Ok(incidents) => {
                info!(
                    "event=collection_load module=repo status=ok count={}",
                    incidents.len()
                );
                Ok(incidents)
            }
            Err(err) => {
                warn!("event=collection_load module=repo status=seed reason=unparseable error={err}");
                Ok(seed_incidents())
            }
        }
    }

    /// Serializes and writes the full collection.
    ///
    /// Called on every mutation; write-through, not write-behind.
    pub fn persist(&self, incidents: &[Incident]) -> RepoResult<()> {
        let payload = serde_json::to_string(incidents)?;
        self.store.set(STORAGE_KEY, &payload)?;
        info!(
            "event=collection_persist module=repo status=ok count={}",
            incidents.len()
        );
        Ok(())
    }
}

/// Returns the fixed first-run example incidents.
pub fn seed_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: 1,
            title: "Biased Recommendation Algorithm".to_string(),
            description: "Algorithm consistently favored certain demographics...".to_string(),
            severity: Severity::Medium,
            reported_at: seed_timestamp("2025-03-15T07:30:00Z"),
            updated_at: Some(seed_timestamp("2025-05-04T05:22:00Z")),
        },
        Incident {
            id: 2,
            title: "LLM Hallucination in Critical Info".to_string(),
            description: "LLM provided incorrect safety procedure information...".to_string(),
            severity: Severity::High,
            reported_at: seed_timestamp("2025-04-01T14:30:00Z"),
            updated_at: Some(seed_timestamp("2025-04-01T14:30:00Z")),
        },
        Incident {
            id: 3,
            title: "Minor Data Leak via Chatbot".to_string(),
            description: "Chatbot inadvertently exposed non-sensitive user metadata...".to_string(),
            severity: Severity::Low,
            reported_at: seed_timestamp("2025-03-20T09:15:00Z"),
            updated_at: Some(seed_timestamp("2025-03-20T09:15:00Z")),
        },
    ]
}

fn seed_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid seed timestamp")
        .with_timezone(&Utc)
}
