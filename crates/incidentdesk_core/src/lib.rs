//! Core domain logic for Incident Desk.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::incident::{DraftValidationError, Incident, IncidentDraft, IncidentId, Severity};
pub use repo::incident_repo::{seed_incidents, IncidentRepository, STORAGE_KEY};
pub use repo::kv_store::{KeyValueStore, RepoError, RepoResult, SqliteKeyValueStore};
pub use service::incident_service::IncidentService;
pub use service::reconcile::{next_incident_id, reconcile, SubmitOutcome};
pub use view::notice::Notice;
pub use view::projection::{project, SeverityFilter, SortOrder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
