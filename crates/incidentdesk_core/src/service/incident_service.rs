//! Incident store use-case service.
//!
//! # Responsibility
//! - Own the authoritative in-memory collection and its durable mirror.
//! - Apply reconciliation and deletion, writing through on every mutation.
//!
//! # Invariants
//! - Every mutation persists the full collection before returning.
//! - Callers only reach the collection through read-only views.

use crate::model::incident::{Incident, IncidentDraft, IncidentId};
use crate::repo::incident_repo::{seed_incidents, IncidentRepository};
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use crate::service::reconcile::{reconcile, SubmitOutcome};
use chrono::Utc;
use log::{debug, info};

/// Use-case service owning the incident collection.
///
/// Constructed explicitly at application start from a storage adapter and
/// passed to callers; there is no hidden global instance.
pub struct IncidentService<S: KeyValueStore> {
    repo: IncidentRepository<S>,
    incidents: Vec<Incident>,
}

impl<S: KeyValueStore> IncidentService<S> {
    /// Opens the service over a storage adapter.
    ///
    /// Loads the persisted collection; a missing or unusable payload
    /// yields the first-run seed data.
    pub fn open(store: S) -> RepoResult<Self> {
        let repo = IncidentRepository::new(store);
        let incidents = repo.load_or_seed()?;
        Ok(Self { repo, incidents })
    }

    /// Read-only view of the collection in storage order.
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Reconciles one submitted draft into the collection.
    ///
    /// # Contract
    /// - The draft must already pass [`IncidentDraft::validate`];
    ///   reconciliation performs no input validation of its own.
    /// - Persists the full collection before returning.
    pub fn submit(&mut self, draft: &IncidentDraft) -> RepoResult<SubmitOutcome> {
        let outcome = reconcile(&mut self.incidents, draft, Utc::now());
        self.repo.persist(&self.incidents)?;
        Ok(outcome)
    }

    /// Deletes one incident by id and returns the removed record.
    ///
    /// Deletion is idempotent: an absent id changes nothing, writes
    /// nothing, and returns `None`.
    pub fn delete(&mut self, id: IncidentId) -> RepoResult<Option<Incident>> {
        let Some(position) = self
            .incidents
            .iter()
            .position(|incident| incident.id == id)
        else {
            debug!("event=incident_delete module=service status=noop id={id}");
            return Ok(None);
        };

        let removed = self.incidents.remove(position);
        self.repo.persist(&self.incidents)?;
        info!("event=incident_delete module=service status=ok id={id}");
        Ok(Some(removed))
    }

    /// Restores the first-run seed collection and persists it.
    pub fn reset(&mut self) -> RepoResult<()> {
        self.incidents = seed_incidents();
        self.repo.persist(&self.incidents)?;
        info!("event=collection_reset module=service status=ok");
        Ok(())
    }
}
