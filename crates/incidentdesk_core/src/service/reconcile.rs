//! Create-or-update reconciliation over the incident collection.
//!
//! # Responsibility
//! - Decide create vs. update by case-insensitive title match.
//! - Assign collision-free ids to new incidents.
//!
//! # Invariants
//! - An update never touches `id` or `reported_at`.
//! - New incidents are inserted at the front of the collection.
//! - Input validation is the caller's precondition; reconciliation itself
//!   cannot fail.

use crate::model::incident::{Incident, IncidentDraft, IncidentId};
use chrono::{DateTime, Utc};
use log::debug;

/// Outcome signal of one reconciled submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: IncidentId },
    Updated { id: IncidentId },
}

impl SubmitOutcome {
    /// Id of the incident the submission landed on.
    pub fn id(&self) -> IncidentId {
        match self {
            Self::Created { id } | Self::Updated { id } => *id,
        }
    }
}

/// Reconciles one submitted draft into the collection.
///
/// # Contract
/// - A case-insensitive title match updates that incident's description,
///   severity, and `updated_at` (set to `now`); `id` and `reported_at`
///   stay untouched.
/// - No match creates a new incident at the front of the collection with
///   `reported_at` and `updated_at` both taken from the draft.
pub fn reconcile(
    incidents: &mut Vec<Incident>,
    draft: &IncidentDraft,
    now: DateTime<Utc>,
) -> SubmitOutcome {
    if let Some(existing) = incidents
        .iter_mut()
        .find(|incident| incident.title_matches(&draft.title))
    {
        existing.description = draft.description.clone();
        existing.severity = draft.severity;
        existing.updated_at = Some(now);
        debug!(
            "event=reconcile module=service status=updated id={}",
            existing.id
        );
        return SubmitOutcome::Updated { id: existing.id };
    }

    let id = next_incident_id(incidents);
    incidents.insert(
        0,
        Incident {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            severity: draft.severity,
            reported_at: draft.reported_at,
            updated_at: Some(draft.reported_at),
        },
    );
    debug!("event=reconcile module=service status=created id={id}");
    SubmitOutcome::Created { id }
}

/// Returns one past the highest id currently in the collection.
///
/// Monotonic over the live collection, so a fresh id can never collide
/// with an existing one.
pub fn next_incident_id(incidents: &[Incident]) -> IncidentId {
    incidents
        .iter()
        .map(|incident| incident.id)
        .max()
        .unwrap_or(0)
        + 1
}
