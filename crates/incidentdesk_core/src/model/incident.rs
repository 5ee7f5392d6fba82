//! Incident domain model.
//!
//! # Responsibility
//! - Define the canonical incident record and its submission payload.
//! - Provide the case-insensitive title comparison used by reconciliation.
//!
//! # Invariants
//! - `id` is stable for the lifetime of an incident and never renumbered.
//! - `reported_at` is set once at creation and never changed by updates.
//! - `updated_at`, when present, is never earlier than `reported_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an incident within one collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type IncidentId = i64;

/// Categorical risk level. Carries no ordering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "unsupported severity `{other}`; expected low|medium|high"
            )),
        }
    }
}

/// Canonical record for one tracked incident.
///
/// The field names and severity labels are the persisted wire contract;
/// see [`crate::repo::incident_repo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// Stable id, assigned at creation, immutable thereafter.
    pub id: IncidentId,
    /// Case-insensitive natural key for reconciliation. Uniqueness is a
    /// behavioral invariant of the reconciliation path, not a type-level
    /// constraint.
    pub title: String,
    /// Narrative of what happened.
    pub description: String,
    pub severity: Severity,
    /// First report time; preserved verbatim across updates.
    pub reported_at: DateTime<Utc>,
    /// Refreshed on every reconciled update. Optional on the wire because
    /// older persisted payloads may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Incident {
    /// Whether `title` names this incident, compared case-insensitively.
    ///
    /// Every reconciliation lookup must go through this helper so that
    /// title identity is normalized in exactly one place.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// Submission payload for one report.
///
/// `reported_at` is only meaningful when the submission creates a new
/// incident; reconciled updates keep the existing report time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
}

impl IncidentDraft {
    /// Checks the field-level submission gate.
    ///
    /// # Contract
    /// - Title and description must contain non-whitespace content.
    /// - Callers must reject invalid drafts before invoking reconciliation.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.trim().is_empty() {
            return Err(DraftValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Field-level validation error for submission payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    EmptyTitle,
    EmptyDescription,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::EmptyDescription => write!(f, "description is required"),
        }
    }
}

impl Error for DraftValidationError {}
