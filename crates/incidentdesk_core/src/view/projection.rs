//! Display projection over the incident collection.
//!
//! # Responsibility
//! - Derive the filtered, sorted sequence shown to the user.
//! - Keep the stored collection untouched and the derivation
//!   deterministic.
//!
//! # Invariants
//! - Sorting is stable: equal `reported_at` values preserve relative
//!   input order.
//! - The projection never mutates its input.

use crate::model::incident::{Incident, Severity};
use std::fmt::{Display, Formatter};

/// Severity filter for the display projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Whether an incident with `severity` passes this filter.
    pub fn matches(&self, severity: Severity) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == severity,
        }
    }
}

impl Display for SeverityFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(severity) => write!(f, "{severity}"),
        }
    }
}

impl std::str::FromStr for SeverityFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value
            .parse::<Severity>()
            .map(Self::Only)
            .map_err(|_| {
                format!("unsupported severity filter `{value}`; expected all|low|medium|high")
            })
    }
}

/// Display order over `reported_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Returns the opposite order (the sort toggle control).
    pub fn toggled(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Newest => f.write_str("newest"),
            Self::Oldest => f.write_str("oldest"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(format!(
                "unsupported sort order `{other}`; expected newest|oldest"
            )),
        }
    }
}

/// Derives the display sequence for one filter and sort configuration.
///
/// Pure and deterministic: identical inputs produce identical output and
/// the input collection is never mutated.
pub fn project(
    incidents: &[Incident],
    filter: SeverityFilter,
    order: SortOrder,
) -> Vec<Incident> {
    let mut view: Vec<Incident> = incidents
        .iter()
        .filter(|incident| filter.matches(incident.severity))
        .cloned()
        .collect();

    match order {
        SortOrder::Newest => view.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
        SortOrder::Oldest => view.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
    }

    view
}
