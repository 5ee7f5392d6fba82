//! Transient user-facing acknowledgments.
//!
//! # Responsibility
//! - Carry short feedback messages with a fixed auto-dismiss deadline.
//!
//! # Invariants
//! - Expiry is evaluated against a caller-supplied instant; this type
//!   owns no timers and offers no cancellation beyond being dropped.

use chrono::{DateTime, Duration, Utc};

/// Lifetime of a transient acknowledgment before it auto-dismisses.
pub const NOTICE_LIFETIME_SECS: i64 = 5;

/// One time-limited acknowledgment (deletion or submission feedback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    expires_at: DateTime<Utc>,
}

impl Notice {
    /// Creates a notice that dismisses [`NOTICE_LIFETIME_SECS`] after
    /// `now`.
    pub fn new(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            expires_at: now + Duration::seconds(NOTICE_LIFETIME_SECS),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the notice should no longer be shown at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, NOTICE_LIFETIME_SECS};
    use chrono::{Duration, Utc};

    #[test]
    fn notice_is_visible_until_its_deadline() {
        let now = Utc::now();
        let notice = Notice::new("Successfully deleted incident \"x\"", now);

        assert_eq!(notice.message(), "Successfully deleted incident \"x\"");
        assert!(!notice.is_expired(now));
        assert!(!notice.is_expired(now + Duration::seconds(NOTICE_LIFETIME_SECS - 1)));
        assert!(notice.is_expired(now + Duration::seconds(NOTICE_LIFETIME_SECS)));
    }
}
