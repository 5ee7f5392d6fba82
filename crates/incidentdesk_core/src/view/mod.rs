//! Read-only display derivations and transient UI state.
//!
//! # Responsibility
//! - Project the stored collection into the sequence shown to the user.
//! - Model time-limited acknowledgments without owning timers.

pub mod notice;
pub mod projection;
