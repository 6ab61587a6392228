//! LifeOS core data models.
//!
//! This crate defines the plain records shared by the stores, the analytics
//! engine, and the presentation layer.

#![warn(missing_docs)]

// Core identities
mod id;

// Records
mod goal;
mod activity;

// Re-exports
pub use id::{GoalId, ActivityId};

pub use goal::{Goal, GoalMetric, GoalStatus};
pub use activity::{Activity, ActivityStatus, EffortLevel};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
