//! Goal model - a user objective, optionally quantified by a metric.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::GoalId;
use crate::Time;

/// A goal the user is tracking.
///
/// Goals are created and edited through the goal store; the analytics engine
/// only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// The "qualitative why"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Goal status
    pub status: GoalStatus,

    /// Optional metric for quantifiable goals. Only goals carrying a metric
    /// participate in analytics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<GoalMetric>,

    /// Deadline. Absence disables deadline-based risk checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,

    /// When created. Anchors the "total days available" for pace computation.
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,
}

impl Goal {
    /// Create a new goal with the given title, stamped at `now`.
    pub fn new(title: impl Into<String>, now: Time) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            description: None,
            status: GoalStatus::NotStarted,
            metric: None,
            target_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Goal lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// No work logged yet
    NotStarted,
    /// Actively worked on
    InProgress,
    /// Flagged by the user as at risk
    AtRisk,
    /// Blocked on something external
    Blocked,
    /// Goal completed
    Completed,
}

/// The quantifiable current/target pair a goal tracks (e.g. weight, savings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalMetric {
    /// Metric name, e.g. "Weight", "Savings", "Pages Read"
    pub name: String,

    /// Unit, e.g. "kg", "USD", "pages"
    pub unit: String,

    /// Current value
    pub current: f64,

    /// Target value
    pub target: f64,
}
