//! Activity model - a logged unit of work, optionally linked to a goal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::{ActivityId, GoalId};

/// A logged unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier
    pub id: ActivityId,

    /// Activity name
    pub name: String,

    /// Calendar day the work happened on
    pub date: NaiveDate,

    /// Completion status
    pub status: ActivityStatus,

    /// Back-reference to a goal. Never an ownership link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,

    /// Signed delta applied toward the goal's metric. Negative values support
    /// decrease-oriented goals (e.g. weight loss).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_completed: Option<f64>,

    /// Reported intensity; scales the activity's contribution to velocity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_level: Option<EffortLevel>,
}

impl Activity {
    /// An activity counts toward `goal_id`'s velocity only if it is complete,
    /// linked to that goal, and carries a nonzero work delta.
    pub fn counts_toward(&self, goal_id: GoalId) -> bool {
        self.goal_id == Some(goal_id)
            && self.status == ActivityStatus::Complete
            && self.work_completed.is_some_and(|w| w != 0.0)
    }
}

/// Activity completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Scheduled but not yet done
    Planned,
    /// Fully done
    Complete,
    /// Partially done
    Partial,
    /// Cancelled by the user
    Cancel,
    /// Scheduled and never done
    Missed,
}

/// Reported effort for an activity, ordered from lightest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffortLevel {
    /// Light effort
    Low,
    /// Typical effort
    Medium,
    /// Hard effort
    High,
    /// Maximal effort
    Intense,
}

impl EffortLevel {
    /// Multiplier applied to `work_completed` when computing velocity.
    pub fn multiplier(self) -> f64 {
        match self {
            EffortLevel::Low => 0.8,
            EffortLevel::Medium => 1.0,
            EffortLevel::High => 1.2,
            EffortLevel::Intense => 1.5,
        }
    }
}
