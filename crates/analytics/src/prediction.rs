//! Completion prediction from current velocity.

use chrono::{Duration, NaiveDate};
use lifeos_core::{Goal, Time};
use serde::{Deserialize, Serialize};

use crate::velocity::VelocityMetrics;

/// A projected completion with its confidence band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionProjection {
    /// Point estimate for the completion day
    pub completion_date: NaiveDate,

    /// Rounded day count until completion
    pub days_remaining: i64,

    /// Best-case completion day (15% faster than the point estimate)
    pub optimistic: NaiveDate,

    /// Worst-case completion day (15% slower than the point estimate)
    pub pessimistic: NaiveDate,
}

/// Derived completion prediction for a single goal.
///
/// `projection` is `None` when no prediction is possible (no metric, or
/// velocity is zero or negative) rather than a misleading far-off date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionMetrics {
    /// Projected completion, when one can be made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<CompletionProjection>,
}

/// `as_of` shifted forward by a fractional day count, as a calendar date.
/// `None` when the shift is not representable as a datetime.
fn project_date(as_of: Time, days: f64) -> Option<NaiveDate> {
    let seconds = days * 86_400.0;
    if !seconds.is_finite() {
        return None;
    }
    // The cast saturates for out-of-range values; try_seconds then rejects
    // anything beyond chrono's delta bounds.
    let delta = Duration::try_seconds(seconds as i64)?;
    as_of.checked_add_signed(delta).map(|d| d.date_naive())
}

/// Predict the completion date from the goal metric and current velocity.
///
/// The confidence band is a fixed ±15% spread around the point estimate; it
/// deliberately ignores the trend field.
pub fn predict_completion(goal: &Goal, velocity: &VelocityMetrics, as_of: Time) -> PredictionMetrics {
    let Some(metric) = &goal.metric else {
        return PredictionMetrics { projection: None };
    };
    if velocity.current <= 0.0 {
        return PredictionMetrics { projection: None };
    }

    let remaining_work = metric.target - metric.current;
    let days_to_complete = remaining_work / velocity.current;

    // A projection so distant that its dates fall outside the representable
    // range is no projection at all.
    let projection = match (
        project_date(as_of, days_to_complete),
        project_date(as_of, days_to_complete * 0.85),
        project_date(as_of, days_to_complete * 1.15),
    ) {
        (Some(completion_date), Some(optimistic), Some(pessimistic)) => Some(CompletionProjection {
            completion_date,
            days_remaining: days_to_complete.round() as i64,
            optimistic,
            pessimistic,
        }),
        _ => None,
    };

    PredictionMetrics { projection }
}
