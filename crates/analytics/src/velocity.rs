//! Velocity calculation - pace of progress toward a goal's metric.

use chrono::{Duration, NaiveDate, NaiveTime};
use lifeos_core::{Activity, EffortLevel, Goal, Time};
use serde::{Deserialize, Serialize};

/// Multiplier used when an activity carries no effort level.
pub const EFFORT_DEFAULT_MULTIPLIER: f64 = 1.0;

/// Relative change between windows needed to flag a trend.
const TREND_THRESHOLD_RATIO: f64 = 0.15;

/// Direction the velocity is moving, comparing the trailing 7-day window
/// against the 7 days before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VelocityTrend {
    /// Recent window is meaningfully faster
    Accelerating,
    /// Recent window is meaningfully slower
    Decelerating,
    /// No meaningful change
    Stable,
}

/// Derived pace metrics for a single goal. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityMetrics {
    /// Authoritative current velocity (the 7-day rolling average), per day
    pub current: f64,

    /// Pace per day required to hit the target by the deadline.
    /// 0 when the goal has no deadline or no metric.
    pub required: f64,

    /// Weighted progress over the trailing 7 days, per day
    pub rolling_7_day: f64,

    /// Trend direction
    pub trend: VelocityTrend,
}

/// Midnight UTC on the given calendar day.
fn day_start(date: NaiveDate) -> Time {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Weighted progress: each activity contributes its work delta scaled by the
/// reported effort multiplier.
fn weighted_progress(activities: &[&Activity]) -> f64 {
    activities
        .iter()
        .map(|a| {
            let multiplier = a
                .effort_level
                .map_or(EFFORT_DEFAULT_MULTIPLIER, EffortLevel::multiplier);
            a.work_completed.unwrap_or(0.0) * multiplier
        })
        .sum()
}

/// Calculate the pace of goal completion from recent activity.
///
/// `activities` may be the full unordered activity collection; filtering to
/// the goal's qualifying entries and sorting by date happen here. `as_of`
/// anchors both trailing windows and the deadline distance.
pub fn calculate_velocity(goal: &Goal, activities: &[Activity], as_of: Time) -> VelocityMetrics {
    let mut qualifying: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.counts_toward(goal.id))
        .collect();
    qualifying.sort_by_key(|a| a.date);

    // Required pace per day to hit the target by the deadline.
    let mut required = 0.0;
    if let (Some(target_date), Some(metric)) = (goal.target_date, &goal.metric) {
        let remaining_days =
            ((day_start(target_date) - as_of).num_seconds() as f64 / 86_400.0).max(1.0);
        let remaining_work = (metric.target - metric.current).max(0.0);
        required = remaining_work / remaining_days;
    }

    // Two trailing 7-day windows: [7d ago, as_of] and [14d ago, 7d ago).
    let seven_days_ago = as_of - Duration::days(7);
    let fourteen_days_ago = as_of - Duration::days(14);

    let recent: Vec<&Activity> = qualifying
        .iter()
        .copied()
        .filter(|a| day_start(a.date) >= seven_days_ago)
        .collect();
    let previous: Vec<&Activity> = qualifying
        .iter()
        .copied()
        .filter(|a| {
            let d = day_start(a.date);
            d >= fourteen_days_ago && d < seven_days_ago
        })
        .collect();

    let rolling_7_day = weighted_progress(&recent) / 7.0;
    let prev_7_day = weighted_progress(&previous) / 7.0;

    // 15% change against the previous window flags a trend. The floor of 1
    // keeps the threshold meaningful when the previous window was empty.
    let diff = rolling_7_day - prev_7_day;
    let threshold = prev_7_day.max(1.0) * TREND_THRESHOLD_RATIO;

    let trend = if diff > threshold {
        VelocityTrend::Accelerating
    } else if diff < -threshold {
        VelocityTrend::Decelerating
    } else {
        VelocityTrend::Stable
    };

    VelocityMetrics {
        current: rolling_7_day,
        required,
        rolling_7_day,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use lifeos_core::{ActivityId, ActivityStatus, GoalMetric};

    fn as_of() -> Time {
        Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap()
    }

    fn goal_with_metric(current: f64, target: f64, deadline: Option<NaiveDate>) -> Goal {
        let mut goal = Goal::new("Read the classics", as_of() - Duration::days(10));
        goal.metric = Some(GoalMetric {
            name: "Pages Read".to_string(),
            unit: "pages".to_string(),
            current,
            target,
        });
        goal.target_date = deadline;
        goal
    }

    fn complete(goal: &Goal, days_ago: i64, work: f64, effort: Option<EffortLevel>) -> Activity {
        Activity {
            id: ActivityId::new(),
            name: "reading".to_string(),
            date: (as_of() - Duration::days(days_ago)).date_naive(),
            status: ActivityStatus::Complete,
            goal_id: Some(goal.id),
            work_completed: Some(work),
            effort_level: effort,
        }
    }

    #[test]
    fn recent_activity_accelerates_from_empty_previous_window() {
        // 3 completions of 5 units at medium effort inside the last 7 days.
        let goal = goal_with_metric(10.0, 50.0, Some((as_of() + Duration::days(20)).date_naive()));
        let activities = vec![
            complete(&goal, 1, 5.0, Some(EffortLevel::Medium)),
            complete(&goal, 3, 5.0, Some(EffortLevel::Medium)),
            complete(&goal, 5, 5.0, Some(EffortLevel::Medium)),
        ];

        let v = calculate_velocity(&goal, &activities, as_of());
        assert!((v.rolling_7_day - 15.0 / 7.0).abs() < 1e-9);
        assert_eq!(v.current, v.rolling_7_day);
        // prev window empty: threshold = 1 * 0.15, diff = 2.14 > 0.15
        assert_eq!(v.trend, VelocityTrend::Accelerating);
    }

    #[test]
    fn required_pace_from_deadline_and_metric() {
        let goal = goal_with_metric(10.0, 50.0, Some((as_of() + Duration::days(20)).date_naive()));
        let v = calculate_velocity(&goal, &[], as_of());
        assert!((v.required - 2.0).abs() < 1e-9);
        assert_eq!(v.current, 0.0);
        assert_eq!(v.trend, VelocityTrend::Stable);
    }

    #[test]
    fn no_deadline_or_metric_means_no_required_pace() {
        let mut goal = goal_with_metric(10.0, 50.0, None);
        assert_eq!(calculate_velocity(&goal, &[], as_of()).required, 0.0);

        goal.target_date = Some((as_of() + Duration::days(20)).date_naive());
        goal.metric = None;
        assert_eq!(calculate_velocity(&goal, &[], as_of()).required, 0.0);
    }

    #[test]
    fn past_deadline_clamps_remaining_days_to_one() {
        let goal = goal_with_metric(10.0, 50.0, Some((as_of() - Duration::days(3)).date_naive()));
        let v = calculate_velocity(&goal, &[], as_of());
        // All 40 remaining units are due "today".
        assert!((v.required - 40.0).abs() < 1e-9);
    }

    #[test]
    fn met_metric_yields_zero_required_pace() {
        // remaining work clamps at zero for current >= target
        let goal = goal_with_metric(50.0, 50.0, Some((as_of() + Duration::days(20)).date_naive()));
        assert_eq!(calculate_velocity(&goal, &[], as_of()).required, 0.0);
    }

    #[test]
    fn effort_levels_weight_contributions() {
        let goal = goal_with_metric(0.0, 100.0, None);
        let activities = vec![
            complete(&goal, 1, 10.0, Some(EffortLevel::Low)),     // 8.0
            complete(&goal, 2, 10.0, Some(EffortLevel::Intense)), // 15.0
            complete(&goal, 3, 10.0, None),                       // 10.0
        ];
        let v = calculate_velocity(&goal, &activities, as_of());
        assert!((v.rolling_7_day - 33.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn windows_are_half_open_at_the_boundary() {
        let goal = goal_with_metric(0.0, 100.0, None);
        // Exactly 7 days ago lands in the recent window, 14 days ago in the
        // previous one.
        let activities = vec![complete(&goal, 7, 7.0, None), complete(&goal, 14, 7.0, None)];
        let v = calculate_velocity(&goal, &activities, as_of());
        assert!((v.rolling_7_day - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_qualifying_activities_are_ignored() {
        let goal = goal_with_metric(0.0, 100.0, None);
        let mut planned = complete(&goal, 1, 5.0, None);
        planned.status = ActivityStatus::Planned;
        let mut unlinked = complete(&goal, 1, 5.0, None);
        unlinked.goal_id = None;
        let zero = complete(&goal, 1, 0.0, None);

        let v = calculate_velocity(&goal, &[planned, unlinked, zero], as_of());
        assert_eq!(v.rolling_7_day, 0.0);
        assert_eq!(v.trend, VelocityTrend::Stable);
    }

    #[test]
    fn deceleration_needs_a_fifteen_percent_drop() {
        let goal = goal_with_metric(0.0, 1000.0, None);
        // prev window: 70 units -> 10/day; recent window: 35 units -> 5/day.
        let activities = vec![complete(&goal, 10, 70.0, None), complete(&goal, 2, 35.0, None)];
        let v = calculate_velocity(&goal, &activities, as_of());
        assert_eq!(v.trend, VelocityTrend::Decelerating);

        // A drop inside the threshold stays stable: 10/day -> 9/day.
        let activities = vec![complete(&goal, 10, 70.0, None), complete(&goal, 2, 63.0, None)];
        let v = calculate_velocity(&goal, &activities, as_of());
        assert_eq!(v.trend, VelocityTrend::Stable);
    }

    #[test]
    fn zero_activity_is_stable_not_decelerating() {
        let goal = goal_with_metric(10.0, 50.0, Some((as_of() + Duration::days(20)).date_naive()));
        let v = calculate_velocity(&goal, &[], as_of());
        assert_eq!(v.current, 0.0);
        assert_eq!(v.trend, VelocityTrend::Stable);
    }

    #[test]
    fn negative_work_reduces_velocity() {
        let goal = goal_with_metric(80.0, 70.0, None);
        // Decrease-oriented goal: deltas are negative.
        let activities = vec![complete(&goal, 1, -2.0, None), complete(&goal, 3, -1.5, None)];
        let v = calculate_velocity(&goal, &activities, as_of());
        assert!((v.rolling_7_day - (-3.5 / 7.0)).abs() < 1e-9);
    }
}
