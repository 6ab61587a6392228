//! Goal health report - the full pipeline over every quantifiable goal.

use lifeos_core::{Activity, Goal, GoalId, Time};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prediction::{predict_completion, PredictionMetrics};
use crate::risk::{assess_risk, RiskAnalysis};
use crate::velocity::{calculate_velocity, VelocityMetrics};

/// Analytics bundle for one goal, safe to hand to any consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalHealth {
    /// The analyzed goal
    pub goal_id: GoalId,

    /// Goal title, carried for display
    pub title: String,

    /// Derived pace metrics
    pub velocity: VelocityMetrics,

    /// Derived completion prediction
    pub prediction: PredictionMetrics,

    /// Derived risk verdict
    pub risk: RiskAnalysis,
}

/// Run the velocity -> prediction -> risk pipeline for every quantifiable
/// goal and sort the results by descending severity.
///
/// Goals without a metric are skipped; they have nothing to analyze.
pub fn analyze_goals(goals: &[Goal], activities: &[Activity], as_of: Time) -> Vec<GoalHealth> {
    let mut report: Vec<GoalHealth> = goals
        .iter()
        .filter(|g| g.metric.is_some())
        .map(|goal| {
            let velocity = calculate_velocity(goal, activities, as_of);
            let prediction = predict_completion(goal, &velocity, as_of);
            let risk = assess_risk(goal, &velocity, &prediction);
            debug!(goal = %goal.id, level = ?risk.level, "analyzed goal");
            GoalHealth {
                goal_id: goal.id,
                title: goal.title.clone(),
                velocity,
                prediction,
                risk,
            }
        })
        .collect();

    report.sort_by(|a, b| b.risk.level.severity().cmp(&a.risk.level.severity()));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskLevel;
    use chrono::{Duration, TimeZone, Utc};
    use lifeos_core::{ActivityId, ActivityStatus, GoalMetric};

    fn as_of() -> Time {
        Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap()
    }

    fn goal(title: &str, deadline_days_out: i64) -> Goal {
        let mut goal = Goal::new(title, as_of() - Duration::days(10));
        goal.metric = Some(GoalMetric {
            name: "Units".to_string(),
            unit: "units".to_string(),
            current: 10.0,
            target: 50.0,
        });
        goal.target_date = Some((as_of() + Duration::days(deadline_days_out)).date_naive());
        goal
    }

    fn complete(goal: &Goal, days_ago: i64, work: f64) -> Activity {
        Activity {
            id: ActivityId::new(),
            name: "work".to_string(),
            date: (as_of() - Duration::days(days_ago)).date_naive(),
            status: ActivityStatus::Complete,
            goal_id: Some(goal.id),
            work_completed: Some(work),
            effort_level: None,
        }
    }

    #[test]
    fn skips_goals_without_a_metric() {
        let quantified = goal("quantified", 20);
        let mut vague = goal("vague", 20);
        vague.metric = None;

        let report = analyze_goals(&[quantified, vague], &[], as_of());
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].title, "quantified");
    }

    #[test]
    fn sorts_by_descending_severity() {
        // "stalled" logs nothing -> critical; "cruising" overshoots the
        // required 2/day pace -> ahead; "steady" matches it exactly but
        // lands right on the deadline -> tight buffer, at risk.
        let stalled = goal("stalled", 20);
        let cruising = goal("cruising", 20);
        let steady = goal("steady", 20);

        let activities = vec![
            complete(&cruising, 1, 20.0),
            complete(&cruising, 3, 20.0),
            complete(&steady, 2, 14.0),
        ];

        let report = analyze_goals(&[cruising, steady, stalled], &activities, as_of());

        let titles: Vec<&str> = report.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["stalled", "steady", "cruising"]);
        assert_eq!(report[0].risk.level, RiskLevel::Critical);
        assert_eq!(report[2].risk.level, RiskLevel::AheadOfPace);
    }

    #[test]
    fn report_serializes_to_plain_json() {
        let g = goal("serializable", 20);
        let report = analyze_goals(&[g], &[], as_of());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"CRITICAL\""));
        assert!(json.contains("\"serializable\""));
    }
}
