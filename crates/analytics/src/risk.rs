//! Risk assessment - velocity ratio, timeline buffer, and trend gates.

use lifeos_core::Goal;
use serde::{Deserialize, Serialize};

use crate::prediction::PredictionMetrics;
use crate::velocity::{VelocityMetrics, VelocityTrend};

/// Ratio assumed for goals without a required pace, inside the healthy band
/// so the velocity gate alone never flags them.
const NO_REQUIREMENT_RATIO: f64 = 1.1;

/// Categorical risk verdict for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Comfortably faster than required
    AheadOfPace,
    /// Within the healthy pace band
    OnTrack,
    /// Falling behind or cutting it close
    AtRisk,
    /// Far below the required pace
    Critical,
}

impl RiskLevel {
    /// Severity rank for presentation sorting, highest first.
    pub fn severity(self) -> u8 {
        match self {
            RiskLevel::Critical => 3,
            RiskLevel::AtRisk => 2,
            RiskLevel::OnTrack => 1,
            RiskLevel::AheadOfPace => 0,
        }
    }
}

/// Derived risk verdict with human-readable reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Final verdict after all gates have run
    pub level: RiskLevel,

    /// Human-readable reasons accumulated by the gates
    pub reasons: Vec<String>,
}

/// Assess risk by comparing velocity against required pace, the timeline
/// buffer, and the trend.
///
/// The three gates run in a fixed order and each may overwrite the level
/// under its own precedence rules; the order is load-bearing.
pub fn assess_risk(
    goal: &Goal,
    velocity: &VelocityMetrics,
    prediction: &PredictionMetrics,
) -> RiskAnalysis {
    let mut reasons = Vec::new();
    let mut level = RiskLevel::OnTrack;

    // A. Velocity gap. No required pace means no deadline pressure, so the
    // ratio defaults into the healthy band.
    let velocity_ratio = if velocity.required > 0.0 {
        velocity.current / velocity.required
    } else {
        NO_REQUIREMENT_RATIO
    };

    if velocity_ratio < 0.5 {
        level = RiskLevel::Critical;
        reasons.push(format!(
            "Current pace ({:.1}/day) is < 50% of required ({:.1}/day).",
            velocity.current, velocity.required
        ));
    } else if velocity_ratio < 0.85 {
        level = RiskLevel::AtRisk;
        reasons.push(format!(
            "Pace is falling behind ({}% of target).",
            (velocity_ratio * 100.0).round() as i64
        ));
    } else if velocity_ratio > 1.25 {
        level = RiskLevel::AheadOfPace;
    }

    // B. Timeline buffer, only when both a deadline and a projection exist.
    if let (Some(target_date), Some(projection)) = (goal.target_date, prediction.projection.as_ref())
    {
        let buffer_days = (target_date - projection.completion_date).num_days();

        if buffer_days < 0 {
            // Predicted to finish late. Never downgrades a critical verdict.
            if level != RiskLevel::Critical {
                level = RiskLevel::AtRisk;
                reasons.push(format!(
                    "Projected to miss deadline by {} days.",
                    buffer_days.abs()
                ));
            }
        } else if buffer_days < 7 && level == RiskLevel::OnTrack {
            level = RiskLevel::AtRisk;
            reasons.push("Buffer is tight (< 7 days).".to_string());
        }
    }

    // C. Trend. Deceleration always leaves a reason and pulls an on-track
    // goal down, but never escalates past AtRisk.
    if velocity.trend == VelocityTrend::Decelerating {
        reasons.push("Velocity is trending downward.".to_string());
        if level == RiskLevel::OnTrack {
            level = RiskLevel::AtRisk;
        }
    }

    RiskAnalysis { level, reasons }
}
