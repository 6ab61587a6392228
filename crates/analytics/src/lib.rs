//! Goal analytics engine.
//!
//! Three pure, stateless stages form a linear pipeline:
//! goal + activities -> velocity -> prediction -> risk. No stage performs
//! I/O or mutates shared state; every function takes an explicit `as_of`
//! timestamp instead of reading the wall clock, so results are a pure
//! function of their inputs.

#![warn(missing_docs)]

pub mod velocity;
pub mod prediction;
pub mod risk;
pub mod report;

pub use velocity::{calculate_velocity, VelocityMetrics, VelocityTrend, EFFORT_DEFAULT_MULTIPLIER};
pub use prediction::{predict_completion, CompletionProjection, PredictionMetrics};
pub use risk::{assess_risk, RiskAnalysis, RiskLevel};
pub use report::{analyze_goals, GoalHealth};
