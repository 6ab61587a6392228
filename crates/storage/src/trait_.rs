//! Storage trait abstraction.

use async_trait::async_trait;
use lifeos_core::{Activity, ActivityId, Goal, GoalId};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for goals and activities.
///
/// This trait allows different storage backends to be plugged in.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Goal operations ===

    /// Save a goal (create or update).
    async fn save_goal(&mut self, goal: &Goal) -> Result<()>;

    /// Load a goal by ID.
    async fn load_goal(&self, id: GoalId) -> Result<Option<Goal>>;

    /// List all goals.
    async fn list_goals(&self) -> Result<Vec<Goal>>;

    /// Delete a goal.
    async fn delete_goal(&mut self, id: GoalId) -> Result<()>;

    // === Activity operations ===

    /// Save an activity (create or update).
    async fn save_activity(&mut self, activity: &Activity) -> Result<()>;

    /// Load an activity by ID.
    async fn load_activity(&self, id: ActivityId) -> Result<Option<Activity>>;

    /// List all activities, optionally restricted to one goal.
    async fn list_activities(&self, goal_id: Option<GoalId>) -> Result<Vec<Activity>>;

    /// Delete an activity.
    async fn delete_activity(&mut self, id: ActivityId) -> Result<()>;
}
