//! JSON file storage implementation.
//!
//! Stores one pretty-printed JSON document per record under `goals/` and
//! `activities/` inside the storage root.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lifeos_core::{Activity, ActivityId, Goal, GoalId};
use tokio::fs;
use tracing::debug;

use super::{Result, Storage, StorageError};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the `goals/` and
    /// `activities/` subdirectories if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("goals")).await?;
        fs::create_dir_all(root.join("activities")).await?;

        Ok(Self { root })
    }

    fn goal_path(&self, id: GoalId) -> PathBuf {
        self.root.join("goals").join(format!("{}.json", id))
    }

    fn activity_path(&self, id: ActivityId) -> PathBuf {
        self.root.join("activities").join(format!("{}.json", id))
    }

    async fn read_dir_json<T: serde::de::DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>> {
        let mut out = Vec::new();
        let mut entries = fs::read_dir(self.root.join(dir)).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let contents = fs::read_to_string(&path).await?;
            out.push(serde_json::from_str(&contents)?);
        }

        Ok(out)
    }
}

#[async_trait]
impl Storage for JsonStorage {
    async fn save_goal(&mut self, goal: &Goal) -> Result<()> {
        let json = serde_json::to_string_pretty(goal)?;
        fs::write(self.goal_path(goal.id), json.as_bytes()).await?;
        debug!(goal = %goal.id, "saved goal");
        Ok(())
    }

    async fn load_goal(&self, id: GoalId) -> Result<Option<Goal>> {
        match fs::read_to_string(self.goal_path(id)).await {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self.read_dir_json("goals").await?;
        goals.sort_by_key(|g| g.created_at);
        Ok(goals)
    }

    async fn delete_goal(&mut self, id: GoalId) -> Result<()> {
        match fs::remove_file(self.goal_path(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save_activity(&mut self, activity: &Activity) -> Result<()> {
        let json = serde_json::to_string_pretty(activity)?;
        fs::write(self.activity_path(activity.id), json.as_bytes()).await?;
        debug!(activity = %activity.id, "saved activity");
        Ok(())
    }

    async fn load_activity(&self, id: ActivityId) -> Result<Option<Activity>> {
        match fs::read_to_string(self.activity_path(id)).await {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_activities(&self, goal_id: Option<GoalId>) -> Result<Vec<Activity>> {
        let mut activities: Vec<Activity> = self.read_dir_json("activities").await?;
        if let Some(goal_id) = goal_id {
            activities.retain(|a| a.goal_id == Some(goal_id));
        }
        activities.sort_by_key(|a| a.date);
        Ok(activities)
    }

    async fn delete_activity(&mut self, id: ActivityId) -> Result<()> {
        match fs::remove_file(self.activity_path(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
