//! Task records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ListId, TaskId, UserId};
use super::priority::Priority;

/// A task in a list.
///
/// Legacy records exist with alternate field names (`desc`, `taskDesc`,
/// `details` for the description; `userId`, `createdBy` for the owner) and
/// may lack an `order`. Aliases and defaults here spell out exactly which
/// spellings are accepted; writes always use the canonical names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(skip)]
    pub id: TaskId,
    #[serde(alias = "taskListId")]
    pub list_id: ListId,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default, alias = "desc", alias = "taskDesc", alias = "details")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Dense zero-based rank within the task's list. Missing on legacy
    /// records; resolved to 0 wherever ordering matters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(alias = "userId", alias = "createdBy")]
    pub owner_id: UserId,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// The task's rank, with the legacy-record default applied
    pub fn order_or_default(&self) -> u32 {
        self.order.unwrap_or(0)
    }
}
