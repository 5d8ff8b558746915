//! Task list records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ListId, UserId};

/// A task list owned by one user.
///
/// `updated_at` is a best-effort causal marker: task operations bump it so
/// it stays at or above the newest change among the list's tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(skip)]
    pub id: ListId,
    #[serde(default, alias = "title")]
    pub name: String,
    /// Missing on some legacy records; overviews render those as "Unknown"
    #[serde(default, alias = "userId", alias = "createdBy", alias = "createdByEmail")]
    pub owner_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "lastUpdated", alias = "updated")]
    pub updated_at: Option<DateTime<Utc>>,
}
