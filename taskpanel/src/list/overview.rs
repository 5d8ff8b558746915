//! ListOverview command - the admin task-lists table

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::PanelContext;
use crate::error::{PanelError, Result};
use crate::format::format_timestamp;
use crate::ops::{async_trait, Execute};
use crate::types::List;

/// One row of the task-lists table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub sno: usize,
    pub id: String,
    pub title: String,
    pub created_by: String,
    pub task_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

/// Build the admin task-lists table: every list, newest first, with its
/// task count and creator email resolved
#[derive(Debug, Default, Deserialize)]
pub struct ListOverview {}

impl ListOverview {
    pub fn new() -> Self {
        Self::default()
    }
}

async fn resolve_creator(ctx: &PanelContext, list: &List) -> String {
    let Some(owner) = &list.owner_id else {
        return "Unknown".to_string();
    };
    let raw = owner.as_str();
    if raw.contains('@') {
        return raw.to_string();
    }
    match ctx.read_user(owner).await {
        Ok(user) => user.email.unwrap_or_else(|| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

#[async_trait]
impl Execute<PanelContext, PanelError> for ListOverview {
    async fn execute(&self, ctx: &PanelContext) -> Result<Value> {
        let lists = ctx.all_lists_newest_first().await?;
        let mut rows = Vec::with_capacity(lists.len());

        for (index, list) in lists.iter().enumerate() {
            rows.push(ListRow {
                sno: index + 1,
                id: list.id.to_string(),
                title: list.name.clone(),
                created_by: resolve_creator(ctx, list).await,
                task_count: ctx.count_tasks_in_list(&list.id).await?,
                created_at: format_timestamp(list.created_at.as_ref()),
                updated_at: format_timestamp(list.updated_at.as_ref()),
            });
        }

        Ok(serde_json::to_value(rows)?)
    }
}
