//! TaskOverview command - the admin tasks table

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::PanelContext;
use crate::error::{PanelError, Result};
use crate::format::{format_due_date, format_timestamp};
use crate::ops::{async_trait, Execute};
use crate::types::Task;

/// One row of the tasks table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    pub sno: usize,
    pub id: String,
    pub title: String,
    pub description: String,
    pub task_list: String,
    pub created_by: String,
    pub due_date: String,
    pub created_at: String,
}

/// Build the admin tasks table: every task with its list name and creator
/// email resolved
#[derive(Debug, Default, Deserialize)]
pub struct TaskOverview {}

impl TaskOverview {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolve an owner id to an email for display. Ids that already look like
/// an email are used verbatim; otherwise the users collection is consulted,
/// falling back to the raw id.
async fn resolve_creator(ctx: &PanelContext, task: &Task) -> String {
    let raw = task.owner_id.as_str();
    if raw.is_empty() {
        return "-".to_string();
    }
    if raw.contains('@') {
        return raw.to_string();
    }
    match ctx.read_user(&task.owner_id).await {
        Ok(user) => user.email.unwrap_or_else(|| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

#[async_trait]
impl Execute<PanelContext, PanelError> for TaskOverview {
    async fn execute(&self, ctx: &PanelContext) -> Result<Value> {
        let tasks = ctx.all_tasks().await?;
        let mut rows = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let task_list = match ctx.read_list(&task.list_id).await {
                Ok(list) => list.name,
                Err(_) => String::new(),
            };

            rows.push(TaskRow {
                sno: index + 1,
                id: task.id.to_string(),
                title: if task.title.is_empty() {
                    "-".to_string()
                } else {
                    task.title.clone()
                },
                description: task.description.clone(),
                task_list,
                created_by: resolve_creator(ctx, task).await,
                due_date: format_due_date(task.due_date.as_ref()),
                created_at: format_timestamp(task.created_at.as_ref()),
            });
        }

        Ok(serde_json::to_value(rows)?)
    }
}
