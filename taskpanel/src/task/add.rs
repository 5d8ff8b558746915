//! AddTask command

use serde::Deserialize;
use serde_json::Value;

use crate::context::PanelContext;
use crate::error::{PanelError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{ListId, Priority};

/// Add a new task at the end of a list
#[derive(Debug, Deserialize)]
pub struct AddTask {
    /// The target list (must exist)
    pub list_id: ListId,
    /// The task title (required, not blank)
    pub title: String,
    /// Detailed task description
    pub description: Option<String>,
    /// Priority level; defaults to Medium
    pub priority: Option<Priority>,
}

impl AddTask {
    /// Create a new AddTask command
    pub fn new(list_id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            title: title.into(),
            description: None,
            priority: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[async_trait]
impl Execute<PanelContext, PanelError> for AddTask {
    async fn execute(&self, ctx: &PanelContext) -> Result<Value> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PanelError::invalid_value("title", "must not be blank"));
        }

        // Validate the parent before writing anything.
        ctx.read_list(&self.list_id).await?;

        // New tasks go to the end: rank = current count keeps ranks dense.
        let order = ctx.count_tasks_in_list(&self.list_id).await? as u32;

        let task = ctx
            .create_task(
                &self.list_id,
                title,
                self.description.as_deref().unwrap_or_default(),
                self.priority.unwrap_or_default(),
                order,
            )
            .await?;

        // Task creation is a structural change to the parent list.
        ctx.touch_list(&self.list_id).await?;
        tracing::debug!(task = %task.id, list = %self.list_id, order, "created task");

        let mut value = serde_json::to_value(&task)?;
        value["id"] = Value::String(task.id.to_string());
        Ok(value)
    }
}
