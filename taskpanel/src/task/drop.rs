//! DropTask command - commits one drag-and-drop gesture

use serde::Deserialize;
use serde_json::{json, Value};
use taskpanel_store::{DocumentId, Fields, WriteBatch};

use crate::context::{PanelContext, LISTS, TASKS};
use crate::error::{PanelError, Result};
use crate::ops::{async_trait, Execute};
use crate::reorder::{plan_drop, DropEvent, DropPlan};

/// Apply a drop gesture: plan against the operator's current task snapshot,
/// then commit every staged write in one atomic batch
#[derive(Debug, Deserialize)]
pub struct DropTask {
    pub event: DropEvent,
}

impl DropTask {
    /// Create a new DropTask command
    pub fn new(event: DropEvent) -> Self {
        Self { event }
    }
}

/// Stage a plan into a write batch: every changed field plus an `updatedAt`
/// touch per changed task and per touched parent list
fn stage(plan: &DropPlan) -> WriteBatch {
    let mut batch = WriteBatch::new();

    for change in &plan.task_changes {
        let mut fields = Fields::new();
        if let Some(order) = change.order {
            fields = fields.set("order", order);
        }
        if let Some(priority) = change.priority {
            fields = fields.set("priority", priority.level());
        }
        if let Some(list_id) = &change.list_id {
            fields = fields.set("listId", list_id.as_str());
        }
        fields = fields.touch("updatedAt");
        batch.update(TASKS, DocumentId::from_string(change.id.as_str()), fields);
    }

    for list_id in &plan.touched_lists {
        batch.update(
            LISTS,
            DocumentId::from_string(list_id.as_str()),
            Fields::new().touch("updatedAt"),
        );
    }

    batch
}

#[async_trait]
impl Execute<PanelContext, PanelError> for DropTask {
    async fn execute(&self, ctx: &PanelContext) -> Result<Value> {
        let snapshot = ctx.load_tasks().await?;

        let Some(plan) = plan_drop(&self.event, &snapshot) else {
            return Ok(json!({
                "applied": false,
                "taskWrites": 0,
                "listTouches": 0,
            }));
        };

        ctx.commit(stage(&plan)).await?;
        tracing::debug!(
            task = %self.event.task_id,
            task_writes = plan.task_changes.len(),
            list_touches = plan.touched_lists.len(),
            "committed drop"
        );

        Ok(json!({
            "applied": true,
            "taskWrites": plan.task_changes.len(),
            "listTouches": plan.touched_lists.len(),
        }))
    }
}
