//! AddList command

use serde::Deserialize;
use serde_json::Value;

use crate::context::PanelContext;
use crate::error::{PanelError, Result};
use crate::ops::{async_trait, Execute};

/// Create a new task list owned by the operator
#[derive(Debug, Deserialize)]
pub struct AddList {
    /// The list name (required, not blank)
    pub name: String,
}

impl AddList {
    /// Create a new AddList command
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Execute<PanelContext, PanelError> for AddList {
    async fn execute(&self, ctx: &PanelContext) -> Result<Value> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PanelError::invalid_value("name", "must not be blank"));
        }

        let list = ctx.create_list(name).await?;
        tracing::debug!(list = %list.id, name, "created list");

        let mut value = serde_json::to_value(&list)?;
        value["id"] = Value::String(list.id.to_string());
        Ok(value)
    }
}
