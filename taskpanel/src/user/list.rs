//! ListUsers command - the admin users table

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::PanelContext;
use crate::error::{PanelError, Result};
use crate::format::format_timestamp;
use crate::ops::{async_trait, Execute};

/// One row of the users table; missing fields render as "-"
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub signup_time: String,
    pub ip: String,
}

/// Build the admin users table, most recent signup first
#[derive(Debug, Default, Deserialize)]
pub struct ListUsers {}

impl ListUsers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Execute<PanelContext, PanelError> for ListUsers {
    async fn execute(&self, ctx: &PanelContext) -> Result<Value> {
        let users = ctx.all_users().await?;
        let rows: Vec<UserRow> = users
            .into_iter()
            .map(|user| UserRow {
                id: user.id.to_string(),
                email: user.email.unwrap_or_else(|| "-".to_string()),
                password: user.password.unwrap_or_else(|| "-".to_string()),
                signup_time: format_timestamp(user.signup_time.as_ref()),
                ip: user.ip.unwrap_or_else(|| "-".to_string()),
            })
            .collect();

        Ok(serde_json::to_value(rows)?)
    }
}
