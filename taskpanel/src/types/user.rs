//! Registered user records, as shown in the users admin table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// A registered user. Every field except the id is optional on the wire;
/// the users table renders missing values as "-".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip)]
    pub id: UserId,
    #[serde(default, alias = "emailId")]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub signup_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ip: Option<String>,
}
