//! Back-office login.
//!
//! The panel uses a single hardcoded operator credential; there is no real
//! identity system behind it. The operator id returned here scopes every
//! dashboard query.

use crate::error::{PanelError, Result};
use crate::types::UserId;

const STATIC_USERNAME: &str = "admin";
const STATIC_PASSWORD: &str = "admin123";

/// The authenticated operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub username: String,
}

impl Operator {
    /// The operator's id as used for query scoping
    pub fn user_id(&self) -> UserId {
        UserId::from_string(&self.username)
    }
}

/// Check the static credentials
pub fn login(username: &str, password: &str) -> Result<Operator> {
    if username == STATIC_USERNAME && password == STATIC_PASSWORD {
        Ok(Operator {
            username: username.to_string(),
        })
    } else {
        Err(PanelError::InvalidCredentials)
    }
}
