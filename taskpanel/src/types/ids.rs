//! Opaque, store-assigned identifier newtypes

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Reconstruct an id from its string form
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

id_type! {
    /// Identifier of a task list
    ListId
}

id_type! {
    /// Identifier of a task
    TaskId
}

id_type! {
    /// Identifier of a registered user (the owner scoping key)
    UserId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = TaskId::from_string("01ABC");
        assert_eq!(id.as_str(), "01ABC");
        assert_eq!(id.to_string(), "01ABC");
        assert_eq!(TaskId::from("01ABC"), id);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = ListId::from("l1");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("l1"));
    }
}
