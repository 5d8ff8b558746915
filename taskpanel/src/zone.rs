//! Drop-zone identifier codec.
//!
//! Zones are the string names the presentation layer gives its drop targets:
//!
//! - `list-{listId}` — a list column
//! - `priority-{listId}-{Level}` — a priority zone scoped to one list
//! - `priority-{Level}` — the unscoped priority zone form; still accepted,
//!   the moved task's own list is used as the parent
//!
//! Anything else is malformed and treated as an invalid drop.

use std::fmt;

use crate::types::{ListId, Priority};

/// A decoded drop zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Zone {
    /// A list column; dropping here reorders or moves tasks
    List(ListId),
    /// A priority zone; dropping here re-prioritizes the task in place
    Priority {
        list_id: Option<ListId>,
        level: Priority,
    },
}

impl Zone {
    /// Decode a zone identifier. Returns `None` for malformed input.
    pub fn parse(zone: &str) -> Option<Self> {
        if let Some(list_id) = zone.strip_prefix("list-") {
            if list_id.is_empty() {
                return None;
            }
            return Some(Self::List(ListId::from_string(list_id)));
        }

        if let Some(rest) = zone.strip_prefix("priority-") {
            // Unscoped form first: the whole remainder is a level label.
            if let Some(level) = Priority::parse_label(rest) {
                return Some(Self::Priority {
                    list_id: None,
                    level,
                });
            }

            // List-scoped form: list ids never contain '-', so the label is
            // everything after the last separator.
            let (list_id, label) = rest.rsplit_once('-')?;
            let level = Priority::parse_label(label)?;
            if list_id.is_empty() {
                return None;
            }
            return Some(Self::Priority {
                list_id: Some(ListId::from_string(list_id)),
                level,
            });
        }

        None
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(list_id) => write!(f, "list-{list_id}"),
            Self::Priority {
                list_id: Some(list_id),
                level,
            } => write!(f, "priority-{list_id}-{level}"),
            Self::Priority {
                list_id: None,
                level,
            } => write!(f, "priority-{level}"),
        }
    }
}
