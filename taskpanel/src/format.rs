//! Display formatting for admin tables

use chrono::{DateTime, Utc};

/// Render a timestamp for a table cell; missing values render as "-"
pub fn format_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

/// Render a due date as dd-mm-yyyy; missing values render as "-"
pub fn format_due_date(ts: Option<&DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%d-%m-%Y").to_string(),
        None => "-".to_string(),
    }
}
