//! Back-office panel engine.
//!
//! This crate is the logic layer of a back-office administrative panel: an
//! authenticated operator views registered users, task lists, and tasks, and
//! rearranges tasks by drag-and-drop. All persistent state lives in a hosted
//! document database reached through the [`DocumentStore`] trait from
//! `taskpanel-store`; this crate issues queries and batch commits and holds
//! no storage of its own.
//!
//! ## Overview
//!
//! - **Commands do the work** - each operation is a struct implementing
//!   [`Execute`] against a [`PanelContext`]
//! - **The context provides access, not logic** - typed reads, creates,
//!   and live feeds over the injected store client
//! - **Reordering is planned, then committed** - [`reorder::plan_drop`]
//!   turns one drop gesture into a minimal-diff [`reorder::DropPlan`]
//!   against an explicit snapshot; [`task::DropTask`] commits the plan in
//!   one atomic batch
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskpanel::{auth, list::AddList, task::AddTask, Execute, PanelContext};
//! use taskpanel_store::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let operator = auth::login("admin", "admin123")?;
//! let ctx = PanelContext::new(Arc::new(MemoryStore::new()), operator.user_id());
//!
//! let list = AddList::new("Sprint 12").execute(&ctx).await?;
//! AddTask::new(list["id"].as_str().unwrap(), "Write report")
//!     .execute(&ctx)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
mod context;
mod error;
pub mod format;
mod ops;
pub mod reorder;
mod snapshot;
pub mod types;
pub mod zone;

// Command modules
pub mod list;
pub mod task;
pub mod user;

pub use context::{ListFeed, PanelContext, TaskFeed, LISTS, TASKS, USERS};
pub use error::{PanelError, Result};
pub use ops::{async_trait, Execute};
pub use snapshot::TaskSnapshot;

// Re-export commonly used types
pub use types::{List, ListId, Priority, Task, TaskId, User, UserId};

// Re-export the store contract consumers inject
pub use taskpanel_store::DocumentStore;
