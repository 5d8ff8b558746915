//! Core types for the panel engine

mod ids;
mod list;
mod priority;
mod task;
mod user;

pub use ids::{ListId, TaskId, UserId};
pub use list::List;
pub use priority::Priority;
pub use task::Task;
pub use user::User;
