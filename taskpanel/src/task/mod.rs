//! Task commands

mod add;
mod drop;
mod overview;

pub use add::AddTask;
pub use drop::DropTask;
pub use overview::{TaskOverview, TaskRow};
