//! List commands

mod add;
mod overview;

pub use add::AddList;
pub use overview::{ListOverview, ListRow};
