//! User commands

mod list;

pub use list::{ListUsers, UserRow};
