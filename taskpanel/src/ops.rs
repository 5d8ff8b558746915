//! The `Execute` trait for panel commands.
//!
//! Commands are structs whose fields ARE the parameters; each implements
//! `Execute` against the context and returns a JSON value with the
//! operation's result.

use serde_json::Value;

pub use async_trait::async_trait;

/// A command executable against a context of type `C`
#[async_trait]
pub trait Execute<C, E> {
    async fn execute(&self, ctx: &C) -> std::result::Result<Value, E>;
}
