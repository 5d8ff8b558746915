//! Document-store abstraction for the taskpanel engine.
//!
//! The panel engine talks to a hosted document database through the
//! [`DocumentStore`] trait: collection-scoped queries with live
//! subscriptions, point reads, server-assigned ids and monotonic
//! timestamps, and atomic multi-document write batches.
//!
//! ## Overview
//!
//! - **Injected client** — consumers hold an `Arc<dyn DocumentStore>`;
//!   there is no global store handle
//! - **Live queries** — [`Subscription`] republishes a query's full result
//!   set on every matching collection change
//! - **Atomic batches** — [`WriteBatch`] updates apply together or not at
//!   all; partial application is never observable
//! - **Server time** — [`FieldValue::ServerTimestamp`] sentinels are
//!   resolved by the store, so clients never need synchronized clocks
//!
//! [`MemoryStore`] implements the contract in-process for tests and local
//! runs; the hosted database itself is a collaborator, not part of this
//! crate.

mod batch;
mod document;
mod error;
mod memory;
mod query;
mod store;

pub use batch::{StagedUpdate, WriteBatch};
pub use document::{Document, DocumentId, FieldValue, Fields};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use query::{compare_values, Direction, Filter, OrderBy, Query};
pub use store::{DocumentStore, Subscription};
