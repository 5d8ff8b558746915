//! The `DocumentStore` trait and live-query subscriptions

use async_trait::async_trait;
use tokio::sync::watch;

use crate::batch::WriteBatch;
use crate::document::{Document, DocumentId, Fields};
use crate::error::Result;
use crate::query::Query;

/// A live query handle.
///
/// Each subscription tracks one query and yields the query's full current
/// result set whenever any document in the queried collection changes.
/// Intermediate snapshots may be coalesced; the latest set is never lost.
#[derive(Debug)]
pub struct Subscription {
    rx: watch::Receiver<Vec<Document>>,
}

impl Subscription {
    pub(crate) fn new(rx: watch::Receiver<Vec<Document>>) -> Self {
        Self { rx }
    }

    /// The most recently published result set
    pub fn current(&self) -> Vec<Document> {
        self.rx.borrow().clone()
    }

    /// Wait for the next change and return the new full result set.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Vec<Document>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

/// Contract the panel engine holds against its hosted document database.
///
/// Implementations provide collection-scoped reads, server-assigned ids and
/// timestamps, live query subscriptions, and an atomic multi-document batch
/// commit — the only consistency primitive the engine relies on.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point read of one document
    async fn get(&self, collection: &str, id: &DocumentId) -> Result<Document>;

    /// Create a document with a server-assigned id, resolving any
    /// server-timestamp sentinels in `fields`
    async fn create(&self, collection: &str, fields: Fields) -> Result<Document>;

    /// One-shot evaluation of a filtered/ordered query
    async fn query_once(&self, query: &Query) -> Result<Vec<Document>>;

    /// Continuous evaluation of a query; see [`Subscription`]
    async fn subscribe(&self, query: &Query) -> Subscription;

    /// Apply all staged updates atomically.
    ///
    /// Either every update applies or none does. A failed commit leaves all
    /// documents in their pre-commit state and surfaces as
    /// [`StoreError::CommitFailed`](crate::StoreError::CommitFailed).
    async fn commit(&self, batch: WriteBatch) -> Result<()>;
}
