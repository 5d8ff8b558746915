//! Atomic multi-document write batches

use crate::document::{DocumentId, Fields};

/// One staged merge-update inside a batch
#[derive(Debug, Clone)]
pub struct StagedUpdate {
    pub collection: String,
    pub id: DocumentId,
    pub fields: Fields,
}

/// A set of document updates that apply together or not at all.
///
/// Updates are applied in staging order; staging the same document twice
/// merges the later fields over the earlier ones. The batch itself is inert —
/// nothing happens until it is handed to [`DocumentStore::commit`].
///
/// [`DocumentStore::commit`]: crate::DocumentStore::commit
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    updates: Vec<StagedUpdate>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a merge-update of the given fields onto an existing document
    pub fn update(&mut self, collection: impl Into<String>, id: DocumentId, fields: Fields) {
        self.updates.push(StagedUpdate {
            collection: collection.into(),
            id,
            fields,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Iterate staged updates in staging order
    pub fn iter(&self) -> impl Iterator<Item = &StagedUpdate> {
        self.updates.iter()
    }

    pub(crate) fn into_updates(self) -> Vec<StagedUpdate> {
        self.updates
    }
}
