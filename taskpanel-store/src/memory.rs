//! In-process `DocumentStore` implementation.
//!
//! `MemoryStore` backs tests and local runs. It is not the hosted database —
//! it exists so the engine can be driven against a store with the same
//! contract: server-assigned ids, monotonic timestamps, live queries, and
//! all-or-nothing batch commits.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use tokio::sync::watch;
use ulid::Ulid;

use crate::batch::WriteBatch;
use crate::document::{Document, DocumentId, FieldValue, Fields};
use crate::error::{Result, StoreError};
use crate::query::{Direction, Query};
use crate::store::{DocumentStore, Subscription};

struct Watcher {
    query: Query,
    tx: watch::Sender<Vec<Document>>,
}

#[derive(Default)]
struct Inner {
    /// collection name -> id -> field map; BTreeMap keeps iteration stable
    collections: HashMap<String, BTreeMap<String, Map<String, Value>>>,
    watchers: Vec<Watcher>,
    /// Last timestamp handed out, in microseconds since the epoch
    last_ts_micros: i64,
    #[cfg(feature = "test-support")]
    fail_next_commit: bool,
}

/// In-memory document store with live queries and atomic batches
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the next `commit` call to fail without applying anything
    #[cfg(feature = "test-support")]
    pub fn fail_next_commit(&self) {
        self.inner.lock().unwrap().fail_next_commit = true;
    }
}

impl Inner {
    /// Next server timestamp as an RFC3339 JSON string.
    ///
    /// Strictly greater than every timestamp previously handed out by this
    /// store, even when the wall clock has not advanced.
    fn next_timestamp(&mut self) -> Value {
        let now = Utc::now().timestamp_micros();
        let micros = now.max(self.last_ts_micros + 1);
        self.last_ts_micros = micros;

        let stamp = DateTime::<Utc>::from_timestamp_micros(micros)
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Micros, true);
        Value::String(stamp)
    }

    /// Merge staged fields into a document map, resolving sentinels
    fn apply_fields(&mut self, target: &mut Map<String, Value>, fields: Fields) {
        for (name, value) in fields {
            let resolved = match value {
                FieldValue::Value(v) => v,
                FieldValue::ServerTimestamp => self.next_timestamp(),
            };
            target.insert(name, resolved);
        }
    }

    fn run_query(&self, query: &Query) -> Vec<Document> {
        let mut docs: Vec<Document> = match self.collections.get(&query.collection) {
            Some(collection) => collection
                .iter()
                .filter(|(_, fields)| query.matches(fields))
                .map(|(id, fields)| Document::new(DocumentId::from_string(id), fields.clone()))
                .collect(),
            None => Vec::new(),
        };

        if let Some(order) = &query.order_by {
            docs.sort_by(|a, b| {
                let ordering =
                    crate::query::compare_values(a.get(&order.field), b.get(&order.field));
                match order.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        docs
    }

    /// Re-evaluate and publish every watcher on the given collections
    fn notify(&mut self, collections: &[&str]) {
        self.watchers.retain(|w| !w.tx.is_closed());

        let results: Vec<Option<Vec<Document>>> = self
            .watchers
            .iter()
            .map(|w| {
                if collections.contains(&w.query.collection.as_str()) {
                    Some(self.run_query(&w.query))
                } else {
                    None
                }
            })
            .collect();

        for (watcher, result) in self.watchers.iter().zip(results) {
            if let Some(docs) = result {
                watcher.tx.send_replace(docs);
            }
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &DocumentId) -> Result<Document> {
        let inner = self.inner.lock().unwrap();
        inner
            .collections
            .get(collection)
            .and_then(|c| c.get(id.as_str()))
            .map(|fields| Document::new(id.clone(), fields.clone()))
            .ok_or_else(|| StoreError::not_found(collection, id.as_str()))
    }

    async fn create(&self, collection: &str, fields: Fields) -> Result<Document> {
        let mut inner = self.inner.lock().unwrap();

        let id = Ulid::new().to_string();
        let mut map = Map::new();
        inner.apply_fields(&mut map, fields);

        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), map.clone());
        inner.notify(&[collection]);

        tracing::debug!(collection, id = %id, "created document");
        Ok(Document::new(DocumentId::from_string(id), map))
    }

    async fn query_once(&self, query: &Query) -> Result<Vec<Document>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.run_query(query))
    }

    async fn subscribe(&self, query: &Query) -> Subscription {
        let mut inner = self.inner.lock().unwrap();
        let (tx, rx) = watch::channel(inner.run_query(query));
        inner.watchers.push(Watcher {
            query: query.clone(),
            tx,
        });
        Subscription::new(rx)
    }

    async fn commit(&self, batch: WriteBatch) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();

        #[cfg(feature = "test-support")]
        if inner.fail_next_commit {
            inner.fail_next_commit = false;
            return Err(StoreError::commit_failed("injected commit failure"));
        }

        // Validate every target before touching anything: a batch with one
        // bad reference must leave the store byte-for-byte unchanged.
        for update in batch.iter() {
            let exists = inner
                .collections
                .get(&update.collection)
                .is_some_and(|c| c.contains_key(update.id.as_str()));
            if !exists {
                return Err(StoreError::commit_failed(format!(
                    "unknown document {}/{}",
                    update.collection, update.id
                )));
            }
        }

        let updates = batch.into_updates();
        let count = updates.len();
        let mut touched: Vec<String> = Vec::new();

        for update in updates {
            let mut fields_map = inner
                .collections
                .get(&update.collection)
                .and_then(|c| c.get(update.id.as_str()))
                .cloned()
                .unwrap_or_default();
            inner.apply_fields(&mut fields_map, update.fields);
            inner
                .collections
                .get_mut(&update.collection)
                .expect("validated above")
                .insert(update.id.as_str().to_string(), fields_map);

            if !touched.iter().any(|c| c == &update.collection) {
                touched.push(update.collection);
            }
        }

        let touched_refs: Vec<&str> = touched.iter().map(String::as_str).collect();
        inner.notify(&touched_refs);

        tracing::debug!(updates = count, "committed batch");
        Ok(())
    }
}
