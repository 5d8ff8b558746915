//! PanelContext - store access primitives for panel commands
//!
//! The context wraps the injected store client and the current operator id.
//! No business logic lives here, just typed reads, creates, and feeds;
//! commands do all the work.

use std::sync::Arc;

use taskpanel_store::{
    Direction, Document, DocumentId, DocumentStore, Fields, Query, StoreError, Subscription,
    WriteBatch,
};

use crate::error::{PanelError, Result};
use crate::snapshot::TaskSnapshot;
use crate::types::{List, ListId, Priority, Task, TaskId, User, UserId};

/// Collection holding registered users
pub const USERS: &str = "users";
/// Collection holding task lists
pub const LISTS: &str = "lists";
/// Collection holding tasks
pub const TASKS: &str = "tasks";

/// Context passed to every command - provides access, not logic
pub struct PanelContext {
    store: Arc<dyn DocumentStore>,
    operator: UserId,
}

fn decode_task(doc: &Document) -> Result<Task> {
    let mut task: Task = doc.decode()?;
    task.id = TaskId::from_string(doc.id.as_str());
    Ok(task)
}

fn decode_list(doc: &Document) -> Result<List> {
    let mut list: List = doc.decode()?;
    list.id = ListId::from_string(doc.id.as_str());
    Ok(list)
}

fn decode_user(doc: &Document) -> Result<User> {
    let mut user: User = doc.decode()?;
    user.id = UserId::from_string(doc.id.as_str());
    Ok(user)
}

impl PanelContext {
    /// Create a context for the given store client and operator
    pub fn new(store: Arc<dyn DocumentStore>, operator: UserId) -> Self {
        Self { store, operator }
    }

    /// The current operator's id (the query scoping key)
    pub fn operator(&self) -> &UserId {
        &self.operator
    }

    /// The injected store client
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    // =========================================================================
    // Point reads
    // =========================================================================

    /// Read one task
    pub async fn read_task(&self, id: &TaskId) -> Result<Task> {
        let doc = self
            .store
            .get(TASKS, &DocumentId::from_string(id.as_str()))
            .await
            .map_err(|err| match err {
                StoreError::NotFound { .. } => PanelError::TaskNotFound { id: id.to_string() },
                other => other.into(),
            })?;
        decode_task(&doc)
    }

    /// Read one list
    pub async fn read_list(&self, id: &ListId) -> Result<List> {
        let doc = self
            .store
            .get(LISTS, &DocumentId::from_string(id.as_str()))
            .await
            .map_err(|err| match err {
                StoreError::NotFound { .. } => PanelError::ListNotFound { id: id.to_string() },
                other => other.into(),
            })?;
        decode_list(&doc)
    }

    /// Read one user
    pub async fn read_user(&self, id: &UserId) -> Result<User> {
        let doc = self
            .store
            .get(USERS, &DocumentId::from_string(id.as_str()))
            .await
            .map_err(|err| match err {
                StoreError::NotFound { .. } => PanelError::UserNotFound { id: id.to_string() },
                other => other.into(),
            })?;
        decode_user(&doc)
    }

    // =========================================================================
    // Dashboard loads (owner-scoped)
    // =========================================================================

    fn owner_tasks_query(&self) -> Query {
        Query::collection(TASKS)
            .where_eq("ownerId", self.operator.as_str())
            .order_by("order", Direction::Ascending)
    }

    fn owner_lists_query(&self) -> Query {
        Query::collection(LISTS)
            .where_eq("ownerId", self.operator.as_str())
            .order_by("createdAt", Direction::Ascending)
    }

    /// Point-in-time snapshot of all the operator's tasks
    pub async fn load_tasks(&self) -> Result<TaskSnapshot> {
        let docs = self.store.query_once(&self.owner_tasks_query()).await?;
        let tasks = docs.iter().map(decode_task).collect::<Result<Vec<_>>>()?;
        Ok(TaskSnapshot::new(tasks))
    }

    /// The operator's lists, oldest first
    pub async fn load_lists(&self) -> Result<Vec<List>> {
        let docs = self.store.query_once(&self.owner_lists_query()).await?;
        docs.iter().map(decode_list).collect()
    }

    /// Live feed of the operator's tasks
    pub async fn watch_tasks(&self) -> TaskFeed {
        TaskFeed {
            sub: self.store.subscribe(&self.owner_tasks_query()).await,
        }
    }

    /// Live feed of the operator's lists
    pub async fn watch_lists(&self) -> ListFeed {
        ListFeed {
            sub: self.store.subscribe(&self.owner_lists_query()).await,
        }
    }

    // =========================================================================
    // Admin loads (across all owners)
    // =========================================================================

    /// All lists, newest first
    pub async fn all_lists_newest_first(&self) -> Result<Vec<List>> {
        let query = Query::collection(LISTS).order_by("createdAt", Direction::Descending);
        let docs = self.store.query_once(&query).await?;
        docs.iter().map(decode_list).collect()
    }

    /// All tasks, in collection order
    pub async fn all_tasks(&self) -> Result<Vec<Task>> {
        let docs = self.store.query_once(&Query::collection(TASKS)).await?;
        docs.iter().map(decode_task).collect()
    }

    /// All users, most recent signup first
    pub async fn all_users(&self) -> Result<Vec<User>> {
        let query = Query::collection(USERS).order_by("signupTime", Direction::Descending);
        let docs = self.store.query_once(&query).await?;
        docs.iter().map(decode_user).collect()
    }

    /// Number of tasks currently in a list
    pub async fn count_tasks_in_list(&self, id: &ListId) -> Result<usize> {
        let query = Query::collection(TASKS).where_eq("listId", id.as_str());
        Ok(self.store.query_once(&query).await?.len())
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Create a list owned by the operator
    pub async fn create_list(&self, name: &str) -> Result<List> {
        let fields = Fields::new()
            .set("name", name)
            .set("ownerId", self.operator.as_str())
            .touch("createdAt")
            .touch("updatedAt");
        let doc = self.store.create(LISTS, fields).await?;
        decode_list(&doc)
    }

    /// Create a task in a list, at the given rank
    pub async fn create_task(
        &self,
        list_id: &ListId,
        title: &str,
        description: &str,
        priority: Priority,
        order: u32,
    ) -> Result<Task> {
        let fields = Fields::new()
            .set("listId", list_id.as_str())
            .set("title", title)
            .set("description", description)
            .set("priority", priority.level())
            .set("order", order)
            .set("ownerId", self.operator.as_str())
            .touch("createdAt")
            .touch("updatedAt");
        let doc = self.store.create(TASKS, fields).await?;
        decode_task(&doc)
    }

    /// Bump a list's `updatedAt` marker
    pub async fn touch_list(&self, id: &ListId) -> Result<()> {
        let mut batch = WriteBatch::new();
        batch.update(
            LISTS,
            DocumentId::from_string(id.as_str()),
            Fields::new().touch("updatedAt"),
        );
        Ok(self.store.commit(batch).await?)
    }

    /// Commit a prepared batch atomically
    pub async fn commit(&self, batch: WriteBatch) -> Result<()> {
        Ok(self.store.commit(batch).await?)
    }
}

/// Push-based feed of the operator's task snapshot
pub struct TaskFeed {
    sub: Subscription,
}

impl TaskFeed {
    /// The most recently published snapshot
    pub fn current(&self) -> Result<TaskSnapshot> {
        let docs = self.sub.current();
        let tasks = docs.iter().map(decode_task).collect::<Result<Vec<_>>>()?;
        Ok(TaskSnapshot::new(tasks))
    }

    /// Wait for the next change; `None` once the store is gone
    pub async fn changed(&mut self) -> Option<Result<TaskSnapshot>> {
        let docs = self.sub.changed().await?;
        let tasks: Result<Vec<Task>> = docs.iter().map(decode_task).collect();
        Some(tasks.map(TaskSnapshot::new))
    }
}

/// Push-based feed of the operator's lists
pub struct ListFeed {
    sub: Subscription,
}

impl ListFeed {
    /// The most recently published lists
    pub fn current(&self) -> Result<Vec<List>> {
        self.sub.current().iter().map(decode_list).collect()
    }

    /// Wait for the next change; `None` once the store is gone
    pub async fn changed(&mut self) -> Option<Result<Vec<List>>> {
        let docs = self.sub.changed().await?;
        Some(docs.iter().map(decode_list).collect())
    }
}
