//! Point-in-time task snapshots.
//!
//! The reorder planner works on an explicit snapshot rather than shared
//! view-state: callers materialize one from a query or live feed and pass it
//! in, which keeps the planner pure and testable.

use crate::types::{ListId, Task, TaskId};

/// A materialized set of tasks, typically all tasks of one owner
#[derive(Debug, Clone, Default)]
pub struct TaskSnapshot {
    tasks: Vec<Task>,
}

impl TaskSnapshot {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Find a task by id
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Tasks belonging to a list, ascending by rank. Missing ranks sort as 0;
    /// the sort is stable so legacy records keep their relative placement.
    pub fn in_list(&self, list_id: &ListId) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| &t.list_id == list_id)
            .collect();
        tasks.sort_by_key(|t| t.order_or_default());
        tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}
