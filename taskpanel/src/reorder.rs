//! Drag-and-drop reorder/reprioritize planning.
//!
//! One drop gesture becomes a [`DropPlan`]: the minimal set of task field
//! changes plus the parent lists whose `updatedAt` must be bumped. Planning
//! is pure — it reads an explicit [`TaskSnapshot`] and stages nothing — so
//! every gesture outcome is testable without a store. Committing a plan is
//! the caller's job (see [`DropTask`]) and happens in one atomic batch.
//!
//! Expected, frequent conditions (no destination, drop onto the original
//! slot, malformed zone name, unknown task) are no-ops, not errors: the
//! planner returns `None` and nothing is written.
//!
//! [`DropTask`]: crate::task::DropTask

use serde::Deserialize;

use crate::snapshot::TaskSnapshot;
use crate::types::{ListId, Priority, TaskId};
use crate::zone::Zone;

/// One drag-and-drop gesture as reported by the presentation layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    /// Zone the task was dragged from
    pub source_zone: String,
    /// Zone the task was dropped into; `None` when the drop target was invalid
    pub dest_zone: Option<String>,
    /// Position within the source zone's visible sequence
    pub source_index: usize,
    /// Position within the destination zone's visible sequence
    pub dest_index: usize,
    /// The task being moved
    pub task_id: TaskId,
}

impl DropEvent {
    pub fn new(
        source_zone: impl Into<String>,
        source_index: usize,
        dest_zone: impl Into<String>,
        dest_index: usize,
        task_id: impl Into<TaskId>,
    ) -> Self {
        Self {
            source_zone: source_zone.into(),
            dest_zone: Some(dest_zone.into()),
            source_index,
            dest_index,
            task_id: task_id.into(),
        }
    }

    /// A gesture released outside any drop target
    pub fn without_destination(
        source_zone: impl Into<String>,
        source_index: usize,
        task_id: impl Into<TaskId>,
    ) -> Self {
        Self {
            source_zone: source_zone.into(),
            dest_zone: None,
            source_index,
            dest_index: 0,
            task_id: task_id.into(),
        }
    }
}

/// Staged field changes for one task. Only fields that actually differ from
/// the stored record are set; `updatedAt` is touched on commit regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskChange {
    pub id: TaskId,
    pub order: Option<u32>,
    pub priority: Option<Priority>,
    pub list_id: Option<ListId>,
}

impl TaskChange {
    fn for_task(id: TaskId) -> Self {
        Self {
            id,
            order: None,
            priority: None,
            list_id: None,
        }
    }
}

/// The computed outcome of one drop gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DropPlan {
    /// Tasks whose fields change, minimal-diff
    pub task_changes: Vec<TaskChange>,
    /// Parent lists whose `updatedAt` is bumped; ordered, de-duplicated
    pub touched_lists: Vec<ListId>,
}

/// Translate one drop gesture into a plan against the given snapshot.
///
/// Returns `None` for every no-op condition; a returned plan always has at
/// least one touched list.
pub fn plan_drop(event: &DropEvent, snapshot: &TaskSnapshot) -> Option<DropPlan> {
    let dest_zone = event.dest_zone.as_deref()?;

    if dest_zone == event.source_zone && event.dest_index == event.source_index {
        tracing::debug!(zone = dest_zone, index = event.dest_index, "drop on own slot");
        return None;
    }

    let Some(moved) = snapshot.get(&event.task_id) else {
        tracing::debug!(task = %event.task_id, "dropped task not in snapshot");
        return None;
    };

    match Zone::parse(dest_zone)? {
        Zone::Priority { list_id, level } => {
            // The unscoped zone form names no list; the task stays where it
            // is, so its own list is the one that changed.
            let parent = list_id.unwrap_or_else(|| moved.list_id.clone());

            let mut task_changes = Vec::new();
            if moved.priority != level {
                let mut change = TaskChange::for_task(moved.id.clone());
                change.priority = Some(level);
                task_changes.push(change);
            }

            Some(DropPlan {
                task_changes,
                touched_lists: vec![parent],
            })
        }
        Zone::List(dest_list) => {
            let source_list = match Zone::parse(&event.source_zone)? {
                Zone::List(id) => id,
                // Priority zones are drop-only targets; a gesture claiming to
                // start in one did not come from the rendered board.
                Zone::Priority { .. } => return None,
            };

            // Rebuild the destination sequence as the operator now sees it.
            let mut sequence = snapshot.in_list(&dest_list);
            if source_list == dest_list && event.source_index < sequence.len() {
                sequence.remove(event.source_index);
            }
            let insert_at = event.dest_index.min(sequence.len());
            sequence.insert(insert_at, moved);

            let mut task_changes: Vec<TaskChange> = Vec::new();
            let cross_list = moved.list_id != dest_list;

            if cross_list {
                let mut change = TaskChange::for_task(moved.id.clone());
                change.list_id = Some(dest_list.clone());
                task_changes.push(change);
            }

            // Reassign dense ranks, writing only where the stored rank
            // (missing = 0) differs from the new positional index.
            for (index, task) in sequence.iter().enumerate() {
                let index = index as u32;
                if task.order_or_default() == index {
                    continue;
                }
                let position = task_changes.iter().position(|c| c.id == task.id);
                let change = match position {
                    Some(p) => &mut task_changes[p],
                    None => {
                        task_changes.push(TaskChange::for_task(task.id.clone()));
                        let last = task_changes.len() - 1;
                        &mut task_changes[last]
                    }
                };
                change.order = Some(index);
            }

            let mut touched_lists = Vec::new();
            if cross_list {
                touched_lists.push(source_list);
            }
            if !touched_lists.contains(&dest_list) {
                touched_lists.push(dest_list);
            }

            Some(DropPlan {
                task_changes,
                touched_lists,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Task, UserId};

    fn task(id: &str, list: &str, order: u32, priority: Priority) -> Task {
        Task {
            id: TaskId::from(id),
            list_id: ListId::from(list),
            title: id.to_string(),
            description: String::new(),
            priority,
            order: Some(order),
            owner_id: UserId::from("u1"),
            due_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn three_task_board() -> TaskSnapshot {
        TaskSnapshot::new(vec![
            task("t1", "l1", 0, Priority::Medium),
            task("t2", "l1", 1, Priority::Medium),
            task("t3", "l1", 2, Priority::Medium),
        ])
    }

    fn order_of(plan: &DropPlan, id: &str) -> Option<u32> {
        plan.task_changes
            .iter()
            .find(|c| c.id.as_str() == id)
            .and_then(|c| c.order)
    }

    #[test]
    fn test_missing_destination_is_noop() {
        let event = DropEvent::without_destination("list-l1", 0, "t1");
        assert_eq!(plan_drop(&event, &three_task_board()), None);
    }

    #[test]
    fn test_drop_on_own_slot_is_noop() {
        let event = DropEvent::new("list-l1", 1, "list-l1", 1, "t2");
        assert_eq!(plan_drop(&event, &three_task_board()), None);
    }

    #[test]
    fn test_unknown_task_is_noop() {
        let event = DropEvent::new("list-l1", 0, "list-l1", 2, "ghost");
        assert_eq!(plan_drop(&event, &three_task_board()), None);
    }

    #[test]
    fn test_malformed_zones_are_noops() {
        let snapshot = three_task_board();
        let bad_dest = DropEvent::new("list-l1", 0, "priority-l1-Urgent", 0, "t1");
        assert_eq!(plan_drop(&bad_dest, &snapshot), None);

        let bad_source = DropEvent::new("shelf-l1", 0, "list-l1", 2, "t1");
        assert_eq!(plan_drop(&bad_source, &snapshot), None);
    }

    #[test]
    fn test_reorder_within_list_to_front() {
        // [t1, t2, t3], drag t3 to index 0 -> t3=0, t1=1, t2=2.
        let event = DropEvent::new("list-l1", 2, "list-l1", 0, "t3");
        let plan = plan_drop(&event, &three_task_board()).unwrap();

        assert_eq!(order_of(&plan, "t3"), Some(0));
        assert_eq!(order_of(&plan, "t1"), Some(1));
        assert_eq!(order_of(&plan, "t2"), Some(2));
        assert_eq!(plan.task_changes.len(), 3);
        assert_eq!(plan.touched_lists, vec![ListId::from("l1")]);
        assert!(plan.task_changes.iter().all(|c| c.list_id.is_none()));
    }

    #[test]
    fn test_reorder_minimal_diff_leaves_unmoved_tasks_alone() {
        // [t1, t2, t3], drag t2 to the end -> only t2 and t3 change rank.
        let event = DropEvent::new("list-l1", 1, "list-l1", 2, "t2");
        let plan = plan_drop(&event, &three_task_board()).unwrap();

        assert_eq!(order_of(&plan, "t3"), Some(1));
        assert_eq!(order_of(&plan, "t2"), Some(2));
        assert_eq!(plan.task_changes.len(), 2);
        assert!(order_of(&plan, "t1").is_none());
    }

    #[test]
    fn test_reorder_assigns_dense_ranks() {
        let snapshot = TaskSnapshot::new(vec![
            task("t1", "l1", 0, Priority::Medium),
            task("t2", "l1", 1, Priority::Medium),
            task("t3", "l1", 2, Priority::Medium),
            task("t4", "l1", 3, Priority::Medium),
        ]);
        let event = DropEvent::new("list-l1", 3, "list-l1", 1, "t4");
        let plan = plan_drop(&event, &snapshot).unwrap();

        // New sequence t1, t4, t2, t3: ranks {0,1,2,3} with t1 untouched.
        assert_eq!(order_of(&plan, "t4"), Some(1));
        assert_eq!(order_of(&plan, "t2"), Some(2));
        assert_eq!(order_of(&plan, "t3"), Some(3));
        assert!(order_of(&plan, "t1").is_none());
    }

    #[test]
    fn test_cross_list_move_touches_both_parents() {
        // L1 = [t1, t2], L2 = [t4]; move t1 into L2 at index 1.
        let snapshot = TaskSnapshot::new(vec![
            task("t1", "l1", 0, Priority::Medium),
            task("t2", "l1", 1, Priority::Medium),
            task("t4", "l2", 0, Priority::Medium),
        ]);
        let event = DropEvent::new("list-l1", 0, "list-l2", 1, "t1");
        let plan = plan_drop(&event, &snapshot).unwrap();

        let moved = plan
            .task_changes
            .iter()
            .find(|c| c.id.as_str() == "t1")
            .unwrap();
        assert_eq!(moved.list_id, Some(ListId::from("l2")));
        assert_eq!(moved.order, Some(1));

        // t4 keeps rank 0; no write for it.
        assert!(order_of(&plan, "t4").is_none());
        assert_eq!(
            plan.touched_lists,
            vec![ListId::from("l1"), ListId::from("l2")]
        );
    }

    #[test]
    fn test_priority_drop_changes_level() {
        let event = DropEvent::new("list-l1", 1, "priority-l1-High", 0, "t2");
        let plan = plan_drop(&event, &three_task_board()).unwrap();

        assert_eq!(plan.task_changes.len(), 1);
        let change = &plan.task_changes[0];
        assert_eq!(change.priority, Some(Priority::High));
        assert_eq!(change.order, None);
        assert_eq!(change.list_id, None);
        assert_eq!(plan.touched_lists, vec![ListId::from("l1")]);
    }

    #[test]
    fn test_priority_drop_already_at_level_writes_no_task() {
        let snapshot = TaskSnapshot::new(vec![task("t2", "l1", 0, Priority::High)]);
        let event = DropEvent::new("list-l1", 0, "priority-l1-High", 0, "t2");
        let plan = plan_drop(&event, &snapshot).unwrap();

        // The parent list is still touched, per the list-scoped variant.
        assert!(plan.task_changes.is_empty());
        assert_eq!(plan.touched_lists, vec![ListId::from("l1")]);
    }

    #[test]
    fn test_unscoped_priority_zone_touches_own_list() {
        let event = DropEvent::new("list-l1", 1, "priority-High", 0, "t2");
        let plan = plan_drop(&event, &three_task_board()).unwrap();

        assert_eq!(plan.task_changes[0].priority, Some(Priority::High));
        assert_eq!(plan.touched_lists, vec![ListId::from("l1")]);
    }

    #[test]
    fn test_legacy_missing_order_sorts_first_and_gets_rank() {
        let mut legacy = task("t0", "l1", 0, Priority::Low);
        legacy.order = None;
        let snapshot = TaskSnapshot::new(vec![legacy, task("t1", "l1", 1, Priority::Low)]);

        // Move t1 to the front: new sequence t1, t0 -> t1=0, t0=1.
        let event = DropEvent::new("list-l1", 1, "list-l1", 0, "t1");
        let plan = plan_drop(&event, &snapshot).unwrap();
        assert_eq!(order_of(&plan, "t1"), Some(0));
        assert_eq!(order_of(&plan, "t0"), Some(1));
    }

    #[test]
    fn test_dest_index_past_end_clamps() {
        let event = DropEvent::new("list-l1", 0, "list-l1", 99, "t1");
        let plan = plan_drop(&event, &three_task_board()).unwrap();

        // t1 lands at the end: t2=0, t3=1, t1=2.
        assert_eq!(order_of(&plan, "t2"), Some(0));
        assert_eq!(order_of(&plan, "t3"), Some(1));
        assert_eq!(order_of(&plan, "t1"), Some(2));
    }
}
