//! End-to-end drag-and-drop flows against the in-memory store

use std::sync::Arc;

use taskpanel::reorder::DropEvent;
use taskpanel::{
    list::AddList, task::AddTask, task::DropTask, Execute, ListId, PanelContext, Priority, TaskId,
    UserId,
};
use taskpanel_store::MemoryStore;

struct Board {
    store: Arc<MemoryStore>,
    ctx: PanelContext,
}

impl Board {
    async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let ctx = PanelContext::new(store.clone(), UserId::from("u1"));
        Self { store, ctx }
    }

    async fn add_list(&self, name: &str) -> ListId {
        let result = AddList::new(name).execute(&self.ctx).await.unwrap();
        ListId::from(result["id"].as_str().unwrap())
    }

    async fn add_task(&self, list: &ListId, title: &str) -> TaskId {
        let result = AddTask::new(list.clone(), title)
            .execute(&self.ctx)
            .await
            .unwrap();
        TaskId::from(result["id"].as_str().unwrap())
    }

    /// Titles in rank order for one list
    async fn titles(&self, list: &ListId) -> Vec<String> {
        let snapshot = self.ctx.load_tasks().await.unwrap();
        snapshot
            .in_list(list)
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    /// The set of ranks currently stored for one list
    async fn ranks(&self, list: &ListId) -> Vec<u32> {
        let snapshot = self.ctx.load_tasks().await.unwrap();
        snapshot
            .in_list(list)
            .iter()
            .map(|t| t.order_or_default())
            .collect()
    }
}

fn zone(list: &ListId) -> String {
    format!("list-{list}")
}

#[tokio::test]
async fn drag_to_front_rewrites_every_shifted_rank() {
    let board = Board::new().await;
    let l1 = board.add_list("L1").await;
    board.add_task(&l1, "T1").await;
    board.add_task(&l1, "T2").await;
    let t3 = board.add_task(&l1, "T3").await;

    DropTask::new(DropEvent::new(zone(&l1), 2, zone(&l1), 0, t3))
        .execute(&board.ctx)
        .await
        .unwrap();

    assert_eq!(board.titles(&l1).await, ["T3", "T1", "T2"]);
    assert_eq!(board.ranks(&l1).await, [0, 1, 2]);
}

#[tokio::test]
async fn ranks_stay_dense_across_many_drops() {
    let board = Board::new().await;
    let l1 = board.add_list("L1").await;
    let mut tasks = Vec::new();
    for i in 0..5 {
        tasks.push(board.add_task(&l1, &format!("T{i}")).await);
    }

    let moves = [(4usize, 0usize), (2, 3), (0, 4), (1, 1), (3, 2)];
    for (from, to) in moves {
        let snapshot = board.ctx.load_tasks().await.unwrap();
        let id = snapshot.in_list(&l1)[from].id.clone();
        DropTask::new(DropEvent::new(zone(&l1), from, zone(&l1), to, id))
            .execute(&board.ctx)
            .await
            .unwrap();

        assert_eq!(board.ranks(&l1).await, [0, 1, 2, 3, 4]);
    }
}

#[tokio::test]
async fn cross_list_move_updates_task_and_both_parents() {
    let board = Board::new().await;
    let l1 = board.add_list("L1").await;
    let l2 = board.add_list("L2").await;
    let t1 = board.add_task(&l1, "T1").await;
    board.add_task(&l1, "T2").await;
    board.add_task(&l2, "T4").await;

    let l1_before = board.ctx.read_list(&l1).await.unwrap().updated_at.unwrap();
    let l2_before = board.ctx.read_list(&l2).await.unwrap().updated_at.unwrap();

    DropTask::new(DropEvent::new(zone(&l1), 0, zone(&l2), 1, t1.clone()))
        .execute(&board.ctx)
        .await
        .unwrap();

    let moved = board.ctx.read_task(&t1).await.unwrap();
    assert_eq!(moved.list_id, l2);
    assert_eq!(moved.order_or_default(), 1);

    assert_eq!(board.titles(&l2).await, ["T4", "T1"]);
    assert_eq!(board.ranks(&l2).await, [0, 1]);
    // Only the destination is resequenced; the vacated list keeps its gap.
    assert_eq!(board.ranks(&l1).await, [1]);

    let l1_after = board.ctx.read_list(&l1).await.unwrap().updated_at.unwrap();
    let l2_after = board.ctx.read_list(&l2).await.unwrap().updated_at.unwrap();
    assert!(l1_after > l1_before);
    assert!(l2_after > l2_before);
}

#[tokio::test]
async fn list_updated_at_stays_ahead_of_its_tasks() {
    let board = Board::new().await;
    let l1 = board.add_list("L1").await;
    let t1 = board.add_task(&l1, "T1").await;
    board.add_task(&l1, "T2").await;

    DropTask::new(DropEvent::new(zone(&l1), 0, zone(&l1), 1, t1))
        .execute(&board.ctx)
        .await
        .unwrap();

    let list = board.ctx.read_list(&l1).await.unwrap();
    let snapshot = board.ctx.load_tasks().await.unwrap();
    let newest_task_change = snapshot
        .in_list(&l1)
        .iter()
        .filter_map(|t| t.updated_at)
        .max()
        .unwrap();
    assert!(list.updated_at.unwrap() >= newest_task_change);
}

#[tokio::test]
async fn failed_commit_leaves_every_record_untouched() {
    let board = Board::new().await;
    let l1 = board.add_list("L1").await;
    board.add_task(&l1, "T1").await;
    board.add_task(&l1, "T2").await;
    let t3 = board.add_task(&l1, "T3").await;

    let titles_before = board.titles(&l1).await;
    let list_before = board.ctx.read_list(&l1).await.unwrap();

    board.store.fail_next_commit();
    let err = DropTask::new(DropEvent::new(zone(&l1), 2, zone(&l1), 0, t3))
        .execute(&board.ctx)
        .await
        .unwrap_err();
    assert!(err.is_commit_failure());

    assert_eq!(board.titles(&l1).await, titles_before);
    assert_eq!(board.ranks(&l1).await, [0, 1, 2]);
    assert_eq!(
        board.ctx.read_list(&l1).await.unwrap().updated_at,
        list_before.updated_at
    );
}

#[tokio::test]
async fn priority_drop_then_reorder_keeps_both_fields() {
    let board = Board::new().await;
    let l1 = board.add_list("L1").await;
    let t1 = board.add_task(&l1, "T1").await;
    board.add_task(&l1, "T2").await;

    DropTask::new(DropEvent::new(
        zone(&l1),
        0,
        format!("priority-{l1}-High"),
        0,
        t1.clone(),
    ))
    .execute(&board.ctx)
    .await
    .unwrap();

    DropTask::new(DropEvent::new(zone(&l1), 0, zone(&l1), 1, t1.clone()))
        .execute(&board.ctx)
        .await
        .unwrap();

    let task = board.ctx.read_task(&t1).await.unwrap();
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.order_or_default(), 1);
}

#[tokio::test]
async fn live_feed_publishes_each_committed_arrangement() {
    let board = Board::new().await;
    let l1 = board.add_list("L1").await;
    let t1 = board.add_task(&l1, "T1").await;
    board.add_task(&l1, "T2").await;

    let mut feed = board.ctx.watch_tasks().await;
    assert_eq!(feed.current().unwrap().len(), 2);

    DropTask::new(DropEvent::new(zone(&l1), 0, zone(&l1), 1, t1))
        .execute(&board.ctx)
        .await
        .unwrap();

    let snapshot = feed.changed().await.unwrap().unwrap();
    let titles: Vec<String> = snapshot
        .in_list(&l1)
        .iter()
        .map(|t| t.title.clone())
        .collect();
    assert_eq!(titles, ["T2", "T1"]);
}
