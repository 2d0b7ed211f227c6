mod common;

use common::{date, ids};
use std::sync::Arc;
use todo_mcp::{Priority, Todo, TodoStore};

// 連続したaddでIDが重複せず単調増加することを確認
// Ids handed out by consecutive adds are distinct and strictly increasing
#[test]
fn test_add_ids_unique_and_increasing() {
    let mut store = TodoStore::with_sample_data();
    let mut allocated = Vec::new();

    for i in 0..20 {
        let todo = store
            .add(format!("Task {}", i), date(2024, 5, 10), None)
            .unwrap();
        allocated.push(todo.id);
        // Delete every third todo to make sure removal never frees an id
        if i % 3 == 0 {
            store.remove(todo.id);
        }
    }

    assert!(allocated.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(allocated[0], 5);
    assert_eq!(store.next_id(), 25);

    let mut seen = ids(&store);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), store.len());
}

// addは先頭に追加し、既存の順序を保つことを確認
// add prepends and keeps the relative order of existing todos
#[test]
fn test_add_prepends() {
    let mut store = TodoStore::with_sample_data();
    let todo = store
        .add("Buy milk", date(2024, 5, 10), Some(Priority::medium))
        .unwrap();

    assert_eq!(ids(&store), vec![5, 4, 3, 2, 1]);
    assert_eq!(store.todos()[0], todo);
    assert!(!todo.checked);
    assert_eq!(todo.datetime, Some(date(2024, 5, 10)));
}

// updateは4フィールドのみ変更し、IDと位置を保つことを確認
// update changes only the four mutable fields; id and position stay put
#[test]
fn test_update_preserves_identity_and_position() {
    let mut store = TodoStore::with_sample_data();
    let before = store.snapshot();

    let changed = Todo {
        id: 2,
        text: "Renamed".to_string(),
        datetime: Some(date(2024, 6, 1)),
        checked: true,
        priority: None,
    };
    assert_eq!(store.update(&changed), Some(()));

    assert_eq!(ids(&store), vec![4, 3, 2, 1]);
    assert_eq!(store.todos()[2], changed);
    // Everything else is untouched
    for pos in [0, 1, 3] {
        assert_eq!(store.todos()[pos], before[pos]);
    }
}

// 存在しないIDのupdateは何もしないことを確認
// update of an unknown id is a silent no-op
#[test]
fn test_update_unknown_id_is_noop() {
    let mut store = TodoStore::with_sample_data();
    let before = store.snapshot();
    let ghost = Todo {
        id: 42,
        text: "Ghost".to_string(),
        datetime: Some(date(2024, 6, 1)),
        checked: false,
        priority: None,
    };

    assert_eq!(store.update(&ghost), None);
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.revision(), 0);
}

// removeで対象が完全に消え、他の順序が変わらないことを確認
// remove deletes the id and keeps everything else in order
#[test]
fn test_remove_completeness() {
    let mut store = TodoStore::with_sample_data();
    let removed = store.remove(3).unwrap();

    assert_eq!(removed.text, "Task 1");
    assert!(store.get(3).is_none());
    assert_eq!(ids(&store), vec![4, 2, 1]);

    // Removing again changes nothing
    assert!(store.remove(3).is_none());
    assert_eq!(store.len(), 3);
}

// set_checkedは位置を変えずにフラグのみ変更することを確認
// set_checked flips the flag in place
#[test]
fn test_set_checked_in_place() {
    let mut store = TodoStore::with_sample_data();
    assert_eq!(store.set_checked(3, true), Some(()));
    assert_eq!(store.set_checked(1, false), Some(()));

    assert_eq!(ids(&store), vec![4, 3, 2, 1]);
    assert!(store.get(3).unwrap().checked);
    assert!(!store.get(1).unwrap().checked);
}

// reorderの全組み合わせで要素が重複・欠落しないことを確認
// reorder moves exactly one element for every (from, to) pair
#[test]
fn test_reorder_all_pairs() {
    let base = TodoStore::with_sample_data();
    let original = ids(&base);
    let len = original.len();

    for from in 0..len {
        for to in 0..len {
            let mut store = base.clone();
            assert_eq!(store.reorder(from, Some(to)), Some(()));

            let mut expected = original.clone();
            let moved = expected.remove(from);
            expected.insert(to, moved);

            let result = ids(&store);
            assert_eq!(result, expected, "from={} to={}", from, to);
            assert_eq!(result[to], original[from]);

            let mut sorted = result.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3, 4]);
        }
    }
}

// ドロップ先が無い・範囲外の場合は何もしないことを確認
// A cancelled drag or an out-of-range index leaves the list alone
#[test]
fn test_reorder_cancelled() {
    let mut store = TodoStore::with_sample_data();
    assert_eq!(store.reorder(1, None), None);
    assert_eq!(store.reorder(1, Some(4)), None);
    assert_eq!(store.reorder(4, Some(0)), None);
    assert_eq!(ids(&store), vec![4, 3, 2, 1]);
    assert_eq!(store.revision(), 0);
}

// 先頭を末尾へ移動する具体例
#[test]
fn test_reorder_front_to_back() {
    let mut store = TodoStore::with_sample_data();
    store.reorder(0, Some(3));
    assert_eq!(ids(&store), vec![3, 2, 1, 4]);
}

// シードデータからのエンドツーエンドシナリオ
// Seed → add → remove, as a user would do it
#[test]
fn test_end_to_end_scenario() {
    let mut store = TodoStore::with_sample_data();
    assert_eq!(ids(&store), vec![4, 3, 2, 1]);
    assert_eq!(store.next_id(), 5);

    store.add("Buy milk", date(2024, 5, 10), Some(Priority::medium));
    let front = &store.todos()[0];
    assert_eq!(front.id, 5);
    assert!(!front.checked);
    assert_eq!(store.next_id(), 6);

    let len_before = store.len();
    store.remove(2);
    assert_eq!(store.len(), len_before - 1);
    assert!(store.todos().iter().all(|t| t.id != 2));
    assert_eq!(ids(&store), vec![5, 4, 3, 1]);
}

// 変更ごとに新しいスナップショットが公開されることを確認
// Every effective mutation publishes a new snapshot
#[test]
fn test_each_mutation_publishes_new_snapshot() {
    let mut store = TodoStore::with_sample_data();
    let mut last = store.snapshot();

    store.add("a", date(2024, 5, 10), None);
    assert!(!Arc::ptr_eq(&last, &store.snapshot()));
    last = store.snapshot();

    store.set_checked(5, true);
    assert!(!Arc::ptr_eq(&last, &store.snapshot()));
    last = store.snapshot();

    store.reorder(0, Some(1));
    assert!(!Arc::ptr_eq(&last, &store.snapshot()));
    last = store.snapshot();

    store.remove(5);
    assert!(!Arc::ptr_eq(&last, &store.snapshot()));
    assert_eq!(store.revision(), 4);
}
