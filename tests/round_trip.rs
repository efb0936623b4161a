use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tasklist::io::store_io::{load_tasks, save_tasks};
use tasklist::model::{Priority, Task, TaskStore};
use tempfile::TempDir;

fn task(priority: Priority, y: i32, m: u32, d: u32, hh: u32, mm: u32, lines: &[&str]) -> Task {
    let when = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, 0)
        .unwrap();
    Task::new(priority, when, lines.iter().map(|s| s.to_string()).collect())
}

/// Helper: save a store, load it back, and assert element-wise equality
fn assert_store_round_trip(store: &TaskStore) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tasklist.json");
    save_tasks(&path, store).unwrap();
    let loaded = load_tasks(&path);

    assert_eq!(loaded.len(), store.len());
    for (a, b) in loaded.iter().zip(store.iter()) {
        assert_eq!(a.priority(), b.priority());
        assert_eq!(a.iso_date_time(), b.iso_date_time());
        assert_eq!(a.lines(), b.lines());
    }
    assert_eq!(&loaded, store);
}

#[test]
fn round_trip_empty_store() {
    assert_store_round_trip(&TaskStore::new());
}

#[test]
fn round_trip_single_task() {
    assert_store_round_trip(&TaskStore::from(vec![task(
        Priority::High,
        2023,
        5,
        1,
        9,
        0,
        &["Buy milk"],
    )]));
}

#[test]
fn round_trip_many_tasks_with_multiline_bodies() {
    assert_store_round_trip(&TaskStore::from(vec![
        task(Priority::Critical, 2023, 1, 31, 23, 59, &["Pay rent", "before midnight"]),
        task(Priority::Normal, 2024, 2, 29, 0, 0, &["Leap day"]),
        task(
            Priority::Low,
            1999,
            12,
            31,
            12,
            30,
            &["Unicode: café, 日本語", "quotes \"inside\"", "tab\tin line"],
        ),
        task(Priority::High, 2030, 6, 15, 7, 5, &["a", "b", "c", "d"]),
    ]));
}

#[test]
fn round_trip_keeps_seconds() {
    let when = NaiveDate::from_ymd_opt(2023, 5, 1)
        .unwrap()
        .and_hms_opt(9, 0, 42)
        .unwrap();
    let store = TaskStore::from(vec![Task::new(Priority::Normal, when, vec!["x".into()])]);
    assert_store_round_trip(&store);
}

#[test]
fn round_trip_blank_task_from_edit() {
    // Edits can empty a body; such a task must still persist.
    let edited = task(Priority::Low, 2023, 5, 1, 9, 0, &["gone"]).with_lines(Vec::new());
    assert_store_round_trip(&TaskStore::from(vec![edited]));
}
