//! Save files: writing them, and reading them back

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use jotter::codec;
use jotter::storage::SaveFormat;
use jotter::task::{DeadlineTask, EventTask, PlainTask};
use jotter::{Storage, Task, TaskError, TaskList};


fn scratch_file(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// A list whose instants are all on the hour, so that it survives a round-trip through the lines format
fn on_hour_list() -> TaskList {
    let mut list = TaskList::new();
    list.add_plain("read book".to_string());
    list.add_deadline("submit report".to_string(), "2025-08-30 18:00").unwrap();
    list.add_event("meeting".to_string(), "2025-08-30 14:00", "2025-08-30 16:00").unwrap();
    list.add_event("conference".to_string(), "2025-12-31 23:00", "2026-01-02 00:00").unwrap();
    list.add_plain("go to: the (by: mall)".to_string());
    list.add_plain(String::new());
    list.mark(0);
    list.mark(3);
    list
}

#[test]
fn test_deadline_round_trip() {
    let task = Task::from(DeadlineTask::new("submit report".to_string(), "2025-08-30 18:00").unwrap());
    let line = codec::build_from(&task);
    assert_eq!(line, "[D][ ] submit report (by: Aug 30 2025 6pm)");

    let parsed = codec::parse(&line).unwrap();
    match &parsed {
        Task::Deadline(d) => {
            assert_eq!(d.date(), NaiveDate::from_ymd_opt(2025, 8, 30).unwrap());
            assert_eq!(d.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        },
        other => panic!("Expected a deadline, got {:?}", other),
    }
    assert_eq!(parsed, task);
}

#[test]
fn test_every_kind_round_trips() {
    for task in on_hour_list().iter() {
        let parsed = codec::parse(&codec::build_from(task));
        assert_eq!(parsed.as_ref(), Some(task));
    }

    let mut event = Task::from(EventTask::new("trip".to_string(), "2025-08-22 14:00", "2025-08-25 23:00").unwrap());
    event.mark_done();
    assert_eq!(codec::parse(&codec::build_from(&event)), Some(event));

    let plain = Task::from(PlainTask::new("Task with special chars: !@#$%^&*()".to_string()));
    assert_eq!(codec::parse(&codec::build_from(&plain)), Some(plain));
}

#[test]
fn test_minutes_are_lost() {
    let task = Task::from(DeadlineTask::new("submit report".to_string(), "2025-08-30 18:30").unwrap());
    let line = codec::build_from(&task);
    assert_eq!(line, "[D][ ] submit report (by: Aug 30 2025 6pm)");

    let parsed = codec::parse(&line).unwrap();
    assert_ne!(parsed, task);
    match &parsed {
        Task::Deadline(d) => assert_eq!(d.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
        other => panic!("Expected a deadline, got {:?}", other),
    }
}

#[test]
fn test_save_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");
    let storage = Storage::new(&path, SaveFormat::Lines);

    let list = on_hour_list();
    storage.save(&list).unwrap();
    let first = std::fs::read(&path).unwrap();

    let reloaded = storage.load().unwrap();
    assert_eq!(reloaded, list);
    storage.save(&reloaded).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_saved_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");
    let storage = Storage::new(&path, SaveFormat::Lines);

    let mut list = TaskList::new();
    list.add_plain("read book".to_string());
    list.add_deadline("submit report".to_string(), "2025-08-30 18:00").unwrap();
    list.add_event("meeting".to_string(), "2025-08-30 14:00", "2025-08-30 16:00").unwrap();
    list.mark(0);
    storage.save(&list).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(),
        "[T][X] read book\n\
         [D][ ] submit report (by: Aug 30 2025 6pm)\n\
         [E][ ] meeting (from: Aug 30 2025 2pm to: Aug 30 2025 4pm)\n");

    // Saving overwrites the whole file
    list.delete(2).unwrap();
    list.delete(1).unwrap();
    storage.save(&list).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[T][X] read book\n");
}

#[test]
fn test_save_empty_list_creates_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");
    Storage::new(&path, SaveFormat::Lines).save(&TaskList::new()).unwrap();

    assert!(path.exists());
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");
    std::fs::write(&path, "garbage\n[T][X] ok\n\n[T] bad\n").unwrap();

    let list = Storage::new(&path, SaveFormat::Lines).load().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap().description(), "ok");
    assert_eq!(list.get(0).unwrap().is_done(), true);
}

#[test]
fn test_corrupted_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");
    std::fs::write(&path,
        "invalid line 1\n\
         [T] missing status bracket\n\
         [X][T] wrong order\n\
         [T][X] valid todo task\n\
         [D][ ] unknown month (by: Foo 30 2025 6pm)\n\
         [E][X] meeting (from: Aug 30 2025 2pm to: Aug 30 2025 4pm)\n\
         another invalid line\n").unwrap();

    let list = Storage::new(&path, SaveFormat::Lines).load().unwrap();
    let descriptions: Vec<&str> = list.iter().map(|t| t.description()).collect();
    assert_eq!(descriptions, vec!["valid todo task", "meeting"]);
}

#[test]
fn test_missing_and_empty_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");

    for format in &[SaveFormat::Lines, SaveFormat::Json] {
        let storage = Storage::new(&path, *format);
        assert!(storage.load().unwrap().is_empty());
    }

    std::fs::write(&path, "").unwrap();
    for format in &[SaveFormat::Lines, SaveFormat::Json] {
        let storage = Storage::new(&path, *format);
        assert!(storage.load().unwrap().is_empty());
    }
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does").join("not").join("exist.txt");
    let storage = Storage::new(&path, SaveFormat::Lines);

    match storage.save(&on_hour_list()) {
        Err(TaskError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_unreadable_file_degrades_to_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be read as a file
    let storage = Storage::new(dir.path(), SaveFormat::Lines);

    assert!(matches!(storage.load(), Err(TaskError::Io { .. })));
    assert!(storage.load_or_default().is_empty());
}

#[test]
fn test_json_format_keeps_minutes() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.json");
    let storage = Storage::new(&path, SaveFormat::Json);

    let mut list = TaskList::new();
    list.add_deadline("submit assignment".to_string(), "2025-08-30 23:59").unwrap();
    list.add_event("meeting".to_string(), "2025-08-30 14:15", "2025-08-30 16:45").unwrap();
    list.mark(1);
    storage.save(&list).unwrap();

    assert_eq!(storage.load().unwrap(), list);
}

#[test]
fn test_json_format_reads_legacy_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");
    std::fs::write(&path, "[T][X] read book\n[D][ ] submit report (by: Aug 30 2025 6pm)\n").unwrap();

    let storage = Storage::new(&path, SaveFormat::Json);
    let list = storage.load().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).unwrap().to_string(), "[D][ ] submit report (by: Aug 30 2025 6pm)");

    // The next save upgrades the file
    storage.save(&list).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.trim_start().starts_with('['));
    assert_eq!(storage.load().unwrap(), list);
}

#[test]
fn test_invalid_utf8_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");
    std::fs::write(&path, b"[T][X] ok\n[T][ ] bad \xff\xfe byte\n[T][ ] second\n").unwrap();

    for format in &[SaveFormat::Lines, SaveFormat::Json] {
        let storage = Storage::new(&path, *format);
        let list = storage.load().unwrap();
        let descriptions: Vec<&str> = list.iter().map(|t| t.description()).collect();
        assert_eq!(descriptions, vec!["ok", "second"]);
        assert_eq!(storage.load_or_default(), list);
    }

    // Starting a session on that file and changing it keeps the valid tasks
    let mut session = jotter::Session::new(Storage::new(&path, SaveFormat::Lines));
    session.respond("todo third");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[T][X] ok\n[T][ ] second\n[T][ ] third\n");
}

#[test]
fn test_lines_format_reads_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.json");

    let mut list = TaskList::new();
    list.add_plain("read book".to_string());
    list.add_deadline("submit assignment".to_string(), "2025-08-30 23:59").unwrap();
    Storage::new(&path, SaveFormat::Json).save(&list).unwrap();

    let storage = Storage::new(&path, SaveFormat::Lines);
    assert_eq!(storage.load().unwrap(), list);

    storage.save(&list).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(),
        "[T][ ] read book\n\
         [D][ ] submit assignment (by: Aug 30 2025 11pm)\n");
}

#[test]
fn test_surrounding_whitespace_does_not_break_idempotence() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "tasks.txt");
    let storage = Storage::new(&path, SaveFormat::Lines);

    let mut list = TaskList::new();
    list.add_plain("a ".to_string());
    list.add_plain(" line\n".to_string());
    list.add_deadline("  report\t".to_string(), "2025-08-30 18:00").unwrap();
    storage.save(&list).unwrap();
    let first = std::fs::read(&path).unwrap();

    let reloaded = storage.load().unwrap();
    assert_eq!(reloaded, list);
    storage.save(&reloaded).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[cfg(target_os = "linux")]
#[test]
fn test_json_write_failure_is_an_io_error() {
    // Every write to this device fails for lack of space
    let path = PathBuf::from("/dev/full");
    let mut list = TaskList::new();
    for i in 0..500 {
        list.add_plain(format!("a task with a rather long description, number {}", i));
    }

    for format in &[SaveFormat::Json, SaveFormat::Lines] {
        match Storage::new(&path, *format).save(&list) {
            Err(TaskError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected an I/O error, got {:?}", other),
        }
    }
}
