use burrow::ipc::{DirectoryQueue, DropEntry, DropQueue, DropRequest, TaskRef, write_atomic};
use tempfile::TempDir;

fn cancel(task_id: &str) -> DropEntry {
    DropEntry::now(DropRequest::CancelTask(TaskRef {
        task_id: task_id.into(),
        group_folder: "main".into(),
        is_main: true,
    }))
}

#[test]
fn writer_killed_before_rename_leaves_nothing_visible() {
    let tmp = TempDir::new().unwrap();
    let queue = DirectoryQueue::new(tmp.path());

    // What a writer leaves behind when it dies between write and rename.
    let full = serde_json::to_vec_pretty(&cancel("t-1")).unwrap();
    std::fs::write(
        tmp.path().join("1760000000000-abcdef.json.tmp"),
        &full[..full.len() / 2],
    )
    .unwrap();

    assert!(queue.drain().unwrap().is_empty());

    let name = queue.enqueue(&cancel("t-2")).unwrap();
    let drained = queue.drain().unwrap();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].name, name);
    assert!(drained[0].entry.is_ok());
}

#[test]
fn failed_rename_cleans_up_staging_file() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("occupied.json");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("keep"), b"x").unwrap();

    assert!(write_atomic(&target, b"{}").is_err());
    assert!(!tmp.path().join("occupied.json.tmp").exists());
    assert!(target.is_dir());
}

#[test]
fn replacement_is_all_or_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("context.json");

    write_atomic(&path, br#"{"groupFolder":"first"}"#).unwrap();
    write_atomic(&path, br#"{"groupFolder":"second"}"#).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        r#"{"groupFolder":"second"}"#
    );
    assert!(!tmp.path().join("context.json.tmp").exists());
}

#[test]
fn every_completed_file_decodes() {
    let tmp = TempDir::new().unwrap();
    let queue = DirectoryQueue::new(tmp.path().join("tasks"));
    for i in 0..25 {
        queue.enqueue(&cancel(&format!("t-{i}"))).unwrap();
    }

    let drained = queue.drain().unwrap();
    assert_eq!(drained.len(), 25);
    assert!(drained.iter().all(|d| d.entry.is_ok()));
    let leftovers = std::fs::read_dir(queue.dir())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
}
