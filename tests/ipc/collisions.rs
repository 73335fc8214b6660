use burrow::ipc::{DirectoryQueue, DropEntry, DropQueue, DropRequest};
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;

const WRITERS: usize = 8;
const PER_WRITER: usize = 50;

#[test]
fn concurrent_writers_never_clobber_each_other() {
    let tmp = TempDir::new().unwrap();
    let queue = Arc::new(DirectoryQueue::new(tmp.path().join("messages")));

    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let queue = Arc::clone(&queue);
            std::thread::spawn(move || {
                (0..PER_WRITER)
                    .map(|i| {
                        queue
                            .enqueue(&DropEntry::now(DropRequest::Message {
                                chat_jid: "family@g.us".into(),
                                text: format!("{writer}:{i}"),
                                group_folder: "family".into(),
                            }))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let names: HashSet<String> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(names.len(), WRITERS * PER_WRITER);

    let drained = queue.drain().unwrap();
    assert_eq!(drained.len(), WRITERS * PER_WRITER);

    let texts: HashSet<String> = drained
        .into_iter()
        .map(|d| match d.entry.unwrap().request {
            DropRequest::Message { text, .. } => text,
            other => panic!("unexpected entry {}", other.kind()),
        })
        .collect();
    assert_eq!(texts.len(), WRITERS * PER_WRITER);
}
