use myownwebserver::log::{EventLog, FileLog, MemoryLog};
use std::path::PathBuf;

fn log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("myownwebserver-{}-{}.log", name, std::process::id()))
}

#[test]
fn test_file_log_truncates_on_create() {
    let path = log_path("truncate");
    std::fs::write(&path, "stale entry\n").unwrap();

    let log = FileLog::create(&path).unwrap();

    assert_eq!(log.path(), path.as_path());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_file_log_appends_timestamped_lines() {
    let path = log_path("append");
    let log = FileLog::create(&path).unwrap();

    log.write("[REQUEST]  - verb=GET resource=/index.html");
    log.write("[RESPONSE] - Status Code=404 Not Found");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    // yyyy-MM-dd HH:mm:ss
    let (stamp, entry) = lines[0].split_at(19);
    assert_eq!(stamp.len(), 19);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[10..11], " ");
    assert_eq!(&stamp[13..14], ":");
    assert_eq!(entry, " [REQUEST]  - verb=GET resource=/index.html");
    assert!(lines[1].ends_with(" [RESPONSE] - Status Code=404 Not Found"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_file_log_write_failure_is_swallowed() {
    let dir = std::env::temp_dir().join(format!("myownwebserver-gone-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let log = FileLog::create(dir.join("server.log")).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    // Parent directory is gone; the write is reported, not raised.
    log.write("[ERROR] - An error occurred..");
}

#[test]
fn test_memory_log_keeps_order() {
    let log = MemoryLog::new();
    log.write("first");
    log.write("second");

    assert_eq!(log.lines(), vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn test_event_log_is_object_safe() {
    let log: Box<dyn EventLog> = Box::new(MemoryLog::new());
    log.write("[SERVER STARTED] - webRoot=/srv webIP=127.0.0.1 webPort=80");
}
