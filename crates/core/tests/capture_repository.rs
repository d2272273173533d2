use std::fs;
use std::path::Path;

use mdsplice_core::captures::{CaptureRepoError, CaptureRepository};
use tempfile::tempdir;

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

const INBOX: &str = r####"
name: inbox
target:
  file: "notes.md"
  insert_after:
    after: "## Inbox"
content: "- {{text}}"
"####;

#[test]
fn discovery_finds_nested_captures_sorted() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "work/standup.yaml", INBOX);
    write(tmp.path(), "inbox.yml", INBOX);
    write(tmp.path(), "notes.txt", "not a capture");

    let repo = CaptureRepository::new(tmp.path()).unwrap();
    let names: Vec<&str> =
        repo.list_all().iter().map(|c| c.logical_name.as_str()).collect();
    assert_eq!(names, vec!["inbox", "work/standup"]);
}

#[test]
fn get_by_name_loads_spec() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "inbox.yaml", INBOX);

    let repo = CaptureRepository::new(tmp.path()).unwrap();
    let loaded = repo.get_by_name("inbox").unwrap();
    assert_eq!(loaded.spec.name, "inbox");
    assert_eq!(loaded.spec.target.file, "notes.md");
    assert!(loaded.spec.target.insert_after.is_some());
}

#[test]
fn unknown_name_is_not_found() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "inbox.yaml", INBOX);

    let repo = CaptureRepository::new(tmp.path()).unwrap();
    let err = repo.get_by_name("ghost").unwrap_err();
    assert!(matches!(err, CaptureRepoError::NotFound(_)));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "broken.yaml", "name: [unterminated");

    let repo = CaptureRepository::new(tmp.path()).unwrap();
    let err = repo.get_by_name("broken").unwrap_err();
    assert!(matches!(err, CaptureRepoError::Parse { .. }));
}

#[test]
fn missing_directory_fails_discovery() {
    let tmp = tempdir().unwrap();
    assert!(CaptureRepository::new(&tmp.path().join("nope")).is_err());
}
