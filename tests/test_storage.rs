// Integration tests for Storage module
// This file should be run with cargo test --test test_storage

use std::path::Path;

use tempfile::tempdir;
use toolgate::{OutputWriter, StorageConfig, StorageError, WriteRequest};

/// SHA-256 of "hello"
const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

fn writer(root: &Path) -> OutputWriter {
    OutputWriter::new(StorageConfig {
        output_root: root.to_path_buf(),
    })
    .unwrap()
}

fn request(path: &str, content: &str, overwrite: bool) -> WriteRequest {
    WriteRequest {
        path: path.to_string(),
        content: content.to_string(),
        overwrite,
    }
}

/// Test byte length and digest reporting
#[tokio::test]
async fn test_write_reports_length_and_digest() {
    let dir = tempdir().unwrap();
    let writer = writer(dir.path());

    let outcome = writer.write(request("a/b.txt", "hello", true)).await.unwrap();
    assert_eq!(outcome.bytes_written, 5);
    assert_eq!(outcome.sha256, HELLO_SHA256);
    assert!(
        Path::new(&outcome.path).starts_with(writer.root()),
        "Resolved path should be inside the root"
    );
    assert_eq!(std::fs::read_to_string(&outcome.path).unwrap(), "hello");
}

/// overwrite=false on an existing file fails and leaves it untouched
#[tokio::test]
async fn test_no_overwrite_conflict() {
    let dir = tempdir().unwrap();
    let writer = writer(dir.path());

    let first = writer.write(request("a/b.txt", "hello", true)).await.unwrap();

    let result = writer.write(request("a/b.txt", "changed", false)).await;
    assert!(
        matches!(result, Err(StorageError::AlreadyExists(_))),
        "Existing file should conflict, got: {result:?}"
    );
    assert_eq!(
        std::fs::read_to_string(&first.path).unwrap(),
        "hello",
        "Prior content should be unchanged"
    );
}

/// Writing the same content twice produces identical outcomes
#[tokio::test]
async fn test_overwrite_is_idempotent() {
    let dir = tempdir().unwrap();
    let writer = writer(dir.path());

    let first = writer.write(request("same.txt", "payload", true)).await.unwrap();
    let second = writer.write(request("same.txt", "payload", true)).await.unwrap();

    assert_eq!(first.sha256, second.sha256);
    assert_eq!(first.bytes_written, second.bytes_written);
    assert_eq!(first.path, second.path);
}

/// Every traversal attempt resolves inside the output root
#[tokio::test]
async fn test_traversal_is_confined() {
    let dir = tempdir().unwrap();
    let writer = writer(dir.path());

    let hostile = [
        "../../etc/passwd",
        "/etc/shadow",
        "a/../../escape.txt",
        "./../up.txt",
    ];

    for path in hostile {
        let outcome = writer.write(request(path, "x", true)).await.unwrap();
        assert!(
            Path::new(&outcome.path).starts_with(writer.root()),
            "Path '{path}' resolved outside the root: {}",
            outcome.path
        );
    }
}

/// Missing parent directories are created
#[tokio::test]
async fn test_parent_directories_created() {
    let dir = tempdir().unwrap();
    let writer = writer(dir.path());

    let outcome = writer
        .write(request("x/y/z/file.txt", "deep", true))
        .await
        .unwrap();
    assert!(Path::new(&outcome.path).exists());
}

/// CRLF line endings are normalized before hashing
#[tokio::test]
async fn test_crlf_is_normalized() {
    let dir = tempdir().unwrap();
    let writer = writer(dir.path());

    let outcome = writer.write(request("crlf.txt", "a\r\nb", true)).await.unwrap();
    assert_eq!(outcome.bytes_written, 3, "CRLF should collapse to LF");
    assert_eq!(std::fs::read_to_string(&outcome.path).unwrap(), "a\nb");
}

/// Paths with no usable file name are rejected
#[tokio::test]
async fn test_empty_path_is_invalid() {
    let dir = tempdir().unwrap();
    let writer = writer(dir.path());

    for path in ["", "..", "/"] {
        let result = writer.write(request(path, "x", true)).await;
        assert!(
            matches!(result, Err(StorageError::InvalidPath(_))),
            "Path '{path}' should be invalid, got: {result:?}"
        );
    }
}
