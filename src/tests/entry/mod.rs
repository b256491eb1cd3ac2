// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::collections::BTreeMap;

use chrono::{Local, TimeZone};

use crate::error::ZipError;
use crate::tests::{fixture, init_logger, set_modified};
use crate::{ZipArchive, ZipEntryBuilder};

#[test]
fn filename_defaults_to_base_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "image-01.jpg", b"jpeg");

    let entry = ZipEntryBuilder::from(&path).build().unwrap();
    assert_eq!(entry.filename(), "image-01.jpg");
    assert_eq!(entry.source(), path.as_path());

    let entry = ZipEntryBuilder::new(&path).filename("/birds/eagle.jpg").build().unwrap();
    assert_eq!(entry.filename(), "/birds/eagle.jpg");
}

#[test]
fn missing_source_is_rejected() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();

    let mut archive = ZipArchive::new();
    match archive.add_entry(dir.path().join("missing.jpg")) {
        Err(ZipError::SourceNotFound(path)) => assert_eq!(path, dir.path().join("missing.jpg")),
        other => panic!("expected the source to be rejected, got {other:?}"),
    }

    // Directories exist, but can't be streamed as file data.
    assert!(matches!(archive.add_entry(dir.path()), Err(ZipError::SourceNotFound(_))));
    assert!(archive.entries().is_empty());
}

#[test]
fn construction_forms_are_equivalent() {
    let dir = tempfile::tempdir().unwrap();
    let a = fixture(dir.path(), "a.txt", b"a");
    let b = fixture(dir.path(), "b.txt", b"b");

    let from_paths = ZipArchive::with_entries([&a, &b]).unwrap();
    let names: Vec<_> = from_paths.entries().iter().map(|entry| entry.filename()).collect();
    assert_eq!(names, ["a.txt", "b.txt"]);

    let mapping = BTreeMap::from([(a.clone(), "first/a"), (b.clone(), "second/b")]);
    let from_mapping = ZipArchive::with_entries(mapping).unwrap();
    let names: Vec<_> = from_mapping.entries().iter().map(|entry| entry.filename()).collect();
    assert_eq!(names, ["first/a", "second/b"]);

    let mut incremental = ZipArchive::new();
    incremental.add_entry(&a).unwrap();
    incremental.add_entry_named(&b, "second/b").unwrap();
    let names: Vec<_> = incremental.entries().iter().map(|entry| entry.filename()).collect();
    assert_eq!(names, ["a.txt", "second/b"]);
}

#[test]
fn missing_source_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let a = fixture(dir.path(), "a.txt", b"a");

    let result = ZipArchive::with_entries([a, dir.path().join("nope.txt")]);
    assert!(matches!(result, Err(ZipError::SourceNotFound(_))));
}

#[test]
fn duplicates_are_independent_entries() {
    let dir = tempfile::tempdir().unwrap();
    let a = fixture(dir.path(), "a.txt", b"a");

    let archive = ZipArchive::with_entries([(&a, "one.txt"), (&a, "two.txt")]).unwrap();
    assert_eq!(archive.entries().len(), 2);
    assert_eq!(archive.entries()[0].source(), archive.entries()[1].source());
}

#[test]
fn overlong_filename_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let a = fixture(dir.path(), "a.txt", b"a");

    let result = ZipEntryBuilder::new(&a).filename("x".repeat(u16::MAX as usize + 1)).build();
    assert!(matches!(result, Err(ZipError::FileNameTooLarge(_))));
}

#[tokio::test]
async fn metadata_is_computed_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "fileA", b"hello");

    let mut entry = ZipEntryBuilder::from(&path).build().unwrap();
    let first = entry.metadata().await.unwrap();
    assert_eq!(first.size, 5);
    assert_eq!(first.crc, crc32fast::hash(b"hello"));

    // Later reads come from the cache, not from the (now different) file.
    std::fs::write(&path, b"goodbye, world").unwrap();
    assert_eq!(entry.metadata().await.unwrap(), first);
    assert_eq!(entry.crc32().await.unwrap(), first.crc);
    assert_eq!(entry.uncompressed_size().await.unwrap(), 5);
    assert_eq!(entry.last_modification_date().await.unwrap(), first.modified);
}

#[tokio::test]
async fn deleted_source_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "fileA", b"hello");

    let mut entry = ZipEntryBuilder::from(&path).build().unwrap();
    std::fs::remove_file(&path).unwrap();

    let err = entry.crc32().await.unwrap_err();
    assert!(matches!(err, ZipError::SourceRead(..)));
    assert!(err.is_source_error());
}

#[tokio::test]
async fn modification_date_comes_from_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "fileA", b"hello");
    set_modified(&path, Local.with_ymd_and_hms(2013, 5, 17, 14, 31, 47).unwrap());

    let mut entry = ZipEntryBuilder::from(&path).build().unwrap();
    let modified = entry.last_modification_date().await.unwrap();

    assert_eq!(modified.raw_date(), (33 << 9) | (5 << 5) | 17);
    assert_eq!(modified.raw_time(), (14 << 11) | (31 << 5) | 23);
    assert_eq!((modified.hour(), modified.minute(), modified.second()), (14, 31, 46));
}
