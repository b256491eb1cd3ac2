// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use zip::CompressionMethod;

pub const FILE_LIST: &[(&str, &[u8])] = &[
    ("alpha/back_to_front.txt", b"zyxwvutsrqponmlkjihgfedcba"),
    ("alpha/front_to_back.txt", b"abcdefghijklmnopqrstuvwxyz"),
    ("numeric/forward.txt", b"0123456789"),
    ("numeric/reverse.txt", b"9876543210"),
    ("empty.txt", b""),
];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes every file in [`FILE_LIST`] under `dir`, returning `(path, archive name)` pairs in list order.
pub fn write_inputs(dir: &Path) -> Vec<(PathBuf, String)> {
    let mut inputs = Vec::new();

    for (name, content) in FILE_LIST {
        let path = dir.join(name.replace('/', "_"));
        std::fs::write(&path, content).unwrap();
        inputs.push((path, name.to_string()));
    }

    inputs
}

/// Checks an archive against [`FILE_LIST`] using an independent reader.
pub fn check_archive(bytes: Vec<u8>) {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), FILE_LIST.len());

    for (index, (name, content)) in FILE_LIST.iter().enumerate() {
        let mut file = archive.by_index(index).unwrap();

        assert_eq!(file.name(), *name);
        assert_eq!(file.compression(), CompressionMethod::Stored);
        assert_eq!(file.size(), content.len() as u64);
        assert_eq!(file.compressed_size(), content.len() as u64);
        assert_eq!(file.crc32(), crc32fast::hash(content));

        let mut read = Vec::new();
        file.read_to_end(&mut read).unwrap();
        assert_eq!(&read, content);
    }
}
