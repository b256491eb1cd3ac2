// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod entry;
pub(crate) mod spec;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `content` to `dir/name` and returns the path of the new file.
pub(crate) fn fixture(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}

/// Sets the file system modification time of `path`.
pub(crate) fn set_modified(path: &Path, modified: DateTime<Local>) {
    let file = std::fs::File::options().write(true).open(path).expect("failed to open fixture");
    file.set_modified(SystemTime::from(modified)).expect("failed to set modification time");
}
