// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;
pub mod metadata;

use std::path::{Path, PathBuf};

use self::metadata::MetadataCache;

/// A source file registered for inclusion in an archive.
///
/// # Builder pattern
/// Entries are only ever created through [`ZipEntryBuilder`](builder::ZipEntryBuilder), which confirms the source is
/// a readable file and resolves the name it is stored under. After registration the source and name are fixed; the
/// only state that changes is the metadata cache being filled in, once.
#[derive(Debug)]
pub struct ZipEntry {
    pub(crate) source: PathBuf,
    pub(crate) filename: String,
    pub(crate) cache: MetadataCache,
}

impl ZipEntry {
    /// Returns the path of the file this entry's data is read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the name this entry is stored under within the archive.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}
