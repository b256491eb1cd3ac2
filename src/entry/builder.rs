// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::path::{Path, PathBuf};

use crate::entry::metadata::MetadataCache;
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};

/// A builder for [`ZipEntry`].
///
/// Every way of registering a file (a bare path, or a path paired with the name it should be stored under) converts
/// into this one shape, so the archive only ever deals with a resolved source and name.
///
/// ```
/// # use async_zip_stream::ZipEntryBuilder;
/// #
/// let implicit = ZipEntryBuilder::from("./foo/image-01.jpg");
/// let explicit = ZipEntryBuilder::from(("./foo/3c42dfce", "birds/eagle.jpg"));
/// let built = ZipEntryBuilder::new("./foo/337346e6").filename("birds/swan.jpg");
/// ```
#[derive(Debug, Clone)]
pub struct ZipEntryBuilder {
    source: PathBuf,
    filename: Option<String>,
}

impl ZipEntryBuilder {
    /// Constructs a new builder for the given source file.
    ///
    /// Unless overridden with [`ZipEntryBuilder::filename()`], the entry is stored under the source's base name.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), filename: None }
    }

    /// Sets the name the entry is stored under within the archive.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Confirms the source is a readable regular file, resolves the stored name, and returns the entry.
    pub fn build(self) -> Result<ZipEntry> {
        if let Err(err) = confirm_readable(&self.source) {
            tracing::warn!(source = %self.source.display(), error = %err, "rejecting unreadable source");
            return Err(ZipError::SourceNotFound(self.source));
        }

        let filename = match self.filename {
            Some(filename) => filename,
            None => match self.source.file_name().and_then(|name| name.to_str()) {
                Some(name) => name.to_string(),
                None => return Err(ZipError::InvalidFileName(self.source)),
            },
        };

        if u16::try_from(filename.len()).is_err() {
            return Err(ZipError::FileNameTooLarge(filename));
        }

        Ok(ZipEntry { source: self.source, filename, cache: MetadataCache::default() })
    }
}

fn confirm_readable(source: &Path) -> std::io::Result<()> {
    if !std::fs::metadata(source)?.is_file() {
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"));
    }

    std::fs::File::open(source).map(|_| ())
}

impl From<&str> for ZipEntryBuilder {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for ZipEntryBuilder {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&Path> for ZipEntryBuilder {
    fn from(source: &Path) -> Self {
        Self::new(source)
    }
}

impl From<PathBuf> for ZipEntryBuilder {
    fn from(source: PathBuf) -> Self {
        Self::new(source)
    }
}

impl From<&PathBuf> for ZipEntryBuilder {
    fn from(source: &PathBuf) -> Self {
        Self::new(source.as_path())
    }
}

impl<P, N> From<(P, N)> for ZipEntryBuilder
where
    P: Into<PathBuf>,
    N: Into<String>,
{
    fn from((source, filename): (P, N)) -> Self {
        Self::new(source).filename(filename)
    }
}
