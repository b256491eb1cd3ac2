// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports streaming stored ZIP archives built from files on disk.
//!
//! # Example
//! ```no_run
//! # use async_zip_stream::ZipArchive;
//! # use async_zip_stream::error::ZipError;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let mut archive = ZipArchive::with_entries(["./foo/image-01.jpg", "./foo/image-02.jpg"])?;
//! archive.add_entry_named("./foo/3c42dfce", "birds/eagle.jpg")?;
//!
//! let mut sink = Vec::<u8>::new();
//! let summary = archive.output(&mut sink).await?;
//!
//! assert_eq!(summary.total_size(), sink.len() as u64);
//! #   Ok(())
//! # }
//! ```

pub(crate) mod entry_data;

use std::path::PathBuf;

use futures_lite::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::compat::TokioAsyncWriteCompatExt;

use crate::entry::builder::ZipEntryBuilder;
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::io::offset::AsyncOffsetWriter;
use crate::spec::cdr::{self, CentralDirectoryRecord};
use crate::spec::eocdr::{self, EndOfCentralDirectoryRecord};
use crate::spec::{non_zip64_offset, NON_ZIP64_MAX_NUM_FILES};

/// The default size of the chunks source files are streamed to the sink in.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// The largest chunk size [`ZipArchive::buffer_capacity()`] accepts.
pub const MAX_BUFFER_CAPACITY: usize = 1024 * 1024;

/// An ordered set of files, written out as a stored (uncompressed) ZIP archive in a single streaming pass.
///
/// Nothing beyond one chunk of one file is held in memory. The archive is written in two passes over the entries:
/// each entry's local file header and data, then each entry's central directory record, followed by the end of
/// central directory record. [`ZipArchive::output()`] consumes the archive, so once output has begun no entries
/// can be added and the archive cannot be written a second time.
#[derive(Debug)]
pub struct ZipArchive {
    entries: Vec<ZipEntry>,
    buffer_capacity: usize,
}

impl Default for ZipArchive {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipArchive {
    /// Constructs a new, empty archive.
    pub fn new() -> Self {
        Self { entries: Vec::new(), buffer_capacity: DEFAULT_BUFFER_CAPACITY }
    }

    /// Constructs a new archive from an initial collection of files.
    ///
    /// The collection may hold bare paths, in which case each file is stored under its base name, or
    /// `(path, name)` pairs (including a map from path to name). Entries keep the collection's iteration order.
    pub fn with_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<ZipEntryBuilder>,
    {
        let mut archive = Self::new();

        for entry in entries {
            archive.push(entry)?;
        }

        Ok(archive)
    }

    /// Sets the size of the chunks source files are streamed to the sink in.
    ///
    /// The value is clamped to `1..=`[`MAX_BUFFER_CAPACITY`].
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.clamp(1, MAX_BUFFER_CAPACITY);
        self
    }

    /// Appends a file, stored under its base name.
    pub fn add_entry(&mut self, source: impl Into<PathBuf>) -> Result<()> {
        self.push(ZipEntryBuilder::new(source))
    }

    /// Appends a file, stored under the given name.
    pub fn add_entry_named(&mut self, source: impl Into<PathBuf>, filename: impl Into<String>) -> Result<()> {
        self.push(ZipEntryBuilder::new(source).filename(filename))
    }

    /// Appends an entry described by anything convertible into a [`ZipEntryBuilder`].
    ///
    /// The same file may be registered any number of times; each registration is an independent entry.
    pub fn push(&mut self, entry: impl Into<ZipEntryBuilder>) -> Result<()> {
        let entry = entry.into().build()?;
        tracing::debug!(source = %entry.source.display(), filename = %entry.filename, "registered entry");

        self.entries.push(entry);
        Ok(())
    }

    /// Returns the size of the chunks source files are streamed to the sink in.
    pub fn chunk_size(&self) -> usize {
        self.buffer_capacity
    }

    /// Returns the registered entries, in the order they will be written.
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Writes the complete archive to the given sink.
    ///
    /// The sink is flushed, but not closed. Any error aborts the output immediately; whatever was already written
    /// to the sink is an incomplete archive and should be discarded by the caller.
    pub async fn output<W: AsyncWrite + Unpin>(mut self, sink: &mut W) -> Result<ArchiveSummary> {
        let num_entries = self.entries.len();
        if num_entries >= NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::TooManyEntries(num_entries));
        }

        let mut writer = AsyncOffsetWriter::new(sink);
        let mut buffer = vec![0; self.buffer_capacity];

        tracing::debug!(entries = num_entries, "writing local file headers and data");
        let mut lh_offsets = Vec::with_capacity(num_entries);
        for entry in self.entries.iter_mut() {
            lh_offsets.push(entry_data::write(&mut writer, entry, &mut buffer).await?);
        }

        let cd_offset = writer.offset();
        let cd_offset_u32 = non_zip64_offset(cd_offset)?;

        tracing::debug!(cd_offset, "writing central directory");
        for (entry, lh_offset) in self.entries.iter_mut().zip(lh_offsets) {
            let metadata = entry.metadata().await?;
            let record = CentralDirectoryRecord::stored(&entry.filename, &metadata, lh_offset)?;
            cdr::write(&mut writer, &record).await?;
        }

        let cd_size = writer.offset() - cd_offset;
        let cd_size_u32 = non_zip64_offset(cd_size)?;

        let header = EndOfCentralDirectoryRecord::new(num_entries, cd_size_u32, cd_offset_u32)?;
        eocdr::write(&mut writer, &header).await?;
        writer.flush().await?;

        let summary = ArchiveSummary { entries: num_entries, cd_offset, cd_size, total_size: writer.offset() };
        tracing::debug!(?summary, "finalised archive");

        Ok(summary)
    }

    /// Writes the complete archive to a [`tokio`] sink.
    ///
    /// See [`ZipArchive::output()`].
    pub async fn output_tokio<W: tokio::io::AsyncWrite + Unpin>(self, sink: &mut W) -> Result<ArchiveSummary> {
        self.output(&mut sink.compat_write()).await
    }
}

/// The shape of an archive written by [`ZipArchive::output()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSummary {
    entries: usize,
    cd_offset: u64,
    cd_size: u64,
    total_size: u64,
}

impl ArchiveSummary {
    /// Returns the number of entries written.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Returns the offset the central directory begins at, ie. the size of all local headers and data.
    pub fn central_directory_offset(&self) -> u64 {
        self.cd_offset
    }

    /// Returns the size in bytes of all central directory records.
    pub fn central_directory_size(&self) -> u64 {
        self.cd_size
    }

    /// Returns the total number of bytes written to the sink.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }
}
