// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Lazily-computed, per-entry metadata.
//!
//! Both the local file header and the central directory record of an entry carry its size, CRC32 and modification
//! date. Those values live on the entry itself and are read from the source at most once, so the two headers can
//! never disagree, even when the same file is registered twice under different names.

use std::io::{Error, ErrorKind};

use futures_lite::io::{AsyncReadExt, Take};
use tokio::fs::File;
use tokio_util::compat::{Compat, TokioAsyncReadCompatExt};

use crate::date::ZipDateTime;
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::io::hashed::HashedReader;
use crate::spec::NON_ZIP64_MAX_SIZE;

/// A hashing reader over an entry's source, limited to the entry's recorded size.
pub(crate) type SourceReader = HashedReader<Take<Compat<File>>>;

/// The values an entry's headers are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub size: u32,
    pub crc: u32,
    pub modified: ZipDateTime,
}

#[derive(Debug, Default)]
pub(crate) struct MetadataCache {
    stat: Option<(u32, ZipDateTime)>,
    crc: Option<u32>,
}

impl ZipEntry {
    /// Returns the entry's size, read from the source's file system metadata on first access.
    pub async fn uncompressed_size(&mut self) -> Result<u32> {
        Ok(self.stat().await?.0)
    }

    /// Returns the source's last modification date & time, read from its file system metadata on first access.
    pub async fn last_modification_date(&mut self) -> Result<ZipDateTime> {
        Ok(self.stat().await?.1)
    }

    /// Returns the CRC32 of the source's content, computed by a single full read on first access.
    pub async fn crc32(&mut self) -> Result<u32> {
        if let Some(crc) = self.cache.crc {
            return Ok(crc);
        }

        let size = self.uncompressed_size().await?;
        let mut reader = self.open(size).await?;

        futures_lite::io::copy(&mut reader, &mut futures_lite::io::sink())
            .await
            .map_err(|err| self.source_error(err))?;
        self.ensure_complete(&reader, size)?;

        let crc = reader.swap_and_compute_hash();
        tracing::trace!(filename = %self.filename, crc, "computed entry checksum");

        self.cache.crc = Some(crc);
        Ok(crc)
    }

    /// Returns all cached metadata, filling in whatever hasn't been read yet.
    pub async fn metadata(&mut self) -> Result<EntryMetadata> {
        let (size, modified) = self.stat().await?;
        let crc = self.crc32().await?;

        Ok(EntryMetadata { size, crc, modified })
    }

    async fn stat(&mut self) -> Result<(u32, ZipDateTime)> {
        if let Some(stat) = self.cache.stat {
            return Ok(stat);
        }

        let metadata = tokio::fs::metadata(&self.source).await.map_err(|err| self.source_error(err))?;
        let modified = metadata.modified().map_err(|err| self.source_error(err))?;

        let size = match u32::try_from(metadata.len()) {
            Ok(size) if size != NON_ZIP64_MAX_SIZE => size,
            _ => return Err(ZipError::EntryTooLarge(self.filename.clone(), metadata.len())),
        };
        let modified = ZipDateTime::from_system_time(modified);
        tracing::trace!(filename = %self.filename, size, ?modified, "read entry metadata");

        self.cache.stat = Some((size, modified));
        Ok((size, modified))
    }

    /// Opens the source for reading at most `size` bytes, hashing them as they pass through.
    pub(crate) async fn open(&self, size: u32) -> Result<SourceReader> {
        let file = File::open(&self.source).await.map_err(|err| self.source_error(err))?;
        Ok(HashedReader::new(file.compat().take(size as u64)))
    }

    /// Fails if the source yielded fewer bytes than its recorded size.
    pub(crate) fn ensure_complete(&self, reader: &SourceReader, size: u32) -> Result<()> {
        match reader.bytes_read() {
            read if read == size as u64 => Ok(()),
            read => Err(self.source_error(Error::new(
                ErrorKind::UnexpectedEof,
                format!("source was truncated (expected {size} bytes, read {read})"),
            ))),
        }
    }

    pub(crate) fn source_error(&self, err: Error) -> ZipError {
        ZipError::SourceRead(self.source.clone(), err)
    }
}
