// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! An asynchronous, streaming writer for stored ZIP archives built from files on disk.
//!
//! Built for bundling many already-compressed files (eg. images) into a single download. File contents are
//! embedded verbatim, and the archive is written straight to the sink as it is produced, so memory use stays
//! proportional to one chunk of one file rather than to the size of the archive.
//!
//! ## Features
//! - Runtime-agnostic sinks via `futures-lite`'s IO traits, plus [`tokio`] sinks via [`ZipArchive::output_tokio()`].
//! - CRC32, size and modification date read once per entry and shared by both of its headers.
//! - Emits the classic format only: no compression, encryption, data descriptors or zip64 records.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Example
//! ```no_run
//! # use async_zip_stream::ZipArchive;
//! # use async_zip_stream::error::ZipError;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let archive = ZipArchive::with_entries([
//!     ("./foo/3c42dfce", "birds/eagle.jpg"),
//!     ("./foo/337346e6", "birds/swan.jpg"),
//!     ("./foo/13b9d3de", "mammals/mouse.jpg"),
//! ])?;
//!
//! let mut file = tokio::fs::File::create("images.zip").await?;
//! archive.output_tokio(&mut file).await?;
//! #   Ok(())
//! # }
//! ```

pub mod date;
pub mod entry;
pub mod error;
pub(crate) mod io;
pub mod spec;
pub mod transport;
pub(crate) mod utils;
pub mod write;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::{builder::ZipEntryBuilder, metadata::EntryMetadata, ZipEntry};
pub use crate::write::{ArchiveSummary, ZipArchive};
