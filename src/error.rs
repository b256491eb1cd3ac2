// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::path::PathBuf;

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("source file not found or unreadable: '{}'", .0.display())]
    SourceNotFound(PathBuf),
    #[error("source path '{}' has no UTF-8 file name to store it under", .0.display())]
    InvalidFileName(PathBuf),
    #[error("unable to read source file '{}': {}", .0.display(), .1)]
    SourceRead(PathBuf, #[source] std::io::Error),
    #[error("an upstream reader or writer returned an error: {0}")]
    UpstreamIoError(#[from] std::io::Error),

    #[error("entry '{0}' is {1} bytes, which exceeds the non-zip64 limit")]
    EntryTooLarge(String, u64),
    #[error("archive offset {0} exceeds the non-zip64 limit")]
    ArchiveTooLarge(u64),
    #[error("archive holds {0} entries, which exceeds the non-zip64 limit")]
    TooManyEntries(usize),
    #[error("file name '{0}' is too long to be stored")]
    FileNameTooLarge(String),

    #[error("encountered an unexpected header (actual: {0:#x}, expected: {1:#x})")]
    UnexpectedHeaderError(u32, u32),
}

impl ZipError {
    /// Returns true if this error originated from a source file rather than the output sink.
    pub fn is_source_error(&self) -> bool {
        matches!(self, ZipError::SourceNotFound(_) | ZipError::SourceRead(..))
    }
}
