// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};
use crate::spec::{raw, raw_deref, NON_ZIP64_MAX_NUM_FILES, SIGNATURE_LENGTH};

use futures_lite::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

pub const SIGNATURE: u32 = 0x6054b50;

raw! {
    RawEndOfCentralDirectoryRecord {
        number_of_this_disk, u16,
        number_of_the_disk_with_the_start_of_the_central_directory, u16,
        total_number_of_entries_in_the_central_directory_on_this_disk, u16,
        total_number_of_entries_in_the_central_directory, u16,
        size_of_the_central_directory, u32,
        offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number, u32,
        zip_file_comment_length, u16
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndOfCentralDirectoryRecord {
    pub raw: RawEndOfCentralDirectoryRecord,
    pub zip_file_comment: Vec<u8>,
}

raw_deref!(EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord);

impl EndOfCentralDirectoryRecord {
    /// Builds the single-disk, comment-less end record summarising a central directory.
    pub fn new(num_entries: usize, cd_size: u32, cd_offset: u32) -> Result<Self> {
        let entries = match u16::try_from(num_entries) {
            Ok(value) if value != NON_ZIP64_MAX_NUM_FILES => value,
            _ => return Err(ZipError::TooManyEntries(num_entries)),
        };

        let raw = RawEndOfCentralDirectoryRecord {
            number_of_this_disk: 0,
            number_of_the_disk_with_the_start_of_the_central_directory: 0,
            total_number_of_entries_in_the_central_directory_on_this_disk: entries,
            total_number_of_entries_in_the_central_directory: entries,
            size_of_the_central_directory: cd_size,
            offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number: cd_offset,
            zip_file_comment_length: 0,
        };

        Ok(Self { raw, zip_file_comment: Vec::new() })
    }

    /// Returns the number of bytes this record occupies in the stream, signature included.
    pub fn encoded_len(&self) -> usize {
        SIGNATURE_LENGTH + LENGTH + self.zip_file_comment.len()
    }

    /// Encodes the complete record: signature, fixed fields and archive comment.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());

        bytes.extend_from_slice(&SIGNATURE.to_le_bytes());
        bytes.extend_from_slice(&self.raw.as_bytes());
        bytes.extend_from_slice(&self.zip_file_comment);

        bytes
    }
}

/// Reads the end of central directory record from the given reader.
///
/// This function does so by:
/// - asserting the signature of the end of central directory record
/// - reading the raw end of central directory record
/// - reading the zip file comment
#[tracing::instrument(skip(reader))]
pub async fn read(mut reader: impl AsyncRead + Unpin) -> Result<EndOfCentralDirectoryRecord> {
    crate::utils::assert_signature(&mut reader, SIGNATURE).await?;

    let raw = raw_read(&mut reader).await?;
    let zip_file_comment = crate::utils::read_bytes(&mut reader, raw.zip_file_comment_length as usize).await?;

    Ok(EndOfCentralDirectoryRecord { raw, zip_file_comment })
}

/// Writes the end of central directory record to the given writer as a single contiguous record.
#[tracing::instrument(skip(writer))]
pub async fn write(mut writer: impl AsyncWrite + Unpin, header: &EndOfCentralDirectoryRecord) -> Result<()> {
    writer.write_all(&header.as_bytes()).await?;
    Ok(())
}
