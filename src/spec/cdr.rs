// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::metadata::EntryMetadata;
use crate::error::{Result, ZipError};
use crate::spec::{raw, raw_deref, version, COMPRESSION_STORED, SIGNATURE_LENGTH};

use futures_lite::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

pub const SIGNATURE: u32 = 0x2014b50;

raw! {
    RawCentralDirectoryRecord {
        version_made_by, u16,
        version_needed_to_extract, u16,
        general_purpose_bit_flag, u16,
        compression_method, u16,
        last_mod_file_time, u16,
        last_mod_file_date, u16,
        crc_32, u32,
        compressed_size, u32,
        uncompressed_size, u32,
        file_name_length, u16,
        extra_field_length, u16,
        file_comment_length, u16,
        disk_number_start, u16,
        internal_file_attributes, u16,
        external_file_attributes, u32,
        relative_offset_of_local_header, u32
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CentralDirectoryRecord {
    pub raw: RawCentralDirectoryRecord,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
    pub file_comment: Vec<u8>,
}

raw_deref!(CentralDirectoryRecord, RawCentralDirectoryRecord);

impl CentralDirectoryRecord {
    /// Builds the central directory record of a stored entry whose local header begins at `lh_offset`.
    ///
    /// The metadata passed here must be the same cached values the entry's local header was built from.
    pub fn stored(file_name: &str, metadata: &EntryMetadata, lh_offset: u32) -> Result<Self> {
        let file_name_length =
            file_name.len().try_into().map_err(|_| ZipError::FileNameTooLarge(file_name.to_string()))?;

        let raw = RawCentralDirectoryRecord {
            version_made_by: version::MADE_BY,
            version_needed_to_extract: version::NEEDED_TO_EXTRACT,
            general_purpose_bit_flag: 0,
            compression_method: COMPRESSION_STORED,
            last_mod_file_time: metadata.modified.time,
            last_mod_file_date: metadata.modified.date,
            crc_32: metadata.crc,
            compressed_size: metadata.size,
            uncompressed_size: metadata.size,
            file_name_length,
            extra_field_length: 0,
            file_comment_length: 0,
            disk_number_start: 0,
            internal_file_attributes: 0,
            external_file_attributes: 0,
            relative_offset_of_local_header: lh_offset,
        };

        Ok(Self { raw, file_name: file_name.as_bytes().to_vec(), extra_field: Vec::new(), file_comment: Vec::new() })
    }

    /// Returns the number of bytes this record occupies in the stream, signature included.
    pub fn encoded_len(&self) -> usize {
        SIGNATURE_LENGTH + LENGTH + self.file_name.len() + self.extra_field.len() + self.file_comment.len()
    }

    /// Encodes the complete record: signature, fixed fields, file name, extra field and file comment.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());

        bytes.extend_from_slice(&SIGNATURE.to_le_bytes());
        bytes.extend_from_slice(&self.raw.as_bytes());
        bytes.extend_from_slice(&self.file_name);
        bytes.extend_from_slice(&self.extra_field);
        bytes.extend_from_slice(&self.file_comment);

        bytes
    }
}

/// Reads a central directory record from the given reader.
///
/// This function does so by:
/// - asserting the signature of the central directory record
/// - reading the raw central directory record
/// - reading the file name
/// - reading the extra field
/// - reading the file comment
#[tracing::instrument(skip(reader))]
pub async fn read(mut reader: impl AsyncRead + Unpin) -> Result<CentralDirectoryRecord> {
    crate::utils::assert_signature(&mut reader, SIGNATURE).await?;

    let raw = raw_read(&mut reader).await?;
    let file_name = crate::utils::read_bytes(&mut reader, raw.file_name_length as usize).await?;
    let extra_field = crate::utils::read_bytes(&mut reader, raw.extra_field_length as usize).await?;
    let file_comment = crate::utils::read_bytes(&mut reader, raw.file_comment_length as usize).await?;

    Ok(CentralDirectoryRecord { raw, file_name, extra_field, file_comment })
}

/// Writes a central directory record to the given writer as a single contiguous record.
#[tracing::instrument(skip(writer))]
pub async fn write(mut writer: impl AsyncWrite + Unpin, record: &CentralDirectoryRecord) -> Result<()> {
    writer.write_all(&record.as_bytes()).await?;
    Ok(())
}
