// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::metadata::EntryMetadata;
use crate::error::{Result, ZipError};
use crate::spec::{raw, raw_deref, version, COMPRESSION_STORED, SIGNATURE_LENGTH};

use futures_lite::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

pub const SIGNATURE: u32 = 0x4034b50;

raw! {
    RawLocalFileHeader {
        version_needed_to_extract, u16,
        general_purpose_flags, u16,
        compression_method, u16,
        last_mod_file_time, u16,
        last_mod_file_date, u16,
        crc_32, u32,
        compressed_size, u32,
        uncompressed_size, u32,
        file_name_length, u16,
        extra_field_length, u16
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub raw: RawLocalFileHeader,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
}

raw_deref!(LocalFileHeader, RawLocalFileHeader);

impl LocalFileHeader {
    /// Builds the local file header of a stored entry from its cached metadata.
    ///
    /// No flags are set: the sizes and CRC are known up front, so no data descriptor follows the data.
    pub fn stored(file_name: &str, metadata: &EntryMetadata) -> Result<Self> {
        let file_name_length =
            file_name.len().try_into().map_err(|_| ZipError::FileNameTooLarge(file_name.to_string()))?;

        let raw = RawLocalFileHeader {
            version_needed_to_extract: version::NEEDED_TO_EXTRACT,
            general_purpose_flags: 0,
            compression_method: COMPRESSION_STORED,
            last_mod_file_time: metadata.modified.time,
            last_mod_file_date: metadata.modified.date,
            crc_32: metadata.crc,
            compressed_size: metadata.size,
            uncompressed_size: metadata.size,
            file_name_length,
            extra_field_length: 0,
        };

        Ok(Self { raw, file_name: file_name.as_bytes().to_vec(), extra_field: Vec::new() })
    }

    /// Returns the number of bytes this header occupies in the stream, signature included.
    pub fn encoded_len(&self) -> usize {
        SIGNATURE_LENGTH + LENGTH + self.file_name.len() + self.extra_field.len()
    }

    /// Encodes the complete record: signature, fixed fields, file name and extra field.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());

        bytes.extend_from_slice(&SIGNATURE.to_le_bytes());
        bytes.extend_from_slice(&self.raw.as_bytes());
        bytes.extend_from_slice(&self.file_name);
        bytes.extend_from_slice(&self.extra_field);

        bytes
    }
}

/// Reads a local file header from the given reader.
///
/// This function does so by:
/// - asserting the signature of the local file header
/// - reading the raw local file header
/// - reading the file name
/// - reading the extra field
#[tracing::instrument(skip(reader))]
pub async fn read(mut reader: impl AsyncRead + Unpin) -> Result<LocalFileHeader> {
    crate::utils::assert_signature(&mut reader, SIGNATURE).await?;

    let raw = raw_read(&mut reader).await?;
    let file_name = crate::utils::read_bytes(&mut reader, raw.file_name_length as usize).await?;
    let extra_field = crate::utils::read_bytes(&mut reader, raw.extra_field_length as usize).await?;

    Ok(LocalFileHeader { raw, file_name, extra_field })
}

/// Writes a local file header to the given writer as a single contiguous record.
#[tracing::instrument(skip(writer))]
pub async fn write(mut writer: impl AsyncWrite + Unpin, header: &LocalFileHeader) -> Result<()> {
    writer.write_all(&header.as_bytes()).await?;
    Ok(())
}
