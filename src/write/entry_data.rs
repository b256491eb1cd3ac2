// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Error, ErrorKind};

use crate::entry::metadata::EntryMetadata;
use crate::entry::ZipEntry;
use crate::error::Result;
use crate::io::offset::AsyncOffsetWriter;
use crate::spec::lfh::{self, LocalFileHeader};
use crate::spec::non_zip64_offset;

use futures_lite::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Writes one entry's local file header followed by its raw, stored data, returning the offset its header begins at.
#[tracing::instrument(skip_all, fields(filename = %entry.filename))]
pub(crate) async fn write<W: AsyncWrite + Unpin>(
    writer: &mut AsyncOffsetWriter<W>,
    entry: &mut ZipEntry,
    buffer: &mut [u8],
) -> Result<u32> {
    let metadata = entry.metadata().await?;
    let lh_offset = non_zip64_offset(writer.offset())?;

    let header = LocalFileHeader::stored(&entry.filename, &metadata)?;
    lfh::write(&mut *writer, &header).await?;
    write_data(writer, entry, &metadata, buffer).await?;

    tracing::debug!(lh_offset, size = metadata.size, crc = metadata.crc, "wrote entry");
    Ok(lh_offset)
}

/// Copies the source to the writer in `buffer`-sized chunks, never holding more than one chunk in memory.
///
/// Exactly `metadata.size` bytes are emitted. The content is re-hashed on the way through; if it no longer matches
/// the checksum already written into the local header, the source changed underneath us and the archive is corrupt.
async fn write_data<W: AsyncWrite + Unpin>(
    writer: &mut AsyncOffsetWriter<W>,
    entry: &ZipEntry,
    metadata: &EntryMetadata,
    buffer: &mut [u8],
) -> Result<()> {
    let mut reader = entry.open(metadata.size).await?;

    loop {
        let read = reader.read(buffer).await.map_err(|err| entry.source_error(err))?;

        if read == 0 {
            break;
        }

        writer.write_all(&buffer[..read]).await?;
    }

    entry.ensure_complete(&reader, metadata.size)?;

    if reader.swap_and_compute_hash() != metadata.crc {
        let err = Error::new(ErrorKind::InvalidData, "source changed after its checksum was computed");
        return Err(entry.source_error(err));
    }

    Ok(())
}
