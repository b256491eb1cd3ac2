// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

use futures_lite::io::{AsyncRead, AsyncReadExt};

/// Read and return a dynamic length vector of bytes from a reader which impls AsyncRead.
pub(crate) async fn read_bytes<R: AsyncRead + Unpin>(reader: R, length: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(length);
    reader.take(length as u64).read_to_end(&mut buffer).await?;

    if buffer.len() != length {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }

    Ok(buffer)
}

pub(crate) async fn read_u32<R: AsyncRead + Unpin>(mut reader: R) -> Result<u32> {
    let mut buffer = [0; 4];
    reader.read_exact(&mut buffer).await?;
    Ok(u32::from_le_bytes(buffer))
}

/// Assert that the next four-byte signature read by a reader which impls AsyncRead matches the expected signature.
pub(crate) async fn assert_signature<R: AsyncRead + Unpin>(reader: R, expected: u32) -> Result<()> {
    match read_u32(reader).await? {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}
