// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Byte-exact encoders (and matching decoders) for the three record kinds a stored archive contains.

pub mod cdr;
pub mod eocdr;
pub mod lfh;
pub mod version;

/// The length in bytes of a signature. All signatures are u32s, so 4 bytes long.
pub const SIGNATURE_LENGTH: usize = 4;

/// The compression method value for entries embedded verbatim.
pub const COMPRESSION_STORED: u16 = 0;

// Sizes, offsets and counts equal to these values are reserved as zip64 markers.
pub const NON_ZIP64_MAX_SIZE: u32 = 0xFFFFFFFF;
pub const NON_ZIP64_MAX_NUM_FILES: u16 = 0xFFFF;

macro_rules! raw {
    ($name:ident { $($field:ident, $type:ty),* }) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field : $type),*
        }

        /// The length in bytes of the raw record, excluding its signature.
        pub const LENGTH: usize = 0 $(+ std::mem::size_of::<$type>())*;

        impl $name {
            /// Encodes the raw record into its fixed-width little-endian layout.
            pub fn as_bytes(&self) -> [u8; LENGTH] {
                let mut array = [0; LENGTH];
                let mut cursor = 0;

                $(crate::spec::array_push!(array, cursor, self.$field.to_le_bytes());)*

                array
            }

            /// Decodes the raw record from its fixed-width little-endian layout.
            pub fn from_bytes(value: &[u8; LENGTH]) -> Self {
                let mut cursor = 0;

                $(
                    let mut $field = [0; std::mem::size_of::<$type>()];
                    $field.copy_from_slice(&value[cursor..cursor + std::mem::size_of::<$type>()]);
                    cursor += std::mem::size_of::<$type>();
                    let $field = <$type>::from_le_bytes($field);
                )*

                debug_assert_eq!(cursor, LENGTH);
                Self { $($field),* }
            }
        }

        /// Reads the raw underlying header from the given reader.
        #[tracing::instrument(skip(reader))]
        pub async fn raw_read(mut reader: impl futures_lite::io::AsyncRead + Unpin) -> crate::error::Result<$name> {
            let mut buffer = [0; LENGTH];
            futures_lite::io::AsyncReadExt::read_exact(&mut reader, &mut buffer).await?;
            Ok($name::from_bytes(&buffer))
        }
    }
}

macro_rules! raw_deref {
    ($from:ident, $to:ident) => {
        impl std::ops::Deref for $from {
            type Target = $to;

            fn deref(&self) -> &Self::Target {
                &self.raw
            }
        }

        impl std::ops::DerefMut for $from {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.raw
            }
        }
    };
}

/// Replace elements of an array at a given cursor index for use with a zero-initialised array.
macro_rules! array_push {
    ($arr:ident, $cursor:ident, $value:expr) => {{
        for entry in $value {
            $arr[$cursor] = entry;
            $cursor += 1;
        }
    }};
}

pub(crate) use array_push;
pub(crate) use raw;
pub(crate) use raw_deref;

/// Narrows a running stream offset into the 4-byte field the classic format stores it in.
pub(crate) fn non_zip64_offset(offset: u64) -> crate::error::Result<u32> {
    match u32::try_from(offset) {
        Ok(value) if value != NON_ZIP64_MAX_SIZE => Ok(value),
        _ => Err(crate::error::ZipError::ArchiveTooLarge(offset)),
    }
}
