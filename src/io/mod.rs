// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! IO wrappers used while streaming entries: offset tracking on the sink side, hashing on the source side.

pub(crate) mod hashed;
pub(crate) mod offset;
