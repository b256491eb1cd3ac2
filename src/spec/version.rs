// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
//
// Stored entries with no directories, encryption or zip64 records only ever need the baseline 1.0 reader.
pub const NEEDED_TO_EXTRACT: u16 = 10;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
//
// The upper byte (host system) is left as MS-DOS; the lower byte advertises specification version 2.0.
pub const MADE_BY: u16 = 20;
