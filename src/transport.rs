// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Helpers for serving an archive as a file download.
//!
//! Nothing in this module is used while writing an archive. A transport layer (eg. an HTTP handler) sets these
//! headers on its response before handing the response body to [`ZipArchive::output()`] as the sink.
//!
//! [`ZipArchive::output()`]: crate::ZipArchive::output

/// The media type of a ZIP archive.
pub const CONTENT_TYPE: &str = "application/zip";

/// Returns the response headers which present an archive as a binary attachment named `file_name`.
///
/// ```
/// # use async_zip_stream::transport::attachment_headers;
/// #
/// let headers = attachment_headers("images.zip");
/// assert_eq!(headers[2], ("Content-Disposition", String::from("attachment; filename=\"images.zip\"")));
/// ```
pub fn attachment_headers(file_name: &str) -> [(&'static str, String); 3] {
    [
        ("Content-Type", CONTENT_TYPE.to_string()),
        ("Content-Transfer-Encoding", String::from("Binary")),
        ("Content-Disposition", format!("attachment; filename=\"{}\"", quote(file_name))),
    ]
}

// Escapes a value for use inside an HTTP quoted-string. Control characters can't be represented, so are dropped.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len());

    for character in value.chars().filter(|character| !character.is_control()) {
        if matches!(character, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(character);
    }

    quoted
}
