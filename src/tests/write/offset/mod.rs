// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use futures_lite::io::{AsyncWriteExt, Cursor};

use crate::io::offset::AsyncOffsetWriter;
use crate::tests::write::AsyncSink;

#[tokio::test]
async fn basic() {
    let mut writer = AsyncOffsetWriter::new(Cursor::new(Vec::<u8>::new()));
    assert_eq!(writer.offset(), 0);

    writer.write_all(b"Foo. Bar. Foo. Bar.").await.expect("failed to write data");
    assert_eq!(writer.offset(), 19);

    writer.write_all(b"Foo. Foo.").await.expect("failed to write data");
    assert_eq!(writer.offset(), 28);

    writer.write_all(b"Bar. Bar.").await.expect("failed to write data");
    assert_eq!(writer.offset(), 37);
}

#[tokio::test]
async fn only_accepted_bytes_are_counted() {
    let mut writer = AsyncOffsetWriter::new(AsyncSink { capacity: 10 });

    writer.write_all(b"Foo. Bar.").await.expect("failed to write data");
    assert_eq!(writer.offset(), 9);

    assert!(writer.write_all(b"Foo. Bar.").await.is_err());
    assert_eq!(writer.offset(), 10);
}
