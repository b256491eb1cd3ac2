// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{TimeZone, Utc};

use crate::{ZipDateTime, ZipDateTimeBuilder};

#[test]
fn date_conversion_test_chrono() {
    let original_dt = Utc.timestamp_opt(1666544102, 0).unwrap();
    let zip_dt = ZipDateTime::from_chrono(&original_dt);
    let result_dt = zip_dt.as_chrono().single().expect("expected single unique result");
    assert_eq!(result_dt, original_dt);
}

#[test]
fn date_conversion_test() {
    let year = 2000;
    let month = 9;
    let day = 8;
    let hour = 7;
    let minute = 5;
    let second = 4;

    let mut builder = ZipDateTimeBuilder::new();

    builder = builder.year(year);
    builder = builder.month(month);
    builder = builder.day(day);
    builder = builder.hour(hour);
    builder = builder.minute(minute);
    builder = builder.second(second);

    let built = builder.build();

    assert_eq!(year, built.year());
    assert_eq!(month, built.month());
    assert_eq!(day, built.day());
    assert_eq!(hour, built.hour());
    assert_eq!(minute, built.minute());
    assert_eq!(second, built.second());
}

#[test]
fn dos_packing() {
    let dt = Utc.with_ymd_and_hms(2013, 5, 17, 14, 31, 47).unwrap();
    let zip_dt = ZipDateTime::from_chrono(&dt);

    assert_eq!(zip_dt.raw_date(), (33 << 9) | (5 << 5) | 17);
    assert_eq!(zip_dt.raw_time(), (14 << 11) | (31 << 5) | 23);

    // Two second granularity.
    assert_eq!(zip_dt.second(), 46);
}

#[test]
fn out_of_range_years_are_clamped() {
    let early = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
    assert_eq!((early.year(), early.month(), early.day()), (1980, 1, 1));
    assert_eq!(early.raw_time(), 0);

    let late = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(2200, 6, 1, 12, 0, 0).unwrap());
    assert_eq!((late.year(), late.month(), late.day()), (2107, 12, 31));
    assert_eq!((late.hour(), late.minute(), late.second()), (23, 59, 58));
}
