// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local, LocalResult, TimeZone, Timelike, Utc};

use self::builder::ZipDateTimeBuilder;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446
// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime

/// The earliest year the MS-DOS representation can hold.
pub const MIN_YEAR: i32 = 1980;

/// The latest year the MS-DOS representation can hold.
pub const MAX_YEAR: i32 = 2107;

/// A date and time stored as per the MS-DOS representation used by ZIP files.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        (((self.date & 0xFE00) >> 9) + 1980).into()
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        ((self.date & 0x1E0) >> 5).into()
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        ((self.time & 0xF800) >> 11).into()
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        ((self.time & 0x7E0) >> 5).into()
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }

    /// Returns the packed date field as written into ZIP headers.
    pub fn raw_date(&self) -> u16 {
        self.date
    }

    /// Returns the packed time field as written into ZIP headers.
    pub fn raw_time(&self) -> u16 {
        self.time
    }

    /// Constructs chrono's [`DateTime`] representation of this date & time, interpreted as UTC.
    pub fn as_chrono(&self) -> LocalResult<DateTime<Utc>> {
        self.into()
    }

    /// Constructs this date & time from any of chrono's [`DateTime`] representations.
    ///
    /// The wall-clock fields are taken as they read in the value's own time zone. Values outside of the range
    /// representable by MS-DOS are clamped to its first or last instant.
    pub fn from_chrono<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        match dt.year() {
            year if year < MIN_YEAR => Self::pack(MIN_YEAR, 1, 1, 0, 0, 0),
            year if year > MAX_YEAR => Self::pack(MAX_YEAR, 12, 31, 23, 59, 58),
            year => Self::pack(year, dt.month(), dt.day(), dt.hour(), dt.minute(), dt.second()),
        }
    }

    // Each component is masked into its bit range; out-of-range values are truncated rather than rejected.
    pub(crate) fn pack(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        let year = ((year - MIN_YEAR) & 0x7F) as u16;
        let date = (year << 9) | ((month & 0xF) << 5) as u16 | (day & 0x1F) as u16;
        let time = ((hour & 0x1F) << 11) as u16 | ((minute & 0x3F) << 5) as u16 | ((second >> 1) & 0x1F) as u16;

        Self { date, time }
    }

    /// Constructs this date & time from a file system timestamp, read in the host's local time zone.
    ///
    /// MS-DOS timestamps carry no zone, and archive tools display them as local wall-clock time.
    pub fn from_system_time(time: SystemTime) -> Self {
        Self::from_chrono(&DateTime::<Local>::from(time))
    }
}

impl From<ZipDateTimeBuilder> for ZipDateTime {
    fn from(builder: ZipDateTimeBuilder) -> Self {
        builder.build()
    }
}

impl From<SystemTime> for ZipDateTime {
    fn from(value: SystemTime) -> Self {
        Self::from_system_time(value)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for ZipDateTime {
    fn from(value: &DateTime<Tz>) -> Self {
        Self::from_chrono(value)
    }
}

impl From<&ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: &ZipDateTime) -> Self {
        Utc.with_ymd_and_hms(value.year(), value.month(), value.day(), value.hour(), value.minute(), value.second())
    }
}

impl From<ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: ZipDateTime) -> Self {
        (&value).into()
    }
}
