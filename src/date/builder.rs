// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::date::{ZipDateTime, MIN_YEAR};

/// A builder for [`ZipDateTime`], mainly useful for fixed timestamps in tests and fixtures.
///
/// Components are held as given and only packed by [`ZipDateTimeBuilder::build()`], where each one is masked into
/// its bit range. Unset components are zero, except the year which defaults to 1980.
///
/// ```
/// # use async_zip_stream::ZipDateTimeBuilder;
/// #
/// let date = ZipDateTimeBuilder::new().year(2024).month(3).day(2).hour(9).build();
/// assert_eq!((date.year(), date.month(), date.day(), date.hour()), (2024, 3, 2, 9));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ZipDateTimeBuilder {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Default for ZipDateTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipDateTimeBuilder {
    pub fn new() -> Self {
        Self { year: MIN_YEAR, month: 0, day: 0, hour: 0, minute: 0, second: 0 }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    /// Odd values are rounded down, as MS-DOS only stores seconds at a granularity of two.
    pub fn second(mut self, second: u32) -> Self {
        self.second = second;
        self
    }

    pub fn build(self) -> ZipDateTime {
        ZipDateTime::pack(self.year, self.month, self.day, self.hour, self.minute, self.second)
    }
}
