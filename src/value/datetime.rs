use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Whether a [`DateTimeValue`] carries a time-of-day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeKind {
    /// Calendar date only; time fields are zero.
    #[default]
    Date,
    /// Calendar date plus hour, minute and second.
    DateTime,
}

/// The engine's date/time value, stored in 64-bit date/time columns.
///
/// Fields are kept as decoded; validation is the decoder's concern. The
/// default value is the zero date `0000-00-00`, which packs to `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateTimeValue {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    kind: TimeKind,
}

impl DateTimeValue {
    /// Build a date from its calendar parts.
    pub const fn date(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            kind: TimeKind::Date,
        }
    }

    /// Build a datetime from its calendar and clock parts.
    pub const fn datetime(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            kind: TimeKind::DateTime,
        }
    }

    /// Convert a day number into a date.
    ///
    /// Day 1 is `0001-01-01` of the proleptic Gregorian calendar and day 0 is
    /// `0000-12-31`. Returns `None` when the date falls outside the range a
    /// four-digit year can express.
    pub fn from_day_number(day_number: u32) -> Option<Self> {
        let days = i32::try_from(day_number).ok()?;
        let date = NaiveDate::from_num_days_from_ce_opt(days)?;
        let year = u16::try_from(date.year()).ok().filter(|year| *year <= 9999)?;
        Some(Self::date(year, date.month() as u8, date.day() as u8))
    }

    /// Inverse of [`Self::from_day_number`], ignoring the time of day.
    ///
    /// Returns `None` for dates that are not on the calendar, such as the
    /// zero date.
    pub fn to_day_number(&self) -> Option<u32> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?;
        u32::try_from(date.num_days_from_ce()).ok()
    }

    /// Decode a packed `YYYYMMDDhhmmss` datetime integer.
    ///
    /// Fields are split arithmetically and not validated; a malformed
    /// integer yields wrapped or out-of-calendar fields rather than an error.
    pub fn from_olap_datetime(packed: u64) -> Self {
        let date_part = packed / 1_000_000;
        let time_part = packed % 1_000_000;
        Self::datetime(
            (date_part / 10_000) as u16,
            ((date_part / 100) % 100) as u8,
            (date_part % 100) as u8,
            (time_part / 10_000) as u8,
            ((time_part / 100) % 100) as u8,
            (time_part % 100) as u8,
        )
    }

    /// Pack into a `YYYYMMDDhhmmss` integer.
    pub fn to_olap_datetime(&self) -> u64 {
        let date_part =
            u64::from(self.year) * 10_000 + u64::from(self.month) * 100 + u64::from(self.day);
        let time_part =
            u64::from(self.hour) * 10_000 + u64::from(self.minute) * 100 + u64::from(self.second);
        date_part * 1_000_000 + time_part
    }

    /// Representation stored in a 64-bit date/time column.
    ///
    /// Little-endian bytes: year (2), month, day, hour, minute, second, kind
    /// (`0` date, `1` datetime).
    pub fn to_packed_i64(&self) -> i64 {
        let [year_lo, year_hi] = self.year.to_le_bytes();
        let kind = match self.kind {
            TimeKind::Date => 0,
            TimeKind::DateTime => 1,
        };
        i64::from_le_bytes([
            year_lo,
            year_hi,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            kind,
        ])
    }

    /// Inverse of [`Self::to_packed_i64`].
    pub fn from_packed_i64(packed: i64) -> Self {
        let [year_lo, year_hi, month, day, hour, minute, second, kind] = packed.to_le_bytes();
        Self {
            year: u16::from_le_bytes([year_lo, year_hi]),
            month,
            day,
            hour,
            minute,
            second,
            kind: if kind == 0 {
                TimeKind::Date
            } else {
                TimeKind::DateTime
            },
        }
    }

    /// Calendar year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month of the year, `1..=12` for valid dates.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, `1..=31` for valid dates.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour of the day.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of the minute.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Whether this is a date or a datetime.
    pub fn kind(&self) -> TimeKind {
        self.kind
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.kind == TimeKind::DateTime {
            write!(f, " {:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        }
        Ok(())
    }
}
