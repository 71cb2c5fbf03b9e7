use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::types::{CalendarDateTime, JulianDate};

/// Integer part of `jd + 0.5` from which the inverse conversion applies the
/// Gregorian correction. 1582-10-15 00:00 itself is JD 2299160.5.
pub const GREGORIAN_CUTOVER_DAY: i64 = 2_299_160;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

const JD_OFFSET: f64 = 1_720_994.5;

pub fn is_leap_year(year: i32) -> bool {
    if year < 1582 {
        year.rem_euclid(4) == 0
    } else {
        (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
    }
}

pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn before_gregorian_cutover(date: &CalendarDateTime) -> bool {
    date.year < 1582
        || (date.year == 1582 && date.month < 10)
        || (date.year == 1582 && date.month == 10 && date.day < 15.0)
}

/// Calendar date (UTC) to Julian Date, Meeus' algorithm.
///
/// Dates before 1582-10-15 are read in the Julian calendar, later ones in the
/// Gregorian. Month and day are not range-checked.
pub fn to_julian_date(date: &CalendarDateTime) -> JulianDate {
    let (year, month) = if date.month <= 2 {
        (date.year - 1, date.month + 12)
    } else {
        (date.year, date.month)
    };
    let year = year as f64;
    let month = month as f64;

    let b = if before_gregorian_cutover(date) {
        0.0
    } else {
        let a = (year / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    };

    let c = if year < 0.0 {
        (365.25 * year - 0.75).trunc()
    } else {
        (365.25 * year).trunc()
    };
    let d = (30.6001 * (month + 1.0)).trunc();

    JulianDate(b + c + d + date.day + JD_OFFSET)
}

/// Julian Date back to a UTC calendar date; exact inverse of [`to_julian_date`].
pub fn to_calendar_date_time(jd: JulianDate) -> CalendarDateTime {
    let shifted = jd.value() + 0.5;
    let i = shifted.trunc();
    let f = shifted - i;

    let a = ((i - 1_867_216.25) / 36_524.25).trunc();
    let b = if i > GREGORIAN_CUTOVER_DAY as f64 {
        i + 1.0 + a - (a / 4.0).trunc()
    } else {
        i
    };
    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).trunc();
    let e = (365.25 * d).trunc();
    let g = ((c - e) / 30.6001).trunc();

    let day = c - e + f - (30.6001 * g).trunc();
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    CalendarDateTime {
        year: year as i32,
        month: month as i32,
        day,
    }
}

impl CalendarDateTime {
    pub fn new(year: i32, month: i32, day: f64) -> Self {
        Self { year, month, day }
    }

    pub fn from_ymd_hms(year: i32, month: i32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let fraction =
            (hour as f64 * 3600.0 + minute as f64 * 60.0 + second) / SECONDS_PER_DAY;
        Self::new(year, month, day as f64 + fraction)
    }

    pub fn to_julian_date(&self) -> JulianDate {
        to_julian_date(self)
    }

    /// Hour, minute and second carried in the fractional day.
    pub fn time_of_day(&self) -> (u32, u32, f64) {
        let total_seconds = self.day.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        (hour, minute, total_seconds % 60.0)
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // tenths of a second, held below midnight so rounding never rolls the day
        let tenths = ((self.day.fract() * SECONDS_PER_DAY * 10.0).round() as u64).min(863_999);
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{} UTC",
            self.year,
            self.month,
            self.day.trunc() as i64,
            tenths / 36_000,
            tenths / 600 % 60,
            tenths / 10 % 60,
            tenths % 10
        )
    }
}

/// UTC calendar date of a zoned `chrono` timestamp.
pub fn calendar_from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> CalendarDateTime {
    let utc = dt.with_timezone(&Utc);
    let second = utc.second() as f64 + utc.nanosecond() as f64 / 1e9;
    CalendarDateTime::from_ymd_hms(
        utc.year(),
        utc.month() as i32,
        utc.day(),
        utc.hour(),
        utc.minute(),
        second,
    )
}

pub fn julian_date_from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> JulianDate {
    to_julian_date(&calendar_from_datetime(dt))
}

pub fn julian_date_now() -> JulianDate {
    julian_date_from_datetime(&Utc::now())
}
