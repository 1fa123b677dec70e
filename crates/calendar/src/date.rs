//! Hebrew date with chronological ordering and day arithmetic.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::molad;
use crate::month::{
    NISAN, TISHREI, month_length, month_name, month_start, months_in_order, months_in_year,
};

/// Weekday number of the Sabbath (1 = Sunday ... 7 = Saturday).
pub const SABBATH: u8 = 7;

/// A date in the Hebrew calendar.
///
/// Dates compare chronologically. Within a single year that is not the
/// order of `(year, month, day)` tuples, because the year begins in
/// Tishrei (month 7) while months are numbered from Nisan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
    /// Absolute day number, shared with chrono's days-from-CE count.
    rd: i32,
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rd.cmp(&other.rd)
    }
}

impl HebrewDate {
    /// Creates a new `HebrewDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside 1..=9999,
    /// [`CalendarError::InvalidMonth`] if the month does not exist in that
    /// year, and [`CalendarError::InvalidDay`] if the day exceeds the month
    /// length.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=9999).contains(&year) {
            return Err(CalendarError::InvalidYear { year });
        }
        let months = months_in_year(year);
        if !(1..=months).contains(&month) {
            return Err(CalendarError::InvalidMonth {
                year,
                month,
                months_in_year: months,
            });
        }
        let max_day = month_length(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        let rd = month_start(year, month) + i64::from(day) - 1;
        Ok(Self {
            year,
            month,
            day,
            rd: rd as i32,
        })
    }

    /// Creates the Hebrew date falling on absolute day number `rd`.
    pub(crate) fn from_day_number(rd: i32) -> Self {
        let year = molad::year_of(i64::from(rd));
        let first_of_nisan = month_start(year, NISAN);
        let mut month = if i64::from(rd) < first_of_nisan { TISHREI } else { NISAN };
        let mut start = month_start(year, month);
        while i64::from(rd) >= start + i64::from(month_length(year, month)) {
            start += i64::from(month_length(year, month));
            month = next_month_in_order(year, month);
        }
        Self {
            year,
            month,
            day: (i64::from(rd) - start + 1) as u8,
            rd,
        }
    }

    /// Converts a Gregorian date (the civil day, before sunset).
    pub fn from_gregorian(date: NaiveDate) -> Self {
        Self::from_day_number(date.num_days_from_ce())
    }

    /// Returns the Gregorian date on which this Hebrew day ends.
    ///
    /// The Hebrew day begins at the preceding sunset; the returned civil
    /// date is the one covering its daylight hours.
    pub fn to_gregorian(self) -> NaiveDate {
        // Every HebrewDate is built from a validated year or from a NaiveDate,
        // both of which lie well inside chrono's range.
        NaiveDate::from_num_days_from_ce_opt(self.rd)
            .expect("HebrewDate lies within chrono's range")
    }

    /// Returns the year (Anno Mundi).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1 = Nisan ... 12 = Adar/Adar I, 13 = Adar II).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the weekday, 1 = Sunday ... 7 = Saturday.
    pub fn weekday(self) -> u8 {
        (self.rd.rem_euclid(7) + 1) as u8
    }

    /// Returns true if this date is a Sabbath.
    pub fn is_sabbath(self) -> bool {
        self.weekday() == SABBATH
    }

    /// Returns this date if it is a Sabbath, otherwise the next Sabbath.
    pub fn sabbath_on_or_after(self) -> Self {
        self + i32::from(SABBATH - self.weekday())
    }

    /// Returns the next day.
    pub fn next(self) -> Self {
        self + 1
    }

    /// Returns true if this date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        molad::is_leap(self.year)
    }
}

fn next_month_in_order(year: i32, month: u8) -> u8 {
    let mut order = months_in_order(year).skip_while(|&m| m != month);
    order.next();
    order.next().unwrap_or(TISHREI)
}

impl Add<i32> for HebrewDate {
    type Output = HebrewDate;

    fn add(self, days: i32) -> HebrewDate {
        HebrewDate::from_day_number(self.rd + days)
    }
}

impl Sub<i32> for HebrewDate {
    type Output = HebrewDate;

    fn sub(self, days: i32) -> HebrewDate {
        HebrewDate::from_day_number(self.rd - days)
    }
}

/// Number of days from `other` to `self`.
impl Sub<HebrewDate> for HebrewDate {
    type Output = i32;

    fn sub(self, other: HebrewDate) -> i32 {
        self.rd - other.rd
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day,
            month_name(self.year, self.month),
            self.year
        )
    }
}
