//! Error types for the yaamod-calendar crate.

use crate::date::HebrewDate;

/// Error type for all fallible operations in the yaamod-calendar crate.
///
/// This enum covers validation failures for Hebrew year, month and day
/// values, and anniversary queries whose reference date does not follow
/// the original date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a Hebrew year is outside the supported range 1..=9999.
    #[error("invalid year: {year} (must be 1..=9999)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number does not exist in the given year.
    #[error("invalid month: {month} for year {year} (must be 1..={months_in_year})")]
    InvalidMonth {
        /// The year the month was checked against.
        year: i32,
        /// The invalid month number that was provided.
        month: u8,
        /// Number of months in that year (12, or 13 in a leap year).
        months_in_year: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The year of the month.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The length of the month in that year.
        max_day: u8,
    },

    /// Returned by anniversary lookups when the reference date is not
    /// strictly after the original date.
    #[error("reference date {reference} must be after original date {original}")]
    ReferenceNotAfterOriginal {
        /// The date whose anniversary was requested.
        original: HebrewDate,
        /// The reference date that failed the check.
        reference: HebrewDate,
    },
}
