//! Gregorian to Hebrew conversion with the sunset rule.

use chrono::NaiveDate;

use crate::date::HebrewDate;

/// Converts an optional Gregorian date to its Hebrew date.
///
/// The Hebrew day begins at sunset, so an event recorded after sunset on
/// Gregorian day X belongs to the Hebrew day of X + 1. `None` in gives
/// `None` out.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use yaamod_calendar::{HebrewDate, to_hebrew_date};
///
/// let day = NaiveDate::from_ymd_opt(1989, 11, 28);
/// assert_eq!(to_hebrew_date(day, false), HebrewDate::new(5750, 8, 30).ok());
/// assert_eq!(to_hebrew_date(day, true), HebrewDate::new(5750, 9, 1).ok());
/// assert_eq!(to_hebrew_date(None, true), None);
/// ```
pub fn to_hebrew_date(gregorian_date: Option<NaiveDate>, after_sunset: bool) -> Option<HebrewDate> {
    let hebrew_date = HebrewDate::from_gregorian(gregorian_date?);
    if after_sunset {
        Some(hebrew_date + 1)
    } else {
        Some(hebrew_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_passes_through() {
        assert_eq!(to_hebrew_date(None, false), None);
        assert_eq!(to_hebrew_date(None, true), None);
    }

    #[test]
    fn after_sunset_crosses_month() {
        let day = NaiveDate::from_ymd_opt(1989, 11, 28);
        assert_eq!(
            to_hebrew_date(day, false),
            Some(HebrewDate::new(5750, 8, 30).unwrap())
        );
        assert_eq!(
            to_hebrew_date(day, true),
            Some(HebrewDate::new(5750, 9, 1).unwrap())
        );
    }

    #[test]
    fn new_years_day_2019() {
        let day = NaiveDate::from_ymd_opt(2019, 1, 1);
        assert_eq!(
            to_hebrew_date(day, false),
            Some(HebrewDate::new(5779, 10, 24).unwrap())
        );
    }
}
