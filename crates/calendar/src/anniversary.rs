//! Anniversaries of Hebrew dates across leap and common years.

use crate::date::HebrewDate;
use crate::error::CalendarError;
use crate::month::{ADAR, ADAR_II, NISAN, is_leap_year, month_length};

/// Computes the `n`th anniversary of `original`.
///
/// The anniversary month is chosen as follows:
///
/// 1. Adar of a common year maps to Adar II when the target year is leap.
/// 2. Adar II of a leap year maps to Adar when the target year is common.
/// 3. Otherwise the month is kept.
///
/// If the day does not exist in the anniversary month (30 Cheshvan,
/// 30 Kislev, or 30 Adar I landing in a common year) the anniversary is the
/// first of the following month; for 30 Adar I that is 1 Nisan of the same
/// target year.
///
/// # Errors
///
/// Returns [`CalendarError`] only if the target year leaves the supported
/// range.
pub fn nth_anniversary_of(original: HebrewDate, n: i32) -> Result<HebrewDate, CalendarError> {
    let year = original.year() + n;
    let original_leap = original.is_leap_year();
    let target_leap = is_leap_year(year);

    let month = match original.month() {
        ADAR if !original_leap && target_leap => ADAR_II,
        ADAR_II if original_leap && !target_leap => ADAR,
        month => month,
    };

    if original.day() > month_length(year, month) {
        if month == ADAR {
            return HebrewDate::new(year, NISAN, 1);
        }
        return HebrewDate::new(year, month + 1, 1);
    }
    HebrewDate::new(year, month, original.day())
}

/// Returns the first anniversary of `original` on or after `reference`.
///
/// # Errors
///
/// Returns [`CalendarError::ReferenceNotAfterOriginal`] unless `reference`
/// is strictly later than `original`.
pub fn next_anniversary_of(
    original: HebrewDate,
    reference: HebrewDate,
) -> Result<HebrewDate, CalendarError> {
    if reference <= original {
        return Err(CalendarError::ReferenceNotAfterOriginal {
            original,
            reference,
        });
    }
    // Trying both candidates is simpler than predicting which one the leap
    // rules will land on.
    let years_ago = reference.year() - original.year();
    let candidate = nth_anniversary_of(original, years_ago)?;
    if candidate < reference {
        return nth_anniversary_of(original, years_ago + 1);
    }
    Ok(candidate)
}
