//! Month numbering, names and lengths.
//!
//! Months are numbered from Nisan, as in the Torah: Nisan = 1 ... Elul = 6,
//! Tishrei = 7 ... Adar = 12, and Adar II = 13 in leap years. The civil
//! year (and the year number) changes at 1 Tishrei.

use crate::molad;

pub const NISAN: u8 = 1;
pub const IYAR: u8 = 2;
pub const SIVAN: u8 = 3;
pub const TAMMUZ: u8 = 4;
pub const AV: u8 = 5;
pub const ELUL: u8 = 6;
pub const TISHREI: u8 = 7;
pub const CHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const TEVET: u8 = 10;
pub const SHEVAT: u8 = 11;
/// Adar of a common year, Adar I of a leap year.
pub const ADAR: u8 = 12;
/// Exists only in leap years.
pub const ADAR_II: u8 = 13;

/// Month names indexed by month number (index 0 unused).
const MONTH_NAMES: [&str; 14] = [
    "", "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev",
    "Tevet", "Shevat", "Adar", "Adar II",
];

/// Returns true if `year` is a leap year (13 months, Adar I and Adar II).
pub fn is_leap_year(year: i32) -> bool {
    molad::is_leap(year)
}

/// Number of months in `year`: 13 in a leap year, 12 otherwise.
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Number of days in `year`, from 1 Tishrei to the next 1 Tishrei.
pub fn days_in_year(year: i32) -> u16 {
    molad::days_in_year(year) as u16
}

/// Number of days in `month` of `year`, or 0 if the month does not exist
/// in that year (Adar II of a common year, or a number outside 1..=13).
pub fn month_length(year: i32, month: u8) -> u8 {
    match month {
        NISAN | SIVAN | AV | TISHREI | SHEVAT => 30,
        IYAR | TAMMUZ | ELUL | TEVET => 29,
        CHESHVAN if molad::long_cheshvan(year) => 30,
        CHESHVAN => 29,
        KISLEV if molad::short_kislev(year) => 29,
        KISLEV => 30,
        ADAR if is_leap_year(year) => 30,
        ADAR => 29,
        ADAR_II if is_leap_year(year) => 29,
        _ => 0,
    }
}

/// English name of `month` in `year`; Adar is "Adar I" in a leap year.
pub fn month_name(year: i32, month: u8) -> &'static str {
    if month == ADAR && is_leap_year(year) {
        return "Adar I";
    }
    MONTH_NAMES.get(month as usize).copied().unwrap_or("")
}

/// Months of `year` in calendar order, starting from Tishrei.
pub(crate) fn months_in_order(year: i32) -> impl Iterator<Item = u8> {
    (TISHREI..=months_in_year(year)).chain(NISAN..TISHREI)
}

/// Day number of the first day of `month` in `year`.
///
/// The month is assumed valid for the year.
pub(crate) fn month_start(year: i32, month: u8) -> i64 {
    let mut rd = molad::new_year(year);
    for m in months_in_order(year) {
        if m == month {
            break;
        }
        rd += i64::from(month_length(year, m));
    }
    rd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_sum_to_year_length() {
        for year in 5740..5800 {
            let total: u16 = months_in_order(year)
                .map(|m| u16::from(month_length(year, m)))
                .sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn adar_lengths() {
        // 5779 is leap, 5780 is not.
        assert_eq!(month_length(5779, ADAR), 30);
        assert_eq!(month_length(5779, ADAR_II), 29);
        assert_eq!(month_length(5780, ADAR), 29);
        assert_eq!(month_length(5780, ADAR_II), 0);
    }

    #[test]
    fn invalid_month_has_no_length() {
        assert_eq!(month_length(5780, 0), 0);
        assert_eq!(month_length(5780, 14), 0);
    }

    #[test]
    fn names() {
        assert_eq!(month_name(5780, TISHREI), "Tishrei");
        assert_eq!(month_name(5780, ADAR), "Adar");
        assert_eq!(month_name(5779, ADAR), "Adar I");
        assert_eq!(month_name(5779, ADAR_II), "Adar II");
        assert_eq!(month_name(5779, 14), "");
    }

    #[test]
    fn order_starts_at_tishrei() {
        let order: Vec<u8> = months_in_order(5780).collect();
        assert_eq!(order, vec![7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6]);
        let leap: Vec<u8> = months_in_order(5779).collect();
        assert_eq!(leap, vec![7, 8, 9, 10, 11, 12, 13, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn month_start_of_tishrei_is_new_year() {
        assert_eq!(month_start(5780, TISHREI), molad::new_year(5780));
        assert_eq!(
            month_start(5780, NISAN),
            molad::new_year(5780) + 30 + 30 + 30 + 29 + 30 + 29
        );
    }
}
