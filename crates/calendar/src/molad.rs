//! Molad arithmetic: day numbers of Rosh Hashana and year lengths.
//!
//! Day numbers are Rata Die (day 1 = 1 January 1 CE, proleptic Gregorian),
//! the same count chrono exposes through `num_days_from_ce`.

/// Day number of 1 Tishrei AM 1 (7 October 3761 BCE, proleptic Julian).
pub(crate) const EPOCH: i64 = -1_373_427;

/// Parts (halakim) in one day.
const PARTS_PER_DAY: i64 = 25_920;

/// Parts in one mean lunar month beyond 29 whole days (12h 793p).
const MONTH_EXCESS_PARTS: i64 = 13_753;

/// Parts of the molad of Tishrei AM 1 (BaHaRaD: day 2, 5h 204p) plus the
/// half-day bias of counting from noon.
const MOLAD_TOHU_PARTS: i64 = 12_084;

/// Returns true if `year` has thirteen months.
pub(crate) fn is_leap(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Days from the epoch to the molad-determined Rosh Hashana of `year`,
/// with the molad zaken and lo ADU rosh postponements applied.
fn elapsed_days(year: i32) -> i64 {
    let months_elapsed = (235 * i64::from(year) - 234).div_euclid(19);
    let parts_elapsed = MOLAD_TOHU_PARTS + MONTH_EXCESS_PARTS * months_elapsed;
    let day = 29 * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Extra delay keeping year lengths within 353..=355 and 383..=385
/// (the GaTaRaD and BeTUTaKPaT rules).
fn year_length_correction(year: i32) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Day number of 1 Tishrei of `year`.
pub(crate) fn new_year(year: i32) -> i64 {
    EPOCH + elapsed_days(year) + year_length_correction(year)
}

/// Number of days in `year` (353..=355 or 383..=385).
pub(crate) fn days_in_year(year: i32) -> i64 {
    new_year(year + 1) - new_year(year)
}

/// Returns true if Cheshvan has 30 days in `year`.
pub(crate) fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// Returns true if Kislev has 29 days in `year`.
pub(crate) fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Hebrew year containing day number `rd`.
pub(crate) fn year_of(rd: i64) -> i32 {
    // Mean year length is 35975351/98496 days; the estimate is off by at most one.
    let mut year = ((rd - EPOCH) * 98_496).div_euclid(35_975_351) as i32;
    while new_year(year + 1) <= rd {
        year += 1;
    }
    while new_year(year) > rd {
        year -= 1;
    }
    year
}
