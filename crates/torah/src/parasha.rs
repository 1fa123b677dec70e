//! Weekly-portion (parasha) rotation.
//!
//! The 54 portions are read on the Sabbaths of the year starting after
//! Rosh Hashana. Sabbaths that coincide with a festival have their own
//! reading; to finish the cycle in time some portions are paired and read
//! together, depending on the length of the year and the weekday of Pesach.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use tracing::trace;
use yaamod_calendar::HebrewDate;
use yaamod_calendar::month::{AV, NISAN, SIVAN, TISHREI};

use crate::error::TorahError;

/// Names of the weekly portions, indexed from Bereishit = 0.
pub const PARSHIYOT: [&str; 54] = [
    "Bereishit",
    "Noach",
    "Lech Lecha",
    "Vayera",
    "Chayei Sarah",
    "Toldot",
    "Vayetze",
    "Vayishlach",
    "Vayeshev",
    "Miketz",
    "Vayigash",
    "Vayechi",
    "Shemot",
    "Vaera",
    "Bo",
    "Beshalach",
    "Yitro",
    "Mishpatim",
    "Terumah",
    "Tetzaveh",
    "Ki Tisa",
    "Vayakhel",
    "Pekudei",
    "Vayikra",
    "Tzav",
    "Shemini",
    "Tazria",
    "Metzora",
    "Acharei Mot",
    "Kedoshim",
    "Emor",
    "Behar",
    "Bechukotai",
    "Bamidbar",
    "Naso",
    "Behaalotecha",
    "Shelach",
    "Korach",
    "Chukat",
    "Balak",
    "Pinchas",
    "Matot",
    "Masei",
    "Devarim",
    "Vaetchanan",
    "Eikev",
    "Reeh",
    "Shoftim",
    "Ki Teitzei",
    "Ki Tavo",
    "Nitzavim",
    "Vayelech",
    "Haazinu",
    "Vezot Haberachah",
];

const VAYAKHEL: u8 = 21;
const TAZRIA: u8 = 26;
const ACHAREI_MOT: u8 = 28;
const BEHAR: u8 = 31;
const CHUKAT: u8 = 38;
const MATOT: u8 = 41;
const NITZAVIM: u8 = 50;
const VAYELECH: u8 = 51;
const HAAZINU: u8 = 52;

/// Returns the name of portion `number`, or `None` if out of range.
pub fn parasha_name(number: u8) -> Option<&'static str> {
    PARSHIYOT.get(number as usize).copied()
}

/// The portion, or pair of portions, read on one Sabbath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Portions {
    first: u8,
    second: Option<u8>,
}

impl Portions {
    /// A single portion.
    pub fn single(number: u8) -> Self {
        Self {
            first: number,
            second: None,
        }
    }

    /// Two portions read together.
    pub fn double(first: u8, second: u8) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// Returns true if `number` is read on this Sabbath.
    pub fn contains(&self, number: u8) -> bool {
        self.first == number || self.second == Some(number)
    }

    /// Returns true if two portions are combined.
    pub fn is_double(&self) -> bool {
        self.second.is_some()
    }

    /// Iterates the portion numbers in reading order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + use<> {
        std::iter::once(self.first).chain(self.second)
    }
}

impl fmt::Display for Portions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().filter_map(parasha_name).collect();
        write!(f, "{}", names.join("-"))
    }
}

/// Sabbath-by-Sabbath portion assignment for one Hebrew year.
#[derive(Debug, Clone)]
pub struct ParashaTable {
    year: i32,
    israel: bool,
    sabbaths: BTreeMap<HebrewDate, Option<Portions>>,
}

impl ParashaTable {
    /// Returns the Hebrew year of the table.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns true if the table follows the Israel rotation.
    pub fn israel(&self) -> bool {
        self.israel
    }

    /// Returns the portions read on `sabbath`; `None` for festival
    /// Sabbaths and for dates that are not Sabbaths of this year.
    pub fn portions(&self, sabbath: HebrewDate) -> Option<Portions> {
        self.sabbaths.get(&sabbath).copied().flatten()
    }

    /// Iterates the Sabbaths of the year in date order.
    pub fn iter(&self) -> impl Iterator<Item = (HebrewDate, Option<Portions>)> + '_ {
        self.sabbaths.iter().map(|(date, portions)| (*date, *portions))
    }

    /// Number of Sabbaths in the table.
    pub fn len(&self) -> usize {
        self.sabbaths.len()
    }

    /// Returns true if the table has no Sabbaths.
    pub fn is_empty(&self) -> bool {
        self.sabbaths.is_empty()
    }
}

/// Returns true if a Sabbath on `date` has a festival reading instead of a
/// weekly portion.
fn is_festival_sabbath(date: HebrewDate, israel: bool) -> bool {
    let (month, day) = (date.month(), date.day());
    if israel && matches!((month, day), (TISHREI, 23) | (NISAN, 22) | (SIVAN, 7)) {
        return false;
    }
    match month {
        TISHREI => matches!(day, 1 | 2 | 10 | 15..=23),
        NISAN => (15..=22).contains(&day),
        SIVAN => matches!(day, 6 | 7),
        _ => false,
    }
}

/// Builds the portion table for `year`.
///
/// # Errors
///
/// Returns [`TorahError::Calendar`] if `year` (or the following year,
/// whose Rosh Hashana decides the last pairing) is out of range.
pub fn parasha_table(year: i32, israel: bool) -> Result<ParashaTable, TorahError> {
    let rosh_hashana = HebrewDate::new(year, TISHREI, 1)?;
    let erev_pesach = HebrewDate::new(year, NISAN, 14)?;
    let pesach_weekday = (erev_pesach + 1).weekday();
    let tisha_bav = HebrewDate::new(year, AV, 9)?;
    let next_rosh_hashana = HebrewDate::new(year + 1, TISHREI, 1)?;
    let leap = rosh_hashana.is_leap_year();

    let mut queue: VecDeque<u8> = [VAYELECH, HAAZINU].into_iter().chain(0..VAYELECH).collect();
    if rosh_hashana.weekday() > 4 {
        // Vayelech was already read with Nitzavim at the end of last year.
        queue.pop_front();
    }

    let mut sabbaths = BTreeMap::new();
    let mut sabbath = (rosh_hashana + 2).sabbath_on_or_after();
    while sabbath.year() == year {
        if is_festival_sabbath(sabbath, israel) {
            sabbaths.insert(sabbath, None);
        } else if let Some(first) = queue.pop_front() {
            let doubled = match first {
                VAYAKHEL => (erev_pesach - sabbath).div_euclid(7) < 3,
                TAZRIA | ACHAREI_MOT => !leap,
                BEHAR => !leap && (!israel || pesach_weekday != 7),
                CHUKAT => !israel && pesach_weekday == 5,
                MATOT => (tisha_bav - sabbath).div_euclid(7) < 2,
                NITZAVIM => next_rosh_hashana.weekday() > 4,
                _ => false,
            };
            let portions = match queue.front() {
                Some(&second) if doubled => {
                    queue.pop_front();
                    Portions::double(first, second)
                }
                _ => Portions::single(first),
            };
            trace!(date = %sabbath, portions = %portions, "assigned parasha");
            sabbaths.insert(sabbath, Some(portions));
        }
        sabbath = sabbath + 7;
    }

    Ok(ParashaTable {
        year,
        israel,
        sabbaths,
    })
}

/// Returns the portions read on the Sabbath on or after `date`.
pub fn portions_on(date: HebrewDate, israel: bool) -> Result<Option<Portions>, TorahError> {
    let sabbath = date.sabbath_on_or_after();
    let table = parasha_table(sabbath.year(), israel)?;
    Ok(table.portions(sabbath))
}

/// Returns the first Sabbath on or after `reference` on which portion
/// `number` is read, searching this Hebrew year and the next.
///
/// # Errors
///
/// Returns [`TorahError::UnknownParasha`] if `number` is not a portion, and
/// [`TorahError::ParashaNotRead`] if it is never read on a Sabbath.
pub fn next_reading_of_parasha(
    number: u8,
    reference: HebrewDate,
    israel: bool,
) -> Result<HebrewDate, TorahError> {
    let name = parasha_name(number).ok_or(TorahError::UnknownParasha { number })?;
    for year in [reference.year(), reference.year() + 1] {
        let table = parasha_table(year, israel)?;
        let found = table
            .iter()
            .find(|(date, portions)| {
                *date >= reference && portions.is_some_and(|p| p.contains(number))
            })
            .map(|(date, _)| date);
        if let Some(date) = found {
            return Ok(date);
        }
    }
    Err(TorahError::ParashaNotRead { name })
}
