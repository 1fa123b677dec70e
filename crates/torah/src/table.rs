//! Yearly table of Torah-reading occasions.
//!
//! The table is built in four stages, each overriding the previous ones on
//! the dates it touches:
//!
//! 1. festivals ([`festival_days`]),
//! 2. Rosh Chodesh ([`rosh_chodesh_days`]),
//! 3. Sabbaths ([`sabbaths_of_year`]),
//! 4. public fasts ([`fast_days`]), which never fall on a Sabbath.

use std::collections::BTreeMap;

use tracing::debug;
use yaamod_calendar::month::{ADAR, ADAR_II, AV, KISLEV, NISAN, SIVAN, TAMMUZ, TEVET, TISHREI};
use yaamod_calendar::{HebrewDate, is_leap_year, month_length, months_in_year};

use crate::error::TorahError;
use crate::occasion::{OccasionKind, TorahReadingOccasion};
use crate::region::Region;

/// One dated entry produced by a build stage.
pub type DatedOccasion = (HebrewDate, OccasionKind);

/// All Torah-reading occasions of one Hebrew year, one per date.
#[derive(Debug, Clone, PartialEq)]
pub struct OccasionTable {
    year: i32,
    region: Region,
    occasions: BTreeMap<HebrewDate, TorahReadingOccasion>,
}

impl OccasionTable {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the occasion on `date`, if the Torah is read that day.
    pub fn get(&self, date: HebrewDate) -> Option<&TorahReadingOccasion> {
        self.occasions.get(&date)
    }

    /// Iterates occasions in date order.
    pub fn iter(&self) -> impl Iterator<Item = (HebrewDate, &TorahReadingOccasion)> + '_ {
        self.occasions.iter().map(|(date, occasion)| (*date, occasion))
    }

    pub fn len(&self) -> usize {
        self.occasions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occasions.is_empty()
    }

    /// Number of dates whose occasion is of `kind`.
    pub fn count_of(&self, kind: OccasionKind) -> usize {
        self.occasions.values().filter(|o| o.kind() == kind).count()
    }
}

/// Month of Purim: Adar II in a leap year, Adar otherwise.
fn purim_month(year: i32) -> u8 {
    if is_leap_year(year) { ADAR_II } else { ADAR }
}

/// Festival days of `year` for `region`, in build order.
///
/// Purim (or Shushan Purim in Jerusalem) is left out when it falls on a
/// Sabbath.
pub fn festival_days(year: i32, region: Region) -> Result<Vec<DatedOccasion>, TorahError> {
    use OccasionKind::*;

    let israel = region.in_israel();
    let mut days = Vec::with_capacity(40);
    let mut push = |month: u8, day: u8, kind: OccasionKind| -> Result<(), TorahError> {
        days.push((HebrewDate::new(year, month, day)?, kind));
        Ok(())
    };

    push(TISHREI, 1, RoshHashana)?;
    push(TISHREI, 2, RoshHashana)?;
    push(TISHREI, 10, YomKippur)?;
    push(TISHREI, 15, Sukkot)?;
    push(TISHREI, 16, if israel { CholHamoedSukkot } else { Sukkot })?;
    for day in 17..=21 {
        push(TISHREI, day, CholHamoedSukkot)?;
    }
    push(TISHREI, 22, ShminiAtzeret)?;
    if !israel {
        push(TISHREI, 23, SimchatTorah)?;
    }

    let chanukah = HebrewDate::new(year, KISLEV, 25)?;
    for offset in 0..8 {
        days.push((chanukah + offset, Chanukah));
    }

    let purim = if region.in_jerusalem() {
        (HebrewDate::new(year, purim_month(year), 15)?, ShushanPurim)
    } else {
        (HebrewDate::new(year, purim_month(year), 14)?, Purim)
    };
    if !purim.0.is_sabbath() {
        days.push(purim);
    }

    let mut push = |month: u8, day: u8, kind: OccasionKind| -> Result<(), TorahError> {
        days.push((HebrewDate::new(year, month, day)?, kind));
        Ok(())
    };
    push(NISAN, 15, Pesach)?;
    push(NISAN, 16, if israel { CholHamoedPesach } else { Pesach })?;
    for day in 17..=20 {
        push(NISAN, day, CholHamoedPesach)?;
    }
    push(NISAN, 21, Pesach)?;
    if !israel {
        push(NISAN, 22, Pesach)?;
    }
    push(SIVAN, 6, Shavuot)?;
    if !israel {
        push(SIVAN, 7, Shavuot)?;
    }

    Ok(days)
}

/// Rosh Chodesh days of `year`: the first, and the thirtieth where it
/// exists, of every month but Tishrei.
pub fn rosh_chodesh_days(year: i32) -> Result<Vec<DatedOccasion>, TorahError> {
    let mut days = Vec::with_capacity(20);
    for month in (1..=months_in_year(year)).filter(|&m| m != TISHREI) {
        days.push((HebrewDate::new(year, month, 1)?, OccasionKind::RoshChodesh));
        if month_length(year, month) == 30 {
            days.push((HebrewDate::new(year, month, 30)?, OccasionKind::RoshChodesh));
        }
    }
    Ok(days)
}

/// Every Sabbath from Rosh Hashana to the end of `year`.
pub fn sabbaths_of_year(year: i32) -> Result<Vec<DatedOccasion>, TorahError> {
    let mut sabbath = HebrewDate::new(year, TISHREI, 1)?.sabbath_on_or_after();
    let mut days = Vec::with_capacity(56);
    while sabbath.year() == year {
        days.push((sabbath, OccasionKind::Shabbat));
        sabbath = sabbath + 7;
    }
    Ok(days)
}

/// The five public fasts of `year`, each moved to Sunday when its date is a
/// Sabbath.
///
/// Taanit Esther is moved to Sunday as well, although custom observes it on
/// the preceding Thursday.
pub fn fast_days(year: i32) -> Result<Vec<DatedOccasion>, TorahError> {
    let fasts = [
        (TISHREI, 3, OccasionKind::TzomGedalia),
        (TEVET, 10, OccasionKind::TenthOfTevet),
        (purim_month(year), 13, OccasionKind::TaanitEsther),
        (TAMMUZ, 17, OccasionKind::SeventeenthOfTamuz),
        (AV, 9, OccasionKind::NinthOfAv),
    ];
    fasts
        .into_iter()
        .map(|(month, day, kind)| {
            let date = HebrewDate::new(year, month, day)?;
            let observed = if date.is_sabbath() { date + 1 } else { date };
            Ok((observed, kind))
        })
        .collect()
}

/// Builds the occasion table of `year` for a synagogue in or outside Israel
/// and Jerusalem.
///
/// # Errors
///
/// Returns [`TorahError::JerusalemOutsideIsrael`] for `jerusalem` without
/// `israel`, and [`TorahError::Calendar`] for years out of range.
///
/// # Examples
///
/// ```
/// use yaamod_calendar::HebrewDate;
/// use yaamod_torah::{OccasionKind, make_torah_reading_occasions_table};
///
/// let table = make_torah_reading_occasions_table(5780, false, false).unwrap();
/// let yom_kippur = table.get(HebrewDate::new(5780, 7, 10).unwrap()).unwrap();
/// assert_eq!(yom_kippur.kind(), OccasionKind::YomKippur);
/// assert_eq!(yom_kippur.mincha_aliyot(), 3);
/// ```
#[tracing::instrument]
pub fn make_torah_reading_occasions_table(
    year: i32,
    israel: bool,
    jerusalem: bool,
) -> Result<OccasionTable, TorahError> {
    let region = Region::new(israel, jerusalem)?;
    let stages = [
        festival_days(year, region)?,
        rosh_chodesh_days(year)?,
        sabbaths_of_year(year)?,
        fast_days(year)?,
    ];

    let mut occasions = BTreeMap::new();
    for (date, kind) in stages.into_iter().flatten() {
        occasions.insert(date, TorahReadingOccasion::new(kind));
    }
    debug!(occasions = occasions.len(), "built occasion table");

    Ok(OccasionTable {
        year,
        region,
        occasions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaamod_calendar::month::CHESHVAN;

    fn heb(year: i32, month: u8, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    #[test]
    fn diaspora_second_days() {
        let days = festival_days(5780, Region::diaspora()).unwrap();
        assert!(days.contains(&(heb(5780, TISHREI, 16), OccasionKind::Sukkot)));
        assert!(days.contains(&(heb(5780, TISHREI, 23), OccasionKind::SimchatTorah)));
        assert!(days.contains(&(heb(5780, NISAN, 22), OccasionKind::Pesach)));
        assert!(days.contains(&(heb(5780, SIVAN, 7), OccasionKind::Shavuot)));
    }

    #[test]
    fn israel_has_no_second_days() {
        let days = festival_days(5780, Region::israel()).unwrap();
        assert!(days.contains(&(heb(5780, TISHREI, 16), OccasionKind::CholHamoedSukkot)));
        assert!(!days.iter().any(|(d, _)| *d == heb(5780, TISHREI, 23)));
        assert!(!days.iter().any(|(d, _)| *d == heb(5780, NISAN, 22)));
        assert!(!days.iter().any(|(d, _)| *d == heb(5780, SIVAN, 7)));
    }

    #[test]
    fn chanukah_crosses_into_tevet() {
        let days = festival_days(5780, Region::israel()).unwrap();
        let chanukah: Vec<_> = days
            .iter()
            .filter(|(_, k)| *k == OccasionKind::Chanukah)
            .map(|(d, _)| *d)
            .collect();
        assert_eq!(chanukah.len(), 8);
        assert_eq!(chanukah[0], heb(5780, KISLEV, 25));
        // Kislev 5780 has 30 days.
        assert_eq!(chanukah[7], heb(5780, TEVET, 2));
    }

    #[test]
    fn purim_in_adar_ii_of_leap_year() {
        let days = festival_days(5779, Region::diaspora()).unwrap();
        assert!(days.contains(&(heb(5779, ADAR_II, 14), OccasionKind::Purim)));
    }

    #[test]
    fn shushan_purim_on_sabbath_is_dropped() {
        // 15 Adar 5781 was a Sabbath.
        assert!(heb(5781, ADAR, 15).is_sabbath());
        let days = festival_days(5781, Region::jerusalem()).unwrap();
        assert!(!days.iter().any(|(_, k)| *k == OccasionKind::ShushanPurim));
        let days = festival_days(5781, Region::israel()).unwrap();
        assert!(days.contains(&(heb(5781, ADAR, 14), OccasionKind::Purim)));
    }

    #[test]
    fn rosh_chodesh_skips_tishrei() {
        let days = rosh_chodesh_days(5780).unwrap();
        assert!(!days.iter().any(|(d, _)| *d == heb(5780, TISHREI, 1)));
        assert!(!days.iter().any(|(d, _)| *d == heb(5780, TISHREI, 30)));
        assert!(days.iter().any(|(d, _)| *d == heb(5780, NISAN, 1)));
        // Cheshvan 5780 has 30 days.
        assert!(days.iter().any(|(d, _)| *d == heb(5780, CHESHVAN, 30)));
    }

    #[test]
    fn sabbaths_stay_in_year() {
        let days = sabbaths_of_year(5780).unwrap();
        assert!(days.iter().all(|(d, k)| d.is_sabbath()
            && d.year() == 5780
            && *k == OccasionKind::Shabbat));
        assert_eq!(days[0].0, heb(5780, TISHREI, 6));
    }

    #[test]
    fn fast_on_sabbath_moves_to_sunday() {
        // 17 Tammuz 5779 and 9 Av 5779 were Sabbaths.
        let days = fast_days(5779).unwrap();
        assert!(days.contains(&(heb(5779, TAMMUZ, 18), OccasionKind::SeventeenthOfTamuz)));
        assert!(days.contains(&(heb(5779, AV, 10), OccasionKind::NinthOfAv)));
        assert!(days.iter().all(|(d, _)| !d.is_sabbath()));
    }

    #[test]
    fn jerusalem_requires_israel() {
        assert_eq!(
            make_torah_reading_occasions_table(5780, false, true).unwrap_err(),
            TorahError::JerusalemOutsideIsrael
        );
    }

    #[test]
    fn sabbath_overrides_festival() {
        // Rosh Hashana 5781 began on a Sabbath.
        let table = make_torah_reading_occasions_table(5781, true, false).unwrap();
        let rosh_hashana = table.get(heb(5781, TISHREI, 1)).unwrap();
        assert_eq!(rosh_hashana.kind(), OccasionKind::Shabbat);
        assert_eq!(table.count_of(OccasionKind::RoshHashana), 1);
    }
}
