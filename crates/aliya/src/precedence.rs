//! Aliya eligibility and precedence.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use yaamod_calendar::{HebrewDate, next_anniversary_of};
use yaamod_torah::{next_reading_of_parasha, portions_on};

use crate::config::PrecedenceConfig;
use crate::congregation::Congregation;
use crate::error::AliyaError;
use crate::person::{Person, PersonId};

/// Why a member is owed an aliya, in order of precedence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AliyaPrecedenceReason {
    /// A yahrzeit of an immediate family member.
    Yahrzeit,
    /// The portion read at the member's bar mitzvah.
    BarMitzvahParasha,
    /// No aliya for longer than the configured gap.
    TimeSinceLastAliya,
}

impl AliyaPrecedenceReason {
    /// Rank of the tier; lower ranks take precedence.
    pub fn rank(self) -> u8 {
        match self {
            Self::Yahrzeit => 1,
            Self::BarMitzvahParasha => 2,
            Self::TimeSinceLastAliya => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Yahrzeit => "YAHRZEIT",
            Self::BarMitzvahParasha => "BAR_MITZVAH_PARASHA",
            Self::TimeSinceLastAliya => "TIME_SINCE_LAST_ALIYA",
        }
    }
}

impl fmt::Display for AliyaPrecedenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True if `anniversary` is `on_date` itself, or `on_date` is the Sabbath
/// of the week leading up to it.
fn is_on_or_sabbath_before(anniversary: HebrewDate, on_date: HebrewDate) -> bool {
    if anniversary == on_date {
        return true;
    }
    on_date.is_sabbath() && anniversary > on_date && anniversary - on_date <= 6
}

/// The Sabbath on which a yahrzeit on `yahrzeit` is marked: the day itself
/// if it is a Sabbath, otherwise the Sabbath before.
fn yahrzeit_sabbath(yahrzeit: HebrewDate) -> HebrewDate {
    if yahrzeit.is_sabbath() {
        yahrzeit
    } else {
        yahrzeit.sabbath_on_or_after() - 7
    }
}

/// Answers eligibility and precedence questions about a congregation.
///
/// `today` anchors the bar-mitzvah check; the queried date is passed to
/// each call separately.
#[derive(Debug, Clone)]
pub struct PrecedenceEngine<'a> {
    congregation: &'a Congregation,
    config: PrecedenceConfig,
    today: HebrewDate,
}

impl<'a> PrecedenceEngine<'a> {
    pub fn new(congregation: &'a Congregation, config: PrecedenceConfig, today: HebrewDate) -> Self {
        Self {
            congregation,
            config,
            today,
        }
    }

    pub fn congregation(&self) -> &'a Congregation {
        self.congregation
    }

    pub fn config(&self) -> &PrecedenceConfig {
        &self.config
    }

    pub fn today(&self) -> HebrewDate {
        self.today
    }

    pub fn is_bar_mitzvah(&self, id: PersonId) -> Result<bool, AliyaError> {
        Ok(self.congregation.get(id)?.is_bar_mitzvah(self.today))
    }

    /// Bar mitzvah, alive, and not flagged as unable to receive an aliya.
    pub fn can_get_aliya(&self, id: PersonId) -> Result<bool, AliyaError> {
        Ok(self.congregation.get(id)?.can_get_aliya(self.today))
    }

    /// Deceased immediate family members of `id` with a usable death date
    /// before `on_date`.
    fn deceased_relatives(
        &self,
        id: PersonId,
        on_date: HebrewDate,
    ) -> Result<Vec<HebrewDate>, AliyaError> {
        let mut deaths = Vec::new();
        for relative in self.congregation.immediate_family(id)? {
            let relative = self.congregation.get(relative)?;
            deaths.extend(relative.hebrew_date_of_death().filter(|&death| death < on_date));
        }
        Ok(deaths)
    }

    /// True if a yahrzeit of an immediate family member is on `on_date`, or
    /// `on_date` is the Sabbath of the week before one.
    pub fn needs_yahrzeit_aliya(
        &self,
        id: PersonId,
        on_date: HebrewDate,
    ) -> Result<bool, AliyaError> {
        for death in self.deceased_relatives(id, on_date)? {
            let yahrzeit = next_anniversary_of(death, on_date)?;
            if is_on_or_sabbath_before(yahrzeit, on_date) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True if the member's Hebrew birthday is on `on_date`, or `on_date`
    /// is the Sabbath of the week before it.
    pub fn needs_birthday_aliya(
        &self,
        id: PersonId,
        on_date: HebrewDate,
    ) -> Result<bool, AliyaError> {
        let person = self.congregation.get(id)?;
        let Some(birth) = person.hebrew_date_of_birth() else {
            return Ok(false);
        };
        if birth >= on_date {
            return Ok(false);
        }
        let birthday = next_anniversary_of(birth, on_date)?;
        Ok(is_on_or_sabbath_before(birthday, on_date))
    }

    /// True if `on_date` is a Sabbath on which the member's bar-mitzvah
    /// portion is read.
    pub fn is_bar_mitzvah_parasha_shabbat(
        &self,
        id: PersonId,
        on_date: HebrewDate,
    ) -> Result<bool, AliyaError> {
        let person = self.congregation.get(id)?;
        let Some(number) = person.bar_mitzvah_parasha() else {
            return Ok(false);
        };
        if !on_date.is_sabbath() {
            return Ok(false);
        }
        let portions = portions_on(on_date, self.config.region().in_israel())?;
        Ok(portions.is_some_and(|p| p.contains(number)))
    }

    /// The next Sabbath on or after `reference` on which the member's
    /// bar-mitzvah portion is read; `None` if no portion is recorded.
    pub fn next_bar_mitzvah_parasha_shabbat(
        &self,
        id: PersonId,
        reference: HebrewDate,
    ) -> Result<Option<HebrewDate>, AliyaError> {
        let person = self.congregation.get(id)?;
        let Some(number) = person.bar_mitzvah_parasha() else {
            return Ok(None);
        };
        let date = next_reading_of_parasha(number, reference, self.config.region().in_israel())?;
        Ok(Some(date))
    }

    fn is_due_by_time(&self, person: &Person, on_date: HebrewDate) -> bool {
        match person.last_aliya_date() {
            None => true,
            Some(last) => {
                (on_date.to_gregorian() - last).num_days() > self.config.last_aliya_gap_days()
            }
        }
    }

    /// Classifies the member's claim to an aliya on `on_date`.
    ///
    /// Returns `Ok(None)` for an eligible member with no special reason.
    ///
    /// # Errors
    ///
    /// Returns [`AliyaError::Ineligible`] if the member cannot receive an
    /// aliya at all.
    #[tracing::instrument(skip(self, on_date), fields(on_date = %on_date))]
    pub fn get_aliya_precedence(
        &self,
        id: PersonId,
        on_date: HebrewDate,
    ) -> Result<Option<AliyaPrecedenceReason>, AliyaError> {
        let person = self.congregation.get(id)?;
        if !person.can_get_aliya(self.today) {
            return Err(AliyaError::Ineligible { person: id });
        }

        let reason = if self.needs_yahrzeit_aliya(id, on_date)? {
            Some(AliyaPrecedenceReason::Yahrzeit)
        } else if self.is_bar_mitzvah_parasha_shabbat(id, on_date)? {
            Some(AliyaPrecedenceReason::BarMitzvahParasha)
        } else if self.is_due_by_time(person, on_date) {
            Some(AliyaPrecedenceReason::TimeSinceLastAliya)
        } else {
            None
        };
        debug!(reason = ?reason, "precedence decided");
        Ok(reason)
    }

    /// Upcoming Sabbaths on which the member should be called up for a
    /// yahrzeit, from `reference` on, sorted and without repeats.
    ///
    /// Each deceased relative contributes one date. When the Sabbath before
    /// this cycle's yahrzeit has already passed, the next year's is used.
    pub fn next_yahrzeit_shabbatot(
        &self,
        id: PersonId,
        reference: HebrewDate,
    ) -> Result<Vec<HebrewDate>, AliyaError> {
        let mut shabbatot = BTreeSet::new();
        for death in self.deceased_relatives(id, reference)? {
            let yahrzeit = next_anniversary_of(death, reference)?;
            let sabbath = yahrzeit_sabbath(yahrzeit);
            if sabbath >= reference {
                shabbatot.insert(sabbath);
            } else {
                let next = next_anniversary_of(death, yahrzeit + 1)?;
                shabbatot.insert(yahrzeit_sabbath(next));
            }
        }
        Ok(shabbatot.into_iter().collect())
    }
}
