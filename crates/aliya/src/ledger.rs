//! Ledger of assigned aliyot.
//!
//! A slot is identified by `(date, mincha, aliya_number)` and holds at most
//! one oleh. Assignment is a single insert-if-absent on the slot's map
//! entry, so concurrent callers racing for one slot see exactly one
//! success.

use chrono::NaiveDate;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use yaamod_calendar::HebrewDate;

use crate::error::LedgerError;
use crate::person::PersonId;

type SlotKey = (NaiveDate, bool, u8);

/// An oleh assigned to one reading slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledAliya {
    date: NaiveDate,
    mincha: bool,
    aliya_number: u8,
    oleh: PersonId,
}

impl ScheduledAliya {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// True for the afternoon reading.
    pub fn mincha(&self) -> bool {
        self.mincha
    }

    pub fn aliya_number(&self) -> u8 {
        self.aliya_number
    }

    pub fn oleh(&self) -> PersonId {
        self.oleh
    }

    /// Hebrew date of the reading (a daytime reading, so no sunset shift).
    pub fn hebrew_date(&self) -> HebrewDate {
        HebrewDate::from_gregorian(self.date)
    }

    fn key(&self) -> SlotKey {
        (self.date, self.mincha, self.aliya_number)
    }
}

/// Unvalidated request to fill a slot.
///
/// Every field but `mincha` is required; `mincha` defaults to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct NewScheduledAliya {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub mincha: bool,
    #[serde(default)]
    pub aliya_number: Option<u8>,
    #[serde(default)]
    pub oleh: Option<PersonId>,
}

impl NewScheduledAliya {
    /// A complete shacharit request.
    pub fn new(date: NaiveDate, aliya_number: u8, oleh: PersonId) -> Self {
        Self {
            date: Some(date),
            mincha: false,
            aliya_number: Some(aliya_number),
            oleh: Some(oleh),
        }
    }

    pub fn with_mincha(mut self, mincha: bool) -> Self {
        self.mincha = mincha;
        self
    }

    fn validate(self) -> Result<ScheduledAliya, LedgerError> {
        let date = self.date.ok_or(LedgerError::MissingField { field: "date" })?;
        let aliya_number = self
            .aliya_number
            .ok_or(LedgerError::MissingField { field: "aliya_number" })?;
        let oleh = self.oleh.ok_or(LedgerError::MissingField { field: "oleh" })?;
        if aliya_number == 0 {
            return Err(LedgerError::InvalidAliyaNumber { aliya_number });
        }
        Ok(ScheduledAliya {
            date,
            mincha: self.mincha,
            aliya_number,
            oleh,
        })
    }
}

/// In-memory, thread-safe ledger of scheduled aliyot.
#[derive(Debug, Default)]
pub struct AliyaLedger {
    slots: DashMap<SlotKey, ScheduledAliya>,
}

impl AliyaLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a slot.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MissingField`] or
    /// [`LedgerError::InvalidAliyaNumber`] for an incomplete request, and
    /// [`LedgerError::SlotTaken`] if the slot already has an oleh,
    /// whoever it is.
    pub fn create(&self, request: NewScheduledAliya) -> Result<ScheduledAliya, LedgerError> {
        let aliya = request.validate()?;
        match self.slots.entry(aliya.key()) {
            Entry::Occupied(taken) => {
                warn!(
                    date = %aliya.date,
                    mincha = aliya.mincha,
                    aliya_number = aliya.aliya_number,
                    holder = %taken.get().oleh,
                    "slot already assigned"
                );
                Err(LedgerError::SlotTaken {
                    date: aliya.date,
                    mincha: aliya.mincha,
                    aliya_number: aliya.aliya_number,
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(aliya);
                debug!(
                    date = %aliya.date,
                    mincha = aliya.mincha,
                    aliya_number = aliya.aliya_number,
                    oleh = %aliya.oleh,
                    "aliya scheduled"
                );
                Ok(aliya)
            }
        }
    }

    /// Frees a slot, returning the row that held it.
    pub fn cancel(&self, date: NaiveDate, mincha: bool, aliya_number: u8) -> Option<ScheduledAliya> {
        let removed = self.slots.remove(&(date, mincha, aliya_number)).map(|(_, row)| row);
        if let Some(row) = removed {
            debug!(date = %date, mincha, aliya_number, oleh = %row.oleh, "aliya cancelled");
        }
        removed
    }

    pub fn get(&self, date: NaiveDate, mincha: bool, aliya_number: u8) -> Option<ScheduledAliya> {
        self.slots
            .get(&(date, mincha, aliya_number))
            .map(|row| *row.value())
    }

    /// All rows of `date`, shacharit first, by aliya number.
    pub fn for_date(&self, date: NaiveDate) -> Vec<ScheduledAliya> {
        let mut rows: Vec<ScheduledAliya> = self
            .slots
            .iter()
            .filter(|row| row.key().0 == date)
            .map(|row| *row.value())
            .collect();
        rows.sort_by_key(ScheduledAliya::key);
        rows
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_fields_reported_in_order() {
        let ledger = AliyaLedger::new();
        assert_eq!(
            ledger.create(NewScheduledAliya::default()).unwrap_err(),
            LedgerError::MissingField { field: "date" }
        );
        let request = NewScheduledAliya {
            date: Some(ymd(2020, 7, 4)),
            aliya_number: Some(1),
            ..Default::default()
        };
        assert_eq!(
            ledger.create(request).unwrap_err(),
            LedgerError::MissingField { field: "oleh" }
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn aliya_number_zero_rejected() {
        let ledger = AliyaLedger::new();
        let request = NewScheduledAliya::new(ymd(2020, 7, 4), 0, PersonId::new(1));
        assert_eq!(
            ledger.create(request).unwrap_err(),
            LedgerError::InvalidAliyaNumber { aliya_number: 0 }
        );
    }

    #[test]
    fn hebrew_date_of_row() {
        let ledger = AliyaLedger::new();
        let row = ledger
            .create(NewScheduledAliya::new(ymd(2019, 9, 30), 1, PersonId::new(1)))
            .unwrap();
        assert_eq!(row.hebrew_date(), HebrewDate::new(5780, 7, 1).unwrap());
    }

    #[test]
    fn mincha_defaults_to_false_in_json() {
        let request: NewScheduledAliya =
            serde_json::from_str(r#"{"date":"2020-07-04","aliya_number":2,"oleh":5}"#).unwrap();
        assert!(!request.mincha);
        assert_eq!(request.oleh, Some(PersonId::new(5)));
    }
}
