//! Error types for the yaamod-aliya crate.

use chrono::NaiveDate;
use yaamod_calendar::CalendarError;
use yaamod_torah::TorahError;

use crate::person::PersonId;

/// Error type for congregation and precedence queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AliyaError {
    /// Returned when precedence is asked for someone who cannot receive an
    /// aliya at all (not bar mitzvah, deceased, or flagged).
    #[error("person {person} is not eligible for an aliya")]
    Ineligible {
        /// The person that was queried.
        person: PersonId,
    },

    /// Returned when an id is not in the congregation.
    #[error("unknown person: {person}")]
    UnknownPerson {
        /// The id that was looked up.
        person: PersonId,
    },

    /// Returned when two records share one id.
    #[error("duplicate person id: {person}")]
    DuplicatePerson {
        /// The repeated id.
        person: PersonId,
    },

    /// Returned at congregation construction when a relationship points at
    /// a person that is not in the roster.
    #[error("person {person} has {relation} {target}, who is not in the congregation")]
    DanglingReference {
        /// The person holding the reference.
        person: PersonId,
        /// Which relationship: "father", "mother" or "spouse".
        relation: &'static str,
        /// The missing id.
        target: PersonId,
    },

    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },

    /// Wraps an error originating from the yaamod-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Wraps an error originating from the yaamod-torah crate.
    #[error("torah reading error: {reason}")]
    Torah {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<CalendarError> for AliyaError {
    fn from(e: CalendarError) -> Self {
        AliyaError::Calendar {
            reason: e.to_string(),
        }
    }
}

impl From<TorahError> for AliyaError {
    fn from(e: TorahError) -> Self {
        AliyaError::Torah {
            reason: e.to_string(),
        }
    }
}

/// Error type for the scheduled-aliya ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// Returned when a required field of a new row is unset.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the unset field.
        field: &'static str,
    },

    /// Returned when the aliya number is 0; aliyot are numbered from 1.
    #[error("invalid aliya number: {aliya_number} (must be at least 1)")]
    InvalidAliyaNumber {
        /// The rejected number.
        aliya_number: u8,
    },

    /// Returned when the slot already has an oleh.
    #[error("aliya {aliya_number} on {date} ({service}) is already assigned", service = service_name(.mincha))]
    SlotTaken {
        /// Gregorian date of the slot.
        date: NaiveDate,
        /// True for the afternoon reading.
        mincha: bool,
        /// Aliya number within the reading.
        aliya_number: u8,
    },
}

fn service_name(mincha: &bool) -> &'static str {
    if *mincha { "mincha" } else { "shacharit" }
}
