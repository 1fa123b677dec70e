//! Error types for the yaamod-torah crate.

use yaamod_calendar::CalendarError;

/// Error type for all fallible operations in the yaamod-torah crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TorahError {
    /// Returned when a parasha index is outside the 54 weekly portions.
    #[error("unknown parasha index: {number} (must be 0..=53)")]
    UnknownParasha {
        /// The invalid index.
        number: u8,
    },

    /// Returned when a parasha is never read on a Sabbath within the
    /// searched years (Vezot Haberachah is read on Simchat Torah).
    #[error("parasha {name} is not read on a Sabbath")]
    ParashaNotRead {
        /// Name of the parasha.
        name: &'static str,
    },

    /// Returned when a region claims Jerusalem but not the land of Israel.
    #[error("a Jerusalem region must also be in Israel")]
    JerusalemOutsideIsrael,

    /// Wraps an error originating from the yaamod-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<CalendarError> for TorahError {
    fn from(e: CalendarError) -> Self {
        TorahError::Calendar {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_parasha() {
        let e = TorahError::UnknownParasha { number: 60 };
        assert_eq!(e.to_string(), "unknown parasha index: 60 (must be 0..=53)");
    }

    #[test]
    fn error_parasha_not_read() {
        let e = TorahError::ParashaNotRead {
            name: "Vezot Haberachah",
        };
        assert_eq!(
            e.to_string(),
            "parasha Vezot Haberachah is not read on a Sabbath"
        );
    }

    #[test]
    fn error_from_calendar() {
        let e: TorahError = CalendarError::InvalidYear { year: 0 }.into();
        assert_eq!(
            e.to_string(),
            "calendar error: invalid year: 0 (must be 1..=9999)"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<TorahError>();
    }
}
