//! # yaamod-calendar
//!
//! Hebrew calendar arithmetic for the aliya engine.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"to_hebrew_date()"| B["HebrewDate"]
//!     B -->|".to_gregorian()"| A
//!     B -->|"+ / - days"| B
//!     B -->|".sabbath_on_or_after()"| B
//!     B -->|"nth_anniversary_of()"| C["anniversary"]
//!     B -->|"next_anniversary_of()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use yaamod_calendar::{HebrewDate, nth_anniversary_of, to_hebrew_date};
//!
//! // Born after sunset on 28 November 1989: 1 Kislev 5750.
//! let birth = to_hebrew_date(NaiveDate::from_ymd_opt(1989, 11, 28), true).unwrap();
//! assert_eq!(birth, HebrewDate::new(5750, 9, 1).unwrap());
//!
//! let bar_mitzvah = nth_anniversary_of(birth, 13).unwrap();
//! assert_eq!(bar_mitzvah, HebrewDate::new(5763, 9, 1).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `molad` | Rosh Hashana day numbers and year lengths |
//! | `month` | Month numbering, names and lengths |
//! | `date` | `HebrewDate` with ordering and day arithmetic |
//! | `convert` | Gregorian conversion with the sunset rule |
//! | `anniversary` | nth / next anniversary under leap-year rules |
//! | `error` | Error types |

mod anniversary;
mod convert;
mod date;
mod error;
mod molad;
pub mod month;

pub use anniversary::{next_anniversary_of, nth_anniversary_of};
pub use convert::to_hebrew_date;
pub use date::{HebrewDate, SABBATH};
pub use error::CalendarError;
pub use month::{days_in_year, is_leap_year, month_length, month_name, months_in_year};
