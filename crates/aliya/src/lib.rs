//! # yaamod-aliya
//!
//! Who should be called up to the Torah, and which reading slots are taken.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Person records"] -->|"Congregation::new()"| B["Congregation"]
//!     B --> C["PrecedenceEngine"]
//!     D["PrecedenceConfig"] --> C
//!     C -->|"get_aliya_precedence()"| E["AliyaPrecedenceReason"]
//!     C -->|"get_suggested_olim()"| F["Vec&lt;Suggestion&gt;"]
//!     G["NewScheduledAliya"] -->|"AliyaLedger::create()"| H["ScheduledAliya"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use yaamod_aliya::{
//!     AliyaLedger, Congregation, Gender, NewScheduledAliya, Person, PersonId, PrecedenceConfig,
//!     PrecedenceEngine, StatusFilter,
//! };
//! use yaamod_calendar::HebrewDate;
//!
//! let congregation = Congregation::new([
//!     Person::new(PersonId::new(1), "Yosef", Gender::Male)
//!         .with_date_of_birth(NaiveDate::from_ymd_opt(1980, 5, 1).unwrap(), false),
//! ])
//! .unwrap();
//!
//! let shabbat = HebrewDate::new(5780, 9, 2).unwrap();
//! let engine = PrecedenceEngine::new(&congregation, PrecedenceConfig::new(), shabbat);
//! let ranked = engine.suggest_for_status(StatusFilter::any(), shabbat).unwrap();
//! assert_eq!(ranked[0].person, PersonId::new(1));
//!
//! let ledger = AliyaLedger::new();
//! let request = NewScheduledAliya::new(shabbat.to_gregorian(), 1, ranked[0].person);
//! ledger.create(request).unwrap();
//! assert!(ledger.create(request).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `person` | Person records, ids, hereditary status |
//! | `congregation` | Arena of persons with family lookups |
//! | `config` | `PrecedenceConfig` |
//! | `precedence` | Eligibility, yahrzeit and bar-mitzvah rules, precedence tiers |
//! | `ranking` | Ranked suggestions and status filters |
//! | `ledger` | Scheduled-aliya slots with unique assignment |
//! | `error` | Error types |

mod config;
mod congregation;
mod error;
mod ledger;
mod person;
mod precedence;
mod ranking;

pub use config::PrecedenceConfig;
pub use congregation::Congregation;
pub use error::{AliyaError, LedgerError};
pub use ledger::{AliyaLedger, NewScheduledAliya, ScheduledAliya};
pub use person::{Gender, HereditaryStatus, Person, PersonId};
pub use precedence::{AliyaPrecedenceReason, PrecedenceEngine};
pub use ranking::{StatusFilter, Suggestion};
