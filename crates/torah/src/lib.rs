//! Torah-reading calendar for one Hebrew year.
//!
//! This crate answers two questions about a year: on which days is the
//! Torah read and with how many aliyot, and which weekly portion is read on
//! each Sabbath. Both depend on whether the synagogue is in Israel, and
//! Purim additionally on Jerusalem.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!  │  festivals    │──▶│ Rosh Chodesh │──▶│   Sabbaths   │──▶│    fasts     │
//!  └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!                        later stages override earlier ones
//!                                     │
//!                                     ▼
//!                        OccasionTable ──▶ OccasionCache
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use yaamod_calendar::HebrewDate;
//! use yaamod_torah::{OccasionCache, next_reading_of_parasha, portions_on};
//!
//! let cache = OccasionCache::new();
//! let table = cache.get_or_build(5780, true, false).unwrap();
//! let shabbat = HebrewDate::new(5780, 7, 6).unwrap();
//! assert_eq!(table.get(shabbat).unwrap().shacharit_aliyot(), 7);
//!
//! let portions = portions_on(shabbat, true).unwrap().unwrap();
//! assert_eq!(portions.to_string(), "Vayelech");
//!
//! // Bereishit is read on the Sabbath after Simchat Torah.
//! let bereishit = next_reading_of_parasha(0, shabbat, true).unwrap();
//! assert_eq!(bereishit, HebrewDate::new(5780, 7, 27).unwrap());
//! ```

pub mod cache;
pub mod error;
pub mod occasion;
pub mod parasha;
pub mod region;
pub mod table;

pub use cache::OccasionCache;
pub use error::TorahError;
pub use occasion::{OccasionKind, TorahReadingOccasion};
pub use parasha::{
    PARSHIYOT, ParashaTable, Portions, next_reading_of_parasha, parasha_name, parasha_table,
    portions_on,
};
pub use region::Region;
pub use table::{
    DatedOccasion, OccasionTable, fast_days, festival_days, make_torah_reading_occasions_table,
    rosh_chodesh_days, sabbaths_of_year,
};
