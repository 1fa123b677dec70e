//! Pure conversion functions: TOML config structs and CLI values -> crate API types.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::cli::StatusArg;
use crate::config::*;

use yaamod_aliya::{HereditaryStatus, PrecedenceConfig, StatusFilter};
use yaamod_calendar::HebrewDate;
use yaamod_torah::Region;

/// Builds the reading region from the `[synagogue]` section.
pub fn build_region(cfg: &SynagogueToml) -> Result<Region> {
    Region::new(cfg.in_israel, cfg.in_jerusalem)
        .with_context(|| format!("invalid [synagogue] location for {:?}", cfg.name))
}

/// Builds a [`PrecedenceConfig`] from the whole TOML config.
pub fn build_precedence_config(cfg: &YaamodConfig) -> Result<PrecedenceConfig> {
    let config = PrecedenceConfig::new()
        .with_last_aliya_gap_days(cfg.precedence.last_aliya_gap_days)
        .with_region(build_region(&cfg.synagogue)?);
    config.validate().context("invalid [precedence] section")?;
    Ok(config)
}

/// Maps the optional `--status` flag onto a roster filter.
pub fn status_filter(status: Option<StatusArg>) -> StatusFilter {
    match status {
        None => StatusFilter::Any,
        Some(StatusArg::Cohen) => StatusFilter::Only(HereditaryStatus::Cohen),
        Some(StatusArg::Levi) => StatusFilter::Only(HereditaryStatus::Levi),
        Some(StatusArg::Israel) => StatusFilter::Only(HereditaryStatus::Israel),
    }
}

/// Today's Hebrew date according to the local clock.
pub fn today_hebrew() -> HebrewDate {
    HebrewDate::from_gregorian(local_today())
}

/// Today's Gregorian date according to the local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
