//! Suggest command: rank the roster for a reading date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use yaamod_aliya::PrecedenceEngine;
use yaamod_calendar::HebrewDate;

use crate::cli::SuggestArgs;
use crate::config::YaamodConfig;
use crate::convert;
use crate::roster::load_roster;

pub fn run(args: SuggestArgs) -> Result<()> {
    let _cmd = info_span!("suggest", date = %args.date).entered();
    let config = YaamodConfig::load(&args.config)?;
    let precedence = convert::build_precedence_config(&config)?;
    let congregation = load_roster(&config.roster.path)?;

    let engine = PrecedenceEngine::new(&congregation, precedence, convert::today_hebrew());
    let on_date = HebrewDate::from_gregorian(args.date);
    let ranked = engine.suggest_for_status(convert::status_filter(args.status), on_date)?;
    info!(
        candidates = ranked.len(),
        with_reason = ranked.iter().filter(|s| s.reason.is_some()).count(),
        "suggestions ranked"
    );

    let json = serde_json::to_string_pretty(&ranked).context("failed to encode suggestions")?;
    println!("{json}");
    Ok(())
}
