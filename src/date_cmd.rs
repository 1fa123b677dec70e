//! Hebrew-date command: convert a civil date and show the coming Sabbath.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use yaamod_calendar::to_hebrew_date;
use yaamod_torah::portions_on;

use crate::cli::HebrewDateArgs;

pub fn run(args: HebrewDateArgs) -> Result<()> {
    let _cmd = info_span!("hebrew_date").entered();
    let hebrew = to_hebrew_date(Some(args.date), args.after_sunset)
        .context("date has no Hebrew equivalent")?;
    debug!(%hebrew, weekday = hebrew.weekday(), "converted");

    let sabbath = hebrew.sabbath_on_or_after();
    println!("{hebrew} ({})", hebrew.to_gregorian().format("%A"));
    println!("Sabbath: {sabbath} ({})", sabbath.to_gregorian());
    for (label, israel) in [("diaspora", false), ("israel", true)] {
        let reading = match portions_on(sabbath, israel)? {
            Some(portions) => portions.to_string(),
            None => "festival reading".to_string(),
        };
        println!("  {label:<8} {reading}");
    }
    Ok(())
}
