//! Parasha command: print which portion each Sabbath of a year reads.

use anyhow::Result;
use tracing::{info, info_span};

use yaamod_torah::parasha_table;

use crate::cli::ParashaArgs;
use crate::config::YaamodConfig;
use crate::convert;

pub fn run(args: ParashaArgs) -> Result<()> {
    let _cmd = info_span!("parasha", year = args.year).entered();
    let config = YaamodConfig::load(&args.config)?;
    let region = convert::build_region(&config.synagogue)?;

    let table = parasha_table(args.year, region.in_israel())?;
    let doubled = table
        .iter()
        .filter(|(_, portions)| portions.is_some_and(|p| p.is_double()))
        .count();
    info!(sabbaths = table.len(), doubled, "parasha table built");

    for (sabbath, portions) in table.iter() {
        let reading = match portions {
            Some(portions) => portions.to_string(),
            None => "(festival)".to_string(),
        };
        println!("{}  {:<22} {reading}", sabbath.to_gregorian(), sabbath.to_string());
    }
    Ok(())
}
