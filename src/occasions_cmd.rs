//! Occasions command: print a year's Torah-reading table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use yaamod_torah::OccasionCache;

use crate::cli::OccasionsArgs;
use crate::config::YaamodConfig;
use crate::convert;

pub fn run(args: OccasionsArgs) -> Result<()> {
    let _cmd = info_span!("occasions", year = args.year).entered();
    let config = YaamodConfig::load(&args.config)?;
    let region = convert::build_region(&config.synagogue)?;

    let cache = OccasionCache::new();
    let table = cache
        .get_or_build(args.year, region.in_israel(), region.in_jerusalem())
        .with_context(|| format!("failed to build occasions for {}", args.year))?;
    info!(occasions = table.len(), "occasions table built");

    println!("# {} {}", config.synagogue.name, args.year);
    for (date, occasion) in table.iter() {
        println!(
            "{}  {:<22} {:<20} shacharit {}  mincha {}{}",
            date.to_gregorian(),
            date.to_string(),
            occasion.description(),
            occasion.shacharit_aliyot(),
            occasion.mincha_aliyot(),
            if occasion.has_maftir() { "  maftir" } else { "" },
        );
    }
    Ok(())
}
