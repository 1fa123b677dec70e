//! Yahrzeits command: list the Sabbaths a member is owed a memorial aliya.

use anyhow::Result;
use tracing::{info, info_span};

use yaamod_aliya::{PersonId, PrecedenceEngine};
use yaamod_calendar::HebrewDate;

use crate::cli::YahrzeitsArgs;
use crate::config::YaamodConfig;
use crate::convert;
use crate::roster::load_roster;

pub fn run(args: YahrzeitsArgs) -> Result<()> {
    let _cmd = info_span!("yahrzeits", person = args.person).entered();
    let config = YaamodConfig::load(&args.config)?;
    let precedence = convert::build_precedence_config(&config)?;
    let congregation = load_roster(&config.roster.path)?;

    let id = PersonId::new(args.person);
    let person = congregation.get(id)?;
    let reference = args
        .date
        .map_or_else(convert::today_hebrew, HebrewDate::from_gregorian);

    let engine = PrecedenceEngine::new(&congregation, precedence, convert::today_hebrew());
    let shabbatot = engine.next_yahrzeit_shabbatot(id, reference)?;
    info!(count = shabbatot.len(), "yahrzeit sabbaths found");

    println!("{} from {reference}", person.full_name());
    for sabbath in shabbatot {
        println!("  {}  {sabbath}", sabbath.to_gregorian());
    }
    Ok(())
}
