//! Plan command: fill every aliya of a reading from the ranked roster.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, bail};
use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use yaamod_aliya::{
    AliyaLedger, AliyaPrecedenceReason, NewScheduledAliya, Person, PersonId, PrecedenceEngine,
    StatusFilter, Suggestion,
};
use yaamod_calendar::HebrewDate;
use yaamod_torah::OccasionCache;

use crate::cli::PlanArgs;
use crate::config::YaamodConfig;
use crate::convert;
use crate::roster::load_roster;

/// Ranked candidates split the way the aliyot are handed out.
struct Candidates {
    cohanim: Vec<Suggestion>,
    leviim: Vec<Suggestion>,
    israelim: Vec<Suggestion>,
}

impl Candidates {
    /// The list consulted first for `aliya_number`: a Cohen reads first and
    /// a Levi second.
    fn preferred(&self, aliya_number: u8) -> &[Suggestion] {
        match aliya_number {
            1 => &self.cohanim,
            2 => &self.leviim,
            _ => &self.israelim,
        }
    }

    fn reasons(&self) -> BTreeMap<PersonId, Option<AliyaPrecedenceReason>> {
        self.cohanim
            .iter()
            .chain(&self.leviim)
            .chain(&self.israelim)
            .map(|s| (s.person, s.reason))
            .collect()
    }
}

fn first_uncalled(list: &[Suggestion], called: &BTreeSet<PersonId>) -> Option<PersonId> {
    list.iter()
        .map(|s| s.person)
        .find(|person| !called.contains(person))
}

/// Service roles the member can also take, for picking a reader.
fn role_tags(person: &Person) -> String {
    let roles: Vec<&str> = [
        (person.can_be_hazan(), "hazan"),
        (person.can_read_torah(), "torah"),
        (person.can_read_haftarah(), "haftarah"),
    ]
    .into_iter()
    .filter_map(|(able, tag)| able.then_some(tag))
    .collect();
    roles.join(",")
}

/// Records one oleh per slot into `ledger`, nobody twice on the same day.
///
/// A slot whose status group is exhausted falls back to the Israelim; a slot
/// nobody is left for stays empty.
fn assign_slots(
    ledger: &AliyaLedger,
    date: NaiveDate,
    services: [(bool, u8); 2],
    candidates: &Candidates,
) -> Result<()> {
    let mut called = BTreeSet::new();
    for (mincha, count) in services {
        for aliya_number in 1..=count {
            let pick = first_uncalled(candidates.preferred(aliya_number), &called)
                .or_else(|| first_uncalled(&candidates.israelim, &called));
            let Some(oleh) = pick else {
                warn!(aliya_number, mincha, "no candidate left for slot");
                continue;
            };
            called.insert(oleh);
            ledger.create(NewScheduledAliya::new(date, aliya_number, oleh).with_mincha(mincha))?;
        }
    }
    Ok(())
}

pub fn run(args: PlanArgs) -> Result<()> {
    let _cmd = info_span!("plan", date = %args.date).entered();
    let config = YaamodConfig::load(&args.config)?;
    let precedence = convert::build_precedence_config(&config)?;
    let region = precedence.region();
    let congregation = load_roster(&config.roster.path)?;

    let on_date = HebrewDate::from_gregorian(args.date);
    let cache = OccasionCache::new();
    let table = cache.get_or_build(on_date.year(), region.in_israel(), region.in_jerusalem())?;
    let Some(occasion) = table.get(on_date) else {
        bail!("no Torah reading on {} ({on_date})", args.date);
    };
    info!(occasion = occasion.description(), "planning aliyot");

    let engine = PrecedenceEngine::new(&congregation, precedence, convert::today_hebrew());
    let candidates = Candidates {
        cohanim: engine.suggest_for_status(StatusFilter::cohanim(), on_date)?,
        leviim: engine.suggest_for_status(StatusFilter::leviim(), on_date)?,
        israelim: engine.suggest_for_status(StatusFilter::israelim(), on_date)?,
    };

    let ledger = AliyaLedger::new();
    let services = [
        (false, occasion.shacharit_aliyot()),
        (true, occasion.mincha_aliyot()),
    ];
    assign_slots(&ledger, args.date, services, &candidates)?;

    let reasons = candidates.reasons();
    println!("{} ({on_date}): {}", args.date, occasion.description());
    for row in ledger.for_date(args.date) {
        let person = congregation.get(row.oleh())?;
        let reason = reasons
            .get(&row.oleh())
            .copied()
            .flatten()
            .map_or("", AliyaPrecedenceReason::name);
        println!(
            "  {:<9} {}  {:<24} {reason:<22} {}",
            if row.mincha() { "mincha" } else { "shacharit" },
            row.aliya_number(),
            person.full_name(),
            role_tags(person),
        );
    }
    Ok(())
}
