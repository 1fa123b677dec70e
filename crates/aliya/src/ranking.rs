//! Ranked suggestions of who to call up.

use serde::Serialize;
use tracing::debug;
use yaamod_calendar::HebrewDate;

use crate::error::AliyaError;
use crate::person::{HereditaryStatus, Person, PersonId};
use crate::precedence::{AliyaPrecedenceReason, PrecedenceEngine};

/// Caller-side restriction of the candidate pool by hereditary status.
///
/// A Cohen is called first and a Levi second by custom; the caller asks for
/// each subgroup separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Only(HereditaryStatus),
}

impl StatusFilter {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn cohanim() -> Self {
        Self::Only(HereditaryStatus::Cohen)
    }

    pub fn leviim() -> Self {
        Self::Only(HereditaryStatus::Levi)
    }

    pub fn israelim() -> Self {
        Self::Only(HereditaryStatus::Israel)
    }

    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::Any => true,
            Self::Only(status) => person.hereditary_status() == *status,
        }
    }
}

/// One ranked candidate. Advisory only; nothing is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub person: PersonId,
    pub reason: Option<AliyaPrecedenceReason>,
}

impl PrecedenceEngine<'_> {
    /// Ranks the eligible members of `pool` for `on_date`.
    ///
    /// Members who cannot receive an aliya are skipped. The rest are ordered
    /// by precedence tier (no reason last), then by last aliya date (never
    /// called up first, then the longest wait), then by id.
    ///
    /// # Errors
    ///
    /// Returns [`AliyaError::UnknownPerson`] if `pool` names someone outside
    /// the congregation.
    #[tracing::instrument(skip(self, pool, on_date), fields(on_date = %on_date))]
    pub fn get_suggested_olim(
        &self,
        pool: impl IntoIterator<Item = PersonId>,
        on_date: HebrewDate,
    ) -> Result<Vec<Suggestion>, AliyaError> {
        let mut ranked = Vec::new();
        for id in pool {
            let person = self.congregation().get(id)?;
            if !person.can_get_aliya(self.today()) {
                continue;
            }
            let reason = self.get_aliya_precedence(id, on_date)?;
            ranked.push((person, reason));
        }

        ranked.sort_by_key(|(person, reason)| {
            (
                reason.map_or(u8::MAX, AliyaPrecedenceReason::rank),
                person.last_aliya_date(),
                person.id(),
            )
        });
        debug!(candidates = ranked.len(), "ranked olim");

        Ok(ranked
            .into_iter()
            .map(|(person, reason)| Suggestion {
                person: person.id(),
                reason,
            })
            .collect())
    }

    /// Ranks every member matching `filter`.
    pub fn suggest_for_status(
        &self,
        filter: StatusFilter,
        on_date: HebrewDate,
    ) -> Result<Vec<Suggestion>, AliyaError> {
        let pool: Vec<PersonId> = self
            .congregation()
            .iter()
            .filter(|person| filter.matches(person))
            .map(Person::id)
            .collect();
        self.get_suggested_olim(pool, on_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrecedenceConfig;
    use crate::congregation::Congregation;
    use crate::person::Gender;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn member(id: u32, status: HereditaryStatus) -> Person {
        Person::new(PersonId::new(id), format!("member {id}"), Gender::Male)
            .with_date_of_birth(ymd(1970, 1, 1), false)
            .with_hereditary_status(status)
    }

    #[test]
    fn filters() {
        let cohen = member(1, HereditaryStatus::Cohen);
        assert!(StatusFilter::cohanim().matches(&cohen));
        assert!(!StatusFilter::leviim().matches(&cohen));
        assert!(StatusFilter::any().matches(&cohen));
        assert_eq!(StatusFilter::default(), StatusFilter::Any);
    }

    #[test]
    fn suggestion_json() {
        let suggestion = Suggestion {
            person: PersonId::new(4),
            reason: None,
        };
        assert_eq!(
            serde_json::to_string(&suggestion).unwrap(),
            r#"{"person":4,"reason":null}"#
        );
    }

    #[test]
    fn never_called_precedes_recent_within_tier() {
        // 2 Kislev 5780 (a Sabbath) with no yahrzeits or portions in play.
        let on_date = HebrewDate::new(5780, 9, 2).unwrap();
        let congregation = Congregation::new([
            member(1, HereditaryStatus::Israel).with_last_aliya_date(ymd(2019, 1, 1)),
            member(2, HereditaryStatus::Israel),
            member(3, HereditaryStatus::Israel).with_last_aliya_date(ymd(2019, 11, 1)),
            member(4, HereditaryStatus::Israel).with_last_aliya_date(ymd(2018, 6, 1)),
            member(5, HereditaryStatus::Cohen),
        ])
        .unwrap();
        let engine = PrecedenceEngine::new(&congregation, PrecedenceConfig::new(), on_date);

        let ranked = engine
            .suggest_for_status(StatusFilter::israelim(), on_date)
            .unwrap();
        let order: Vec<u32> = ranked.iter().map(|s| s.person.get()).collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
        assert_eq!(ranked[0].reason, Some(AliyaPrecedenceReason::TimeSinceLastAliya));
        assert_eq!(ranked[3].reason, None);
    }
}
