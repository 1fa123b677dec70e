//! Congregation member records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use yaamod_calendar::{HebrewDate, nth_anniversary_of, to_hebrew_date};
use yaamod_torah::parasha_name;

/// Stable key of a person in a [`Congregation`](crate::Congregation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u32);

impl PersonId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Hereditary status (yichus).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HereditaryStatus {
    Cohen,
    Levi,
    #[default]
    Israel,
}

impl HereditaryStatus {
    pub fn name(self) -> &'static str {
        match self {
            Self::Cohen => "Cohen",
            Self::Levi => "Levi",
            Self::Israel => "Israel",
        }
    }
}

impl fmt::Display for HereditaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One person known to the synagogue, living or deceased.
///
/// Relationships are stored as ids and resolved through the owning
/// congregation. Dates are Gregorian; the `*_after_sunset` flags move the
/// Hebrew date one day forward.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use yaamod_aliya::{Gender, Person, PersonId};
///
/// let person = Person::new(PersonId::new(1), "Yosef", Gender::Male)
///     .with_last_name("Levinson")
///     .with_date_of_birth(NaiveDate::from_ymd_opt(1989, 11, 28).unwrap(), true);
/// assert_eq!(person.full_name(), "Yosef Levinson");
/// assert_eq!(person.hebrew_date_of_birth().unwrap().to_string(), "1 Kislev 5750");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    id: PersonId,
    formal_name: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: String,
    gender: Gender,
    #[serde(default)]
    date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    date_of_birth_after_sunset: bool,
    #[serde(default)]
    date_of_death: Option<NaiveDate>,
    #[serde(default)]
    date_of_death_after_sunset: bool,
    #[serde(default)]
    hereditary_status: HereditaryStatus,
    #[serde(default)]
    cannot_get_aliya: bool,
    #[serde(default, alias = "bar_mitzvah_parasha_index")]
    bar_mitzvah_parasha: Option<u8>,
    #[serde(default)]
    last_aliya_date: Option<NaiveDate>,
    #[serde(default, alias = "father_ref")]
    father: Option<PersonId>,
    #[serde(default, alias = "mother_ref")]
    mother: Option<PersonId>,
    #[serde(default, alias = "spouse_ref")]
    spouse: Option<PersonId>,
    #[serde(default)]
    can_be_hazan: bool,
    #[serde(default)]
    can_read_torah: bool,
    #[serde(default)]
    can_read_haftarah: bool,
}

impl Person {
    /// Creates a record with only the required fields set.
    pub fn new(id: PersonId, formal_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            formal_name: formal_name.into(),
            first_name: None,
            last_name: String::new(),
            gender,
            date_of_birth: None,
            date_of_birth_after_sunset: false,
            date_of_death: None,
            date_of_death_after_sunset: false,
            hereditary_status: HereditaryStatus::default(),
            cannot_get_aliya: false,
            bar_mitzvah_parasha: None,
            last_aliya_date: None,
            father: None,
            mother: None,
            spouse: None,
            can_be_hazan: false,
            can_read_torah: false,
            can_read_haftarah: false,
        }
    }

    /// Sets the everyday first name, if it differs from the formal name.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn with_date_of_birth(mut self, date: NaiveDate, after_sunset: bool) -> Self {
        self.date_of_birth = Some(date);
        self.date_of_birth_after_sunset = after_sunset;
        self
    }

    pub fn with_date_of_death(mut self, date: NaiveDate, after_sunset: bool) -> Self {
        self.date_of_death = Some(date);
        self.date_of_death_after_sunset = after_sunset;
        self
    }

    pub fn with_hereditary_status(mut self, status: HereditaryStatus) -> Self {
        self.hereditary_status = status;
        self
    }

    pub fn with_cannot_get_aliya(mut self, cannot_get_aliya: bool) -> Self {
        self.cannot_get_aliya = cannot_get_aliya;
        self
    }

    /// Sets the index of the portion read at the bar mitzvah.
    pub fn with_bar_mitzvah_parasha(mut self, number: u8) -> Self {
        self.bar_mitzvah_parasha = Some(number);
        self
    }

    pub fn with_last_aliya_date(mut self, date: NaiveDate) -> Self {
        self.last_aliya_date = Some(date);
        self
    }

    pub fn with_father(mut self, father: PersonId) -> Self {
        self.father = Some(father);
        self
    }

    pub fn with_mother(mut self, mother: PersonId) -> Self {
        self.mother = Some(mother);
        self
    }

    pub fn with_spouse(mut self, spouse: PersonId) -> Self {
        self.spouse = Some(spouse);
        self
    }

    /// Sets the service roles: leading prayers, reading Torah and haftarah.
    pub fn with_roles(mut self, hazan: bool, torah: bool, haftarah: bool) -> Self {
        self.can_be_hazan = hazan;
        self.can_read_torah = torah;
        self.can_read_haftarah = haftarah;
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> PersonId {
        self.id
    }

    /// The Hebrew name used when the person is called up.
    pub fn formal_name(&self) -> &str {
        &self.formal_name
    }

    /// The everyday first name, falling back to the formal name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(&self.formal_name)
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            return self.first_name().to_string();
        }
        format!("{} {}", self.first_name(), self.last_name)
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    /// "בן" (son of) or "בת" (daughter of).
    pub fn son_or_daughter(&self) -> &'static str {
        match self.gender {
            Gender::Male => "בן",
            Gender::Female => "בת",
        }
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn date_of_death(&self) -> Option<NaiveDate> {
        self.date_of_death
    }

    pub fn hereditary_status(&self) -> HereditaryStatus {
        self.hereditary_status
    }

    pub fn cannot_get_aliya(&self) -> bool {
        self.cannot_get_aliya
    }

    pub fn bar_mitzvah_parasha(&self) -> Option<u8> {
        self.bar_mitzvah_parasha
    }

    pub fn last_aliya_date(&self) -> Option<NaiveDate> {
        self.last_aliya_date
    }

    pub fn father(&self) -> Option<PersonId> {
        self.father
    }

    pub fn mother(&self) -> Option<PersonId> {
        self.mother
    }

    pub fn spouse(&self) -> Option<PersonId> {
        self.spouse
    }

    pub fn can_be_hazan(&self) -> bool {
        self.can_be_hazan
    }

    pub fn can_read_torah(&self) -> bool {
        self.can_read_torah
    }

    pub fn can_read_haftarah(&self) -> bool {
        self.can_read_haftarah
    }

    // --- Derived dates ---

    pub fn is_deceased(&self) -> bool {
        self.date_of_death.is_some()
    }

    pub fn hebrew_date_of_birth(&self) -> Option<HebrewDate> {
        to_hebrew_date(self.date_of_birth, self.date_of_birth_after_sunset)
    }

    pub fn hebrew_date_of_death(&self) -> Option<HebrewDate> {
        to_hebrew_date(self.date_of_death, self.date_of_death_after_sunset)
    }

    /// The thirteenth Hebrew birthday; `None` without a birth date.
    pub fn bar_mitzvah_date(&self) -> Option<HebrewDate> {
        self.hebrew_date_of_birth()
            .and_then(|birth| nth_anniversary_of(birth, 13).ok())
    }

    pub fn bar_mitzvah_parasha_name(&self) -> Option<&'static str> {
        self.bar_mitzvah_parasha.and_then(parasha_name)
    }

    /// True once a male has reached his bar mitzvah by `today`.
    pub fn is_bar_mitzvah(&self, today: HebrewDate) -> bool {
        self.is_male() && self.bar_mitzvah_date().is_some_and(|date| today >= date)
    }

    /// True if the person may be called up at all on `today`.
    pub fn can_get_aliya(&self, today: HebrewDate) -> bool {
        self.is_bar_mitzvah(today) && !self.is_deceased() && !self.cannot_get_aliya
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn heb(year: i32, month: u8, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    #[test]
    fn names() {
        let person = Person::new(PersonId::new(1), "Yehoshua", Gender::Male)
            .with_first_name("Josh")
            .with_last_name("Katz");
        assert_eq!(person.first_name(), "Josh");
        assert_eq!(person.formal_name(), "Yehoshua");
        assert_eq!(person.full_name(), "Josh Katz");
        assert_eq!(person.to_string(), "Josh Katz");

        let bare = Person::new(PersonId::new(2), "Sarah", Gender::Female);
        assert_eq!(bare.full_name(), "Sarah");
        assert_eq!(bare.son_or_daughter(), "בת");
    }

    #[test]
    fn bar_mitzvah_from_adar_birthday() {
        // 25 February 1986 = 16 Adar I 5746.
        let person = Person::new(PersonId::new(1), "Ari", Gender::Male)
            .with_date_of_birth(ymd(1986, 2, 25), false);
        assert_eq!(person.hebrew_date_of_birth(), Some(heb(5746, 12, 16)));
        assert_eq!(person.bar_mitzvah_date(), Some(heb(5759, 12, 16)));
        assert!(person.is_bar_mitzvah(heb(5759, 12, 16)));
        assert!(!person.is_bar_mitzvah(heb(5759, 12, 15)));
    }

    #[test]
    fn no_birth_date_is_never_bar_mitzvah() {
        let person = Person::new(PersonId::new(1), "Ari", Gender::Male);
        assert_eq!(person.bar_mitzvah_date(), None);
        assert!(!person.is_bar_mitzvah(heb(5780, 1, 1)));
        assert!(!person.can_get_aliya(heb(5780, 1, 1)));
    }

    #[test]
    fn eligibility_flags() {
        let today = heb(5780, 1, 1);
        let adult = Person::new(PersonId::new(1), "Ari", Gender::Male)
            .with_date_of_birth(ymd(1970, 1, 1), false);
        assert!(adult.can_get_aliya(today));
        assert!(!adult.clone().with_cannot_get_aliya(true).can_get_aliya(today));
        assert!(!adult
            .clone()
            .with_date_of_death(ymd(2019, 1, 1), false)
            .can_get_aliya(today));

        let woman = Person::new(PersonId::new(2), "Rivka", Gender::Female)
            .with_date_of_birth(ymd(1970, 1, 1), false);
        assert!(!woman.can_get_aliya(today));
    }

    #[test]
    fn death_after_sunset() {
        let person = Person::new(PersonId::new(1), "Moshe", Gender::Male)
            .with_date_of_death(ymd(1989, 11, 28), true);
        assert!(person.is_deceased());
        assert_eq!(person.hebrew_date_of_death(), Some(heb(5750, 9, 1)));
    }

    #[test]
    fn parasha_name_lookup() {
        let person = Person::new(PersonId::new(1), "Ari", Gender::Male).with_bar_mitzvah_parasha(21);
        assert_eq!(person.bar_mitzvah_parasha_name(), Some("Vayakhel"));
        let unknown = Person::new(PersonId::new(1), "Ari", Gender::Male).with_bar_mitzvah_parasha(99);
        assert_eq!(unknown.bar_mitzvah_parasha_name(), None);
    }

    #[test]
    fn status_display() {
        assert_eq!(HereditaryStatus::default(), HereditaryStatus::Israel);
        assert_eq!(HereditaryStatus::Cohen.to_string(), "Cohen");
    }

    #[test]
    fn record_field_aliases() {
        let person: Person = serde_json::from_str(
            r#"{"id": 3, "formal_name": "Shimon", "gender": "male",
                "bar_mitzvah_parasha_index": 38,
                "father_ref": 1, "mother_ref": 2, "spouse_ref": 4}"#,
        )
        .unwrap();
        assert_eq!(person.bar_mitzvah_parasha(), Some(38));
        assert_eq!(person.father(), Some(PersonId::new(1)));
        assert_eq!(person.mother(), Some(PersonId::new(2)));
        assert_eq!(person.spouse(), Some(PersonId::new(4)));
    }

    #[test]
    fn roles_default_off() {
        let person: Person =
            serde_json::from_str(r#"{"id": 1, "formal_name": "Levi", "gender": "male"}"#).unwrap();
        assert!(!person.can_be_hazan());
        assert!(!person.can_read_torah());
        assert!(!person.can_read_haftarah());

        let reader = person.with_roles(false, true, true);
        assert!(!reader.can_be_hazan());
        assert!(reader.can_read_torah());
        assert!(reader.can_read_haftarah());
    }
}
