//! The congregation: an arena of persons addressed by id.
//!
//! Father, mother and spouse are stored on each record as ids. Children are
//! derived by reverse lookup when the arena is built, and spouse links are
//! made symmetric so a marriage recorded on either side is seen from both.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::AliyaError;
use crate::person::{Person, PersonId};

#[derive(Debug, Clone, Default)]
pub struct Congregation {
    persons: BTreeMap<PersonId, Person>,
    children: BTreeMap<PersonId, BTreeSet<PersonId>>,
    spouses: BTreeMap<PersonId, BTreeSet<PersonId>>,
}

impl Congregation {
    /// Builds the arena from person records.
    ///
    /// # Errors
    ///
    /// Returns [`AliyaError::DuplicatePerson`] if two records share an id and
    /// [`AliyaError::DanglingReference`] if a father, mother or spouse id is
    /// not among the records.
    pub fn new(persons: impl IntoIterator<Item = Person>) -> Result<Self, AliyaError> {
        let mut by_id = BTreeMap::new();
        for person in persons {
            let id = person.id();
            if by_id.insert(id, person).is_some() {
                return Err(AliyaError::DuplicatePerson { person: id });
            }
        }

        let mut children: BTreeMap<PersonId, BTreeSet<PersonId>> = BTreeMap::new();
        let mut spouses: BTreeMap<PersonId, BTreeSet<PersonId>> = BTreeMap::new();
        for (&id, person) in &by_id {
            let links = [
                ("father", person.father()),
                ("mother", person.mother()),
                ("spouse", person.spouse()),
            ];
            for (relation, target) in links {
                let Some(target) = target else { continue };
                if !by_id.contains_key(&target) {
                    return Err(AliyaError::DanglingReference {
                        person: id,
                        relation,
                        target,
                    });
                }
                if relation == "spouse" {
                    spouses.entry(id).or_default().insert(target);
                    spouses.entry(target).or_default().insert(id);
                } else {
                    children.entry(target).or_default().insert(id);
                }
            }
        }

        debug!(persons = by_id.len(), "built congregation");
        Ok(Self {
            persons: by_id,
            children,
            spouses,
        })
    }

    /// Looks up a person.
    pub fn get(&self, id: PersonId) -> Result<&Person, AliyaError> {
        self.persons
            .get(&id)
            .ok_or(AliyaError::UnknownPerson { person: id })
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.persons.contains_key(&id)
    }

    /// Iterates persons in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Children of `id` through either parent link, in id order.
    pub fn children(&self, id: PersonId) -> Result<Vec<PersonId>, AliyaError> {
        self.get(id)?;
        Ok(self.children_of(id).collect())
    }

    fn children_of(&self, id: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.children.get(&id).into_iter().flatten().copied()
    }

    /// Parents, children, siblings and spouse of `id`, without `id` itself,
    /// in id order.
    ///
    /// Siblings are the children of either parent, so half-siblings are
    /// included.
    pub fn immediate_family(&self, id: PersonId) -> Result<Vec<PersonId>, AliyaError> {
        let person = self.get(id)?;
        let parents = [person.father(), person.mother()];

        let mut family: BTreeSet<PersonId> = parents.into_iter().flatten().collect();
        for parent in parents.into_iter().flatten() {
            family.extend(self.children_of(parent));
        }
        family.extend(self.children_of(id));
        family.extend(self.spouses.get(&id).into_iter().flatten().copied());
        family.remove(&id);
        Ok(family.into_iter().collect())
    }

    /// "<formal name> בן|בת <father's formal name>", or `None` without a
    /// recorded father.
    pub fn paternal_formal_name(&self, id: PersonId) -> Result<Option<String>, AliyaError> {
        let person = self.get(id)?;
        self.formal_name_with_parent(person, person.father())
    }

    /// As [`paternal_formal_name`](Self::paternal_formal_name), with the
    /// mother's formal name.
    pub fn maternal_formal_name(&self, id: PersonId) -> Result<Option<String>, AliyaError> {
        let person = self.get(id)?;
        self.formal_name_with_parent(person, person.mother())
    }

    fn formal_name_with_parent(
        &self,
        person: &Person,
        parent: Option<PersonId>,
    ) -> Result<Option<String>, AliyaError> {
        let Some(parent) = parent else {
            return Ok(None);
        };
        let parent = self.get(parent)?;
        Ok(Some(format!(
            "{} {} {}",
            person.formal_name(),
            person.son_or_daughter(),
            parent.formal_name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Gender;

    fn id(n: u32) -> PersonId {
        PersonId::new(n)
    }

    fn family() -> Congregation {
        // 1 + 2 married (recorded on 2 only), children 3 and 4; 5 is 3's
        // half-brother through 1; 6 is 3's wife (recorded on 3).
        Congregation::new([
            Person::new(id(1), "Avraham", Gender::Male),
            Person::new(id(2), "Sarah", Gender::Female).with_spouse(id(1)),
            Person::new(id(3), "Yitzchak", Gender::Male)
                .with_father(id(1))
                .with_mother(id(2))
                .with_spouse(id(6)),
            Person::new(id(4), "Dina", Gender::Female)
                .with_father(id(1))
                .with_mother(id(2)),
            Person::new(id(5), "Yishmael", Gender::Male).with_father(id(1)),
            Person::new(id(6), "Rivka", Gender::Female),
        ])
        .unwrap()
    }

    #[test]
    fn immediate_family_of_child() {
        let congregation = family();
        assert_eq!(
            congregation.immediate_family(id(3)).unwrap(),
            vec![id(1), id(2), id(4), id(5), id(6)]
        );
    }

    #[test]
    fn spouse_link_is_symmetric() {
        let congregation = family();
        assert!(congregation.immediate_family(id(1)).unwrap().contains(&id(2)));
        assert!(congregation.immediate_family(id(6)).unwrap().contains(&id(3)));
    }

    #[test]
    fn parent_sees_children() {
        let congregation = family();
        assert_eq!(congregation.children(id(1)).unwrap(), vec![id(3), id(4), id(5)]);
        assert_eq!(
            congregation.immediate_family(id(2)).unwrap(),
            vec![id(1), id(3), id(4)]
        );
    }

    #[test]
    fn dangling_reference() {
        let err = Congregation::new([
            Person::new(id(1), "Avraham", Gender::Male).with_father(id(9)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            AliyaError::DanglingReference {
                person: id(1),
                relation: "father",
                target: id(9),
            }
        );
    }

    #[test]
    fn duplicate_id() {
        let err = Congregation::new([
            Person::new(id(1), "Avraham", Gender::Male),
            Person::new(id(1), "Sarah", Gender::Female),
        ])
        .unwrap_err();
        assert_eq!(err, AliyaError::DuplicatePerson { person: id(1) });
    }

    #[test]
    fn unknown_person() {
        let congregation = family();
        assert_eq!(
            congregation.immediate_family(id(42)).unwrap_err(),
            AliyaError::UnknownPerson { person: id(42) }
        );
    }

    #[test]
    fn formal_names() {
        let congregation = family();
        assert_eq!(
            congregation.paternal_formal_name(id(3)).unwrap().as_deref(),
            Some("Yitzchak בן Avraham")
        );
        assert_eq!(
            congregation.maternal_formal_name(id(4)).unwrap().as_deref(),
            Some("Dina בת Sarah")
        );
        assert_eq!(congregation.maternal_formal_name(id(5)).unwrap(), None);
    }
}
