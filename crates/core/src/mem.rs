//! In-memory record source
//!
//! [`MemorySource`] is the reference [`RecordSource`] implementation: a
//! fully resident record set with an identifier index. Hosts that read from
//! an actual record store typically parse into one of these and hand it to
//! the report drivers.

use crate::error::{Error, Result};
use crate::person::{Family, Person};
use crate::traits::{PersonLookup, PersonOrder, RecordSource};
use crate::types::PersonId;
use std::collections::HashMap;

/// Resident record set with id-indexed partner lookup
#[derive(Debug, Default)]
pub struct MemorySource {
    persons: Vec<Person>,
    families: Vec<Family>,
    by_id: HashMap<PersonId, usize>,
}

impl MemorySource {
    /// Build a source from fully constructed records
    ///
    /// Insertion order of `persons` is preserved as [`PersonOrder::Insertion`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Record`] if two person records share an identifier.
    pub fn new(persons: Vec<Person>, families: Vec<Family>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(persons.len());
        for (idx, person) in persons.iter().enumerate() {
            if by_id.insert(person.id().clone(), idx).is_some() {
                return Err(Error::record(format!(
                    "duplicate person id {}",
                    person.id()
                )));
            }
        }
        Ok(Self {
            persons,
            families,
            by_id,
        })
    }

    /// Number of person records
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Number of family records
    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}

impl PersonLookup for MemorySource {
    fn person(&self, id: &PersonId) -> Option<&Person> {
        self.by_id.get(id).map(|&idx| &self.persons[idx])
    }
}

impl RecordSource for MemorySource {
    fn persons(&self, order: PersonOrder) -> Result<Vec<&Person>> {
        let mut out: Vec<&Person> = self.persons.iter().collect();
        if order == PersonOrder::PrimaryName {
            out.sort_by(|a, b| {
                a.display_name()
                    .cmp(&b.display_name())
                    .then_with(|| a.id().cmp(b.id()))
            });
        }
        Ok(out)
    }

    fn families(&self) -> Result<Vec<&Family>> {
        Ok(self.families.iter().collect())
    }
}
