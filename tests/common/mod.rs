//! Shared fixtures for the integration test suites.
//!
//! One small family tree exercising every interesting record shape: partial
//! dates, an open-ended lifespan, a missing birth date, a maiden name with
//! two partners, an unnamed person, and an unnamed union.

#![allow(dead_code)]

use kinship::{Family, GenDate, MemorySource, Name, Person, PersonId, Sex};
use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` diagnostics into the test harness output.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Ids used by the fixture tree.
pub const JOHN: &str = "I001";
pub const MARY: &str = "I002";
pub const PETE: &str = "I003";
pub const BEA: &str = "I004";
pub const CARL: &str = "I005";
pub const UNNAMED: &str = "I006";

fn ids(ids: &[&str]) -> Vec<PersonId> {
    ids.iter().map(|id| PersonId::new(*id)).collect()
}

/// Build the shared fixture tree.
///
/// - John Smith (M), 1900-1950, partner Mary
/// - Mary, maiden name Jones (primary) with married alias Smith (F),
///   born 15 Jun 1905, partners John and Pete
/// - Pete Potter (M), born 1910, no death, partner Mary
/// - Bea Brown (F), born 1930, no death, partner Carl
/// - Carl Clark (M), no birth date, died 1960, partner Bea
/// - An unnamed person with no dates
///
/// Families: Smith/Jones, Potter/Jones, Brown/Clark, and one unnamed union.
pub fn sample_source() -> MemorySource {
    init_tracing();
    let persons = vec![
        Person::new(
            JOHN,
            vec![Name::new("John", "Smith")],
            Sex::Male,
            Some(GenDate::from_year(1900)),
            Some(GenDate::from_year(1950)),
            ids(&[MARY]),
        ),
        Person::new(
            MARY,
            vec![Name::new("Mary", "Jones"), Name::new("Mary", "Smith")],
            Sex::Female,
            Some(GenDate::new(1905, 6, 15).expect("valid date")),
            None,
            ids(&[JOHN, PETE]),
        ),
        Person::new(
            PETE,
            vec![Name::new("Pete", "Potter")],
            Sex::Male,
            Some(GenDate::from_year(1910)),
            None,
            ids(&[MARY]),
        ),
        Person::new(
            BEA,
            vec![Name::new("Bea", "Brown")],
            Sex::Female,
            Some(GenDate::from_year(1930)),
            None,
            ids(&[CARL]),
        ),
        Person::new(
            CARL,
            vec![Name::new("Carl", "Clark")],
            Sex::Male,
            None,
            Some(GenDate::from_year(1960)),
            ids(&[BEA]),
        ),
        Person::new(UNNAMED, vec![], Sex::Unknown, None, None, vec![]),
    ];
    let families = vec![
        Family::new("F001", ids(&[JOHN, MARY])),
        Family::new("F002", ids(&[PETE, MARY])),
        Family::new("F003", ids(&[UNNAMED])),
        Family::new("F004", ids(&[BEA, CARL])),
    ];
    MemorySource::new(persons, families).expect("fixture ids are unique")
}

/// Positions of `needles` inside `haystack`, asserting each is present.
pub fn positions<S: AsRef<str>>(haystack: &str, needles: &[S]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle.as_ref())
                .unwrap_or_else(|| panic!("missing {:?} in report body", needle.as_ref()))
        })
        .collect()
}

/// Assert `needles` occur in `haystack` in the given order.
pub fn assert_ordered<S: AsRef<str>>(haystack: &str, needles: &[S]) {
    let found = positions(haystack, needles);
    let order: Vec<&str> = needles.iter().map(AsRef::as_ref).collect();
    assert!(
        found.windows(2).all(|w| w[0] < w[1]),
        "expected order {:?}, found positions {:?}",
        order,
        found
    );
}
