//! Marriage display ordering
//!
//! The marriage report sorts family records by a derived descriptive key:
//! each partner contributes their primary surname (given name when no
//! surname is recorded), joined with `/`. A family where no partner
//! contributes anything has no key and is excluded from the report entirely,
//! not ordered last.
//!
//! The comparator itself is a pure function over derived keys, handed to a
//! stable sort: equal keys keep their source order.

use kinship_core::{Family, Name, PersonLookup};
use std::cmp::Ordering;
use tracing::debug;

/// Derive the descriptive sort/display key for one family
///
/// Returns `None` for unnamed unions (no partner with any resolvable name
/// component); those are filtered out of the report. Dangling partner
/// references contribute nothing and are skipped.
pub fn marriage_key(family: &Family, lookup: &dyn PersonLookup) -> Option<String> {
    let parts: Vec<&str> = family
        .partners()
        .iter()
        .filter_map(|id| {
            let person = lookup.person(id)?;
            person
                .names()
                .iter()
                .find_map(Name::surname)
                .or_else(|| person.names().iter().find_map(Name::given))
        })
        .collect();
    if parts.is_empty() {
        debug!(
            target: "kinship::marriages",
            family = %family.id(),
            "unnamed union, excluded from report"
        );
        return None;
    }
    Some(parts.join("/"))
}

/// Pure lexicographic comparison of two derived keys
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Derive keys, drop unnamed unions, and stable-sort by key
///
/// Ties keep the input order of `families`.
pub fn sorted_families<'a>(
    families: &[&'a Family],
    lookup: &dyn PersonLookup,
) -> Vec<(String, &'a Family)> {
    let mut keyed: Vec<(String, &Family)> = families
        .iter()
        .filter_map(|family| marriage_key(family, lookup).map(|key| (key, *family)))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    keyed
}
