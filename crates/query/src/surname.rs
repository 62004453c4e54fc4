//! Surname resolution over the partner graph
//!
//! A person "carries" a surname if any of their name entries matches it
//! directly, or — for a female person, whose record conventionally holds
//! only her maiden name — if a partner's name entries match. A partner-side
//! hit is still attributed to the original person: the report prints her
//! identifier and name, never the partner's.
//!
//! ## Traversal policy
//!
//! Partner traversal goes exactly one level deep ([`PARTNER_DEPTH`]):
//! partners of partners are never examined. This bound is deliberate,
//! observable behavior, not a shortcut. The depth is threaded explicitly
//! through the recursion so that generalizing it would force the question of
//! cycle detection (partner links may form cycles) instead of silently
//! looping.

use kinship_core::{Person, PersonId, PersonLookup, Sex};
use tracing::debug;

/// Fixed partner-recursion depth. Policy, not a tunable.
pub const PARTNER_DEPTH: usize = 1;

/// A positive resolution result with first-class attribution
///
/// `matched_on` is the person whose name entry actually equalled the target;
/// `report_as` is the person the result line must identify. They differ
/// exactly when the match came through a spousal link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchAttribution {
    /// Person whose name entry matched the target surname
    pub matched_on: PersonId,
    /// Person the formatted result must be attributed to
    pub report_as: PersonId,
}

impl MatchAttribution {
    /// True when the match was reached through a spousal link
    pub fn via_partner(&self) -> bool {
        self.matched_on != self.report_as
    }
}

/// Decides whether a person is associated with one target surname
///
/// Matching is exact and case-sensitive as supplied. The resolver holds no
/// per-query state and never mutates records; it produces at most one
/// attribution per top-level person.
#[derive(Debug, Clone)]
pub struct SurnameResolver {
    target: String,
}

impl SurnameResolver {
    /// Create a resolver for `target`
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The surname being resolved
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Resolve one top-level person
    ///
    /// Returns the attribution of the first match in name order (direct
    /// names first, then partners in record order), or `None`. Dangling
    /// partner references are skipped, never an error.
    pub fn resolve(
        &self,
        person: &Person,
        lookup: &dyn PersonLookup,
    ) -> Option<MatchAttribution> {
        self.resolve_at(person, lookup, 0)
    }

    fn resolve_at(
        &self,
        person: &Person,
        lookup: &dyn PersonLookup,
        depth: usize,
    ) -> Option<MatchAttribution> {
        // First matching name entry wins; later entries are not scanned.
        for name in person.names() {
            let Some(surname) = name.surname() else {
                continue;
            };
            if surname == self.target {
                return Some(MatchAttribution {
                    matched_on: person.id().clone(),
                    report_as: person.id().clone(),
                });
            }
        }
        // Maiden-name convention: only a female record defers to spousal
        // surnames, and only within the fixed depth bound.
        if person.sex() == Sex::Female && depth < PARTNER_DEPTH {
            for partner_id in person.partners() {
                let Some(partner) = lookup.person(partner_id) else {
                    debug!(
                        target: "kinship::surname",
                        person = %person.id(),
                        partner = %partner_id,
                        "dangling partner reference, skipped"
                    );
                    continue;
                };
                if let Some(hit) = self.resolve_at(partner, lookup, depth + 1) {
                    debug!(
                        target: "kinship::surname",
                        person = %person.id(),
                        matched_on = %hit.matched_on,
                        "surname carried via partner"
                    );
                    return Some(MatchAttribution {
                        matched_on: hit.matched_on,
                        report_as: person.id().clone(),
                    });
                }
            }
        }
        None
    }
}
