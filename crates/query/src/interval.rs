//! Year-interval lifespan matching
//!
//! Answers "was this person alive during year Y?" and "did this person die
//! in year Y or later?" against possibly partial birth/death dates.
//!
//! ## Semantics
//!
//! The query year Y becomes the inclusive interval [Jan 1 Y, Dec 31 Y]. A
//! person's lifespan is [birth, death] with an absent death treated as
//! "alive indefinitely". Default mode is inclusive interval overlap; death
//! mode requires a recorded death on or after the interval start. A person
//! with no birth date is excluded unconditionally in both modes: presence in
//! any year cannot be established.

use kinship_core::{parse_year, Error, GenDate, Person, Result};
use tracing::debug;

/// The inclusive calendar bounds of a query year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearInterval {
    year: i32,
    start: GenDate,
    end: GenDate,
}

impl YearInterval {
    /// Build the [Jan 1, Dec 31] interval for `year`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDate`] if the year is outside the
    /// representable calendar range.
    pub fn for_year(year: i32) -> Result<Self> {
        Ok(Self {
            year,
            start: GenDate::new(year, 1, 1)?,
            end: GenDate::new(year, 12, 31)?,
        })
    }

    /// Parse a user-supplied year string into an interval
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDate`] carrying the original input on any
    /// failure. Fatal to the whole query; never downgraded to a skip.
    pub fn parse(input: &str) -> Result<Self> {
        let year = parse_year(input)?;
        Self::for_year(year).map_err(|_| Error::MalformedDate {
            input: input.to_string(),
        })
    }

    /// The queried year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Jan 1 of the queried year
    pub fn start(&self) -> &GenDate {
        &self.start
    }

    /// Dec 31 of the queried year
    pub fn end(&self) -> &GenDate {
        &self.end
    }
}

/// Which lifespan question is being asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// "Was alive during year Y" (inclusive interval overlap)
    #[default]
    AliveDuring,
    /// "Died in year Y or later" (recorded death required)
    DiedInOrAfter,
}

/// Pure lifespan predicate over a year interval
///
/// Holds no per-person state; evaluating a person has no side effects
/// beyond debug diagnostics, which never change the result.
#[derive(Debug, Clone, Copy)]
pub struct LifespanFilter {
    interval: YearInterval,
    mode: MatchMode,
}

impl LifespanFilter {
    /// Create a filter for `interval` in `mode`
    pub fn new(interval: YearInterval, mode: MatchMode) -> Self {
        Self { interval, mode }
    }

    /// The filter's match mode
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Decide membership for one person
    pub fn matches(&self, person: &Person) -> bool {
        let Some(birth) = person.birth() else {
            debug!(
                target: "kinship::dates",
                person = %person.id(),
                "no birth date, excluded from year query"
            );
            return false;
        };
        match self.mode {
            MatchMode::AliveDuring => {
                // Overlap of [birth, death-or-infinity] with [Jan 1, Dec 31]:
                // an absent death compares later than any concrete date.
                self.interval.end >= *birth
                    && person
                        .death()
                        .map_or(true, |death| self.interval.start <= *death)
            }
            MatchMode::DiedInOrAfter => person
                .death()
                .is_some_and(|death| self.interval.start <= *death),
        }
    }
}
