//! Partial calendar dates
//!
//! Genealogical records rarely carry complete dates. A [`GenDate`] always has
//! a year and may have a month and a day; an entirely unknown date is modeled
//! as `Option<GenDate>` on the record, not as a `GenDate` variant.
//!
//! Comparison contract: a partial date orders as the earliest calendar point
//! consistent with its known fields (missing month and day default to
//! January 1st), with a more specific date ordering before a less specific
//! one at the same point — so `cmp` returns `Equal` exactly when two dates
//! are structurally equal, keeping `Ord` consistent with the derived `Eq`.
//! This gives a total order that the interval matcher relies on. "Absent
//! death date means alive indefinitely" is a matcher-side rule, not a
//! property of `GenDate`.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A calendar date that may be missing its month and/or day
///
/// Invariant: a day is only present when the month is present. Full dates
/// are validated against the real calendar on construction; deserialization
/// goes through the same constructors, so a stored date that none of them
/// would produce is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

impl GenDate {
    /// A year-only date
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    /// A year-and-month date
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDate`] if the month is outside 1..=12.
    pub fn from_ym(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::MalformedDate {
                input: format!("{}-{:02}", year, month),
            });
        }
        Ok(Self {
            year,
            month: Some(month),
            day: None,
        })
    }

    /// A fully specified date, validated against the calendar
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDate`] if year/month/day do not form a real
    /// calendar date (e.g. Feb 30).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(Error::MalformedDate {
                input: format!("{}-{:02}-{:02}", year, month, day),
            });
        }
        Ok(Self {
            year,
            month: Some(month),
            day: Some(day),
        })
    }

    /// Parse `"YYYY"`, `"YYYY-MM"` or `"YYYY-MM-DD"`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDate`] on any other shape or on an invalid
    /// calendar date. A malformed date aborts the whole query; callers must
    /// not downgrade this to a per-record skip.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || Error::MalformedDate {
            input: input.to_string(),
        };
        let mut parts = input.trim().splitn(3, '-');
        let year: i32 = parts
            .next()
            .filter(|p| !p.is_empty())
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let month: Option<u32> = match parts.next() {
            Some(p) => Some(p.parse().map_err(|_| malformed())?),
            None => None,
        };
        let day: Option<u32> = match parts.next() {
            Some(p) => Some(p.parse().map_err(|_| malformed())?),
            None => None,
        };
        match (month, day) {
            (None, _) => Ok(Self::from_year(year)),
            (Some(m), None) => Self::from_ym(year, m).map_err(|_| malformed()),
            (Some(m), Some(d)) => Self::new(year, m, d).map_err(|_| malformed()),
        }
    }

    /// The year component (always known)
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component, if recorded
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    /// The day component, if recorded
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Earliest calendar point consistent with the known fields
    fn earliest(&self) -> (i32, u32, u32) {
        (self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

impl Ord for GenDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earliest point first; at the same point a fully specified date
        // sorts before a partial one, so Equal holds exactly for
        // structurally equal dates (the derived Eq).
        self.earliest()
            .cmp(&other.earliest())
            .then_with(|| other.month.is_some().cmp(&self.month.is_some()))
            .then_with(|| other.day.is_some().cmp(&self.day.is_some()))
    }
}

impl PartialOrd for GenDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GenDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.day) {
            (Some(m), Some(d)) => {
                // Validated at construction, so this lookup cannot fail.
                match NaiveDate::from_ymd_opt(self.year, m, d) {
                    Some(date) => write!(f, "{}", date.format("%-d %b %Y")),
                    None => write!(f, "{}-{:02}-{:02}", self.year, m, d),
                }
            }
            (Some(m), None) => match NaiveDate::from_ymd_opt(self.year, m, 1) {
                Some(date) => write!(f, "{}", date.format("%b %Y")),
                None => write!(f, "{}-{:02}", self.year, m),
            },
            _ => write!(f, "{}", self.year),
        }
    }
}

impl<'de> Deserialize<'de> for GenDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            #[serde(default)]
            month: Option<u32>,
            #[serde(default)]
            day: Option<u32>,
        }
        let raw = Raw::deserialize(deserializer)?;
        match (raw.month, raw.day) {
            (None, None) => Ok(GenDate::from_year(raw.year)),
            (Some(m), None) => GenDate::from_ym(raw.year, m).map_err(serde::de::Error::custom),
            (Some(m), Some(d)) => {
                GenDate::new(raw.year, m, d).map_err(serde::de::Error::custom)
            }
            (None, Some(_)) => Err(serde::de::Error::custom("day requires a month")),
        }
    }
}

/// Parse a user-supplied year string for an interval query
///
/// # Errors
///
/// Returns [`Error::MalformedDate`] if the input is not a plain integer
/// year. This failure is fatal to the whole query.
pub fn parse_year(input: &str) -> Result<i32> {
    input.trim().parse().map_err(|_| Error::MalformedDate {
        input: input.to_string(),
    })
}
