//! Core identifier and name types
//!
//! This module defines the foundational record types:
//! - PersonId / FamilyId: stable string identifiers assigned by the record source
//! - Sex: the sex recorded for an individual
//! - Name: one name entry of a person (given name and/or surname)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique identifier for a person record
///
/// Identifiers are assigned by the external record source (e.g. "I042") and
/// are opaque to the query core. They are only compared for equality and
/// used as traversal edges in partner lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    /// Create a PersonId from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Stable, unique identifier for a family (union) record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FamilyId(String);

impl FamilyId {
    /// Create a FamilyId from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FamilyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Sex recorded for an individual
///
/// `Unknown` covers records with no sex entry. Surname resolution only
/// branches on `Female` (maiden-name convention, see the query crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Recorded as male
    Male,
    /// Recorded as female
    Female,
    /// No sex recorded
    Unknown,
}

impl Default for Sex {
    fn default() -> Self {
        Sex::Unknown
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
            Sex::Unknown => write!(f, "unknown"),
        }
    }
}

/// One name entry of a person
///
/// Both parts are optional; a record source may supply surname-only or
/// given-only entries. An entry with neither part is legal but contributes
/// nothing to matching or display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Given name(s), e.g. "Mary Ann"
    pub given: Option<String>,
    /// Surname, e.g. "Smith"
    pub surname: Option<String>,
}

impl Name {
    /// Create a name with both parts
    pub fn new(given: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            given: Some(given.into()),
            surname: Some(surname.into()),
        }
    }

    /// Create a surname-only name entry
    pub fn surname_only(surname: impl Into<String>) -> Self {
        Self {
            given: None,
            surname: Some(surname.into()),
        }
    }

    /// Create a given-only name entry
    pub fn given_only(given: impl Into<String>) -> Self {
        Self {
            given: Some(given.into()),
            surname: None,
        }
    }

    /// Surname part, if recorded
    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    /// Given part, if recorded
    pub fn given(&self) -> Option<&str> {
        self.given.as_deref()
    }

    /// Display form: "Given Surname", either part alone if the other is
    /// missing, `None` if the entry is empty.
    pub fn display(&self) -> Option<String> {
        match (self.given.as_deref(), self.surname.as_deref()) {
            (Some(g), Some(s)) => Some(format!("{} {}", g, s)),
            (Some(g), None) => Some(g.to_string()),
            (None, Some(s)) => Some(s.to_string()),
            (None, None) => None,
        }
    }
}
