//! Person and family records
//!
//! Records are constructed once by the external record source before a query
//! begins and are read-only for the query's duration. The core never
//! creates, mutates, or destroys them.

use crate::date::GenDate;
use crate::types::{FamilyId, Name, PersonId, Sex};
use serde::{Deserialize, Serialize};

/// An individual genealogical record
///
/// The name sequence preserves insertion order and the order is meaningful:
/// the first entry is the primary name, later entries are aliases (a woman's
/// maiden name is conventionally the primary entry). Partner references are
/// identifiers into the same record set; they are the sole source of
/// traversal edges for surname resolution, and symmetry (A lists B, B lists
/// A) is expected but never assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    names: Vec<Name>,
    sex: Sex,
    birth: Option<GenDate>,
    death: Option<GenDate>,
    partners: Vec<PersonId>,
}

impl Person {
    /// Create a person record
    pub fn new(
        id: impl Into<PersonId>,
        names: Vec<Name>,
        sex: Sex,
        birth: Option<GenDate>,
        death: Option<GenDate>,
        partners: Vec<PersonId>,
    ) -> Self {
        Self {
            id: id.into(),
            names,
            sex,
            birth,
            death,
            partners,
        }
    }

    /// The record's stable identifier
    pub fn id(&self) -> &PersonId {
        &self.id
    }

    /// All name entries, in insertion order (primary first)
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    /// The primary name entry, if any names are recorded
    pub fn primary_name(&self) -> Option<&Name> {
        self.names.first()
    }

    /// Display form of the primary name, falling back to the identifier
    /// for records with no usable name entry
    pub fn display_name(&self) -> String {
        self.names
            .iter()
            .find_map(Name::display)
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Recorded sex
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Birth date, if recorded (possibly partial)
    pub fn birth(&self) -> Option<&GenDate> {
        self.birth.as_ref()
    }

    /// Death date, if recorded (possibly partial)
    ///
    /// An absent death date means "alive indefinitely" for interval
    /// matching purposes.
    pub fn death(&self) -> Option<&GenDate> {
        self.death.as_ref()
    }

    /// Partner references, in record order
    pub fn partners(&self) -> &[PersonId] {
        &self.partners
    }
}

/// A marriage or partnership union
///
/// Carries only the partner references. The descriptive key used to sort
/// the marriage report is derived at query time from partner names and is
/// never stored on the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    id: FamilyId,
    partners: Vec<PersonId>,
}

impl Family {
    /// Create a family record
    pub fn new(id: impl Into<FamilyId>, partners: Vec<PersonId>) -> Self {
        Self {
            id: id.into(),
            partners,
        }
    }

    /// The record's stable identifier
    pub fn id(&self) -> &FamilyId {
        &self.id
    }

    /// Partner references, in record order
    pub fn partners(&self) -> &[PersonId] {
        &self.partners
    }
}
