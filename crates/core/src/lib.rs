//! Core types and traits for kinship
//!
//! This crate defines the foundational pieces used throughout the system:
//! - PersonId / FamilyId: stable identifiers assigned by the record source
//! - Name, Sex: person name entries and recorded sex
//! - GenDate: partial calendar dates with an earliest-point total order
//! - Person, Family: the read-only record types
//! - Error: the shared error taxonomy
//! - Traits: collaborator seams (RecordSource, UserPrompt, Formatter, OutputSink)
//! - MemorySource: the reference in-memory record source

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date;
pub mod error;
pub mod mem;
pub mod person;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use date::{parse_year, GenDate};
pub use error::{Error, Result};
pub use mem::MemorySource;
pub use person::{Family, Person};
pub use traits::{
    Formatter, OutputSink, PersonLookup, PersonOrder, PromptId, RecordSource, Template, UserPrompt,
};
pub use types::{FamilyId, Name, PersonId, Sex};
