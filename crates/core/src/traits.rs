//! Collaborator traits between the query core and its host
//!
//! The core owns no file format, user interface, or wire protocol. Reading
//! the record store, prompting the user, rendering display text, and writing
//! the report are all host concerns, reached through the seams defined here.
//! Swapping a host implementation must never change matching results.

use crate::error::Result;
use crate::person::{Family, Person};
use crate::types::PersonId;

/// Resolve a partner reference to its person record
///
/// The resolver treats the partner list of a person as the sole source of
/// traversal edges; this trait is how an edge is followed. A lookup miss
/// (dangling reference) is represented as `None` and is skippable, never
/// fatal.
pub trait PersonLookup {
    /// The record for `id`, or `None` if the reference is dangling
    fn person(&self, id: &PersonId) -> Option<&Person>;
}

/// Iteration order requested from a record source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonOrder {
    /// The source's own insertion order
    Insertion,
    /// Ordered by primary display name (ties broken by identifier)
    PrimaryName,
}

/// The external record store
///
/// All records are resident in memory before a query begins; a query pulls
/// the full ordered set once, with no pagination. Implementations must hand
/// out the same records for the whole duration of a query (read-only
/// contract).
pub trait RecordSource: PersonLookup {
    /// All person records in the requested order
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce the record set.
    fn persons(&self, order: PersonOrder) -> Result<Vec<&Person>>;

    /// All family records in source order
    ///
    /// Display ordering for the marriage report is applied by the driver,
    /// not by the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce the record set.
    fn families(&self) -> Result<Vec<&Family>>;
}

/// Identifies which value a report is prompting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptId {
    /// The query year for the dates report
    Year,
    /// The target surname for the surnames report
    Surname,
}

/// The host's user-input collaborator
pub trait UserPrompt {
    /// Ask the user for a value; `None` means the prompt was cancelled and
    /// the whole report must abort before any output resource is opened.
    fn ask(&self, prompt: PromptId, label: &str) -> Option<String>;
}

/// Template identifiers handed to the display formatter
///
/// The core supplies positional string arguments per template and treats the
/// formatted result as opaque text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Dates report header, default mode; args: `[year]`
    HeaderAlive,
    /// Dates report header, death mode; args: `[year]`
    HeaderDied,
    /// Surnames report header; args: `[surname]`
    HeaderSurname,
    /// Marriages report header; args: `[]`
    HeaderMarriages,
    /// A person's primary name inside a row; args: `[name]`
    NamePrimary,
    /// A person's alias name inside a row; args: `[name]`
    NameAlias,
    /// Dates report row; args: `[id, names, birth, death]`
    PersonRow,
    /// Surnames report row; args: `[id, name]`
    SurnameRow,
    /// Marriages report row; args: `[id, key]`
    MarriageRow,
    /// Report footer; args: `[]`
    Footer,
}

/// The host's display-text formatter
///
/// Owns all presentation (markup, language). The core never inspects the
/// returned text.
pub trait Formatter {
    /// Render `template` with positional `args`
    fn format(&self, template: Template, args: &[&str]) -> String;
}

/// The report output resource
///
/// Opened once at the start of a report, written incrementally, closed
/// exactly once on every exit path. `post_process` runs exactly once after
/// a successful close (e.g. launching a viewer on the written file).
pub trait OutputSink {
    /// Open resource handle
    type Handle;

    /// Open the resource
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be created; the driver treats
    /// this as fatal (nothing useful can happen without a handle).
    fn open(&self) -> Result<Self::Handle>;

    /// Write one chunk of formatted text
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure. The driver logs and counts each
    /// write failure but keeps matching and formatting the remaining
    /// records.
    fn write(&self, handle: &mut Self::Handle, text: &str) -> Result<()>;

    /// Close the resource
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure; this is the driver's final reported
    /// error.
    fn close(&self, handle: Self::Handle) -> Result<()>;

    /// Hook invoked exactly once after a successful close
    ///
    /// # Errors
    ///
    /// Returns an error if the hook fails (reported as the final error).
    fn post_process(&self) -> Result<()> {
        Ok(())
    }
}
