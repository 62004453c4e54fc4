//! Kinship - read-only query engine for genealogical record collections
//!
//! Kinship answers structured questions over an in-memory set of person and
//! family records: who was alive (or died) within a calendar year, who
//! carries a surname directly or through spousal links, and how marriages
//! order by their descriptive key.
//!
//! # Quick Start
//!
//! ```
//! use kinship::{
//!     DatesReport, GenDate, HtmlFormatter, MatchMode, MemorySource, Name,
//!     Person, PresetPrompt, BufferSink, Sex,
//! };
//!
//! let source = MemorySource::new(
//!     vec![Person::new(
//!         "I001",
//!         vec![Name::new("Ada", "Adams")],
//!         Sex::Female,
//!         Some(GenDate::from_year(1900)),
//!         Some(GenDate::from_year(1950)),
//!         vec![],
//!     )],
//!     vec![],
//! )?;
//! let sink = BufferSink::new();
//! let summary = DatesReport::new(MatchMode::AliveDuring).run(
//!     &source,
//!     &PresetPrompt::with_year("1950"),
//!     &HtmlFormatter::new(),
//!     &sink,
//! )?;
//! assert_eq!(summary.matched, 1);
//! # Ok::<(), kinship::Error>(())
//! ```
//!
//! # Architecture
//!
//! The record store, user prompts, display formatting, and output resources
//! are host collaborators reached through the traits in `kinship-core`; the
//! query logic in `kinship-query` is pure over the read-only record set, and
//! the drivers in `kinship-report` orchestrate one report each.

pub use kinship_core::{
    parse_year, Error, Family, FamilyId, Formatter, GenDate, MemorySource, Name, OutputSink,
    Person, PersonId, PersonLookup, PersonOrder, PromptId, RecordSource, Result, Sex, Template,
    UserPrompt,
};
pub use kinship_query::{
    compare_keys, marriage_key, sorted_families, LifespanFilter, MatchAttribution, MatchMode,
    SurnameResolver, YearInterval, PARTNER_DEPTH,
};
pub use kinship_report::{
    BufferSink, DatesReport, FileSink, HtmlFormatter, MarriagesReport, PresetPrompt, ReportConfig,
    ReportSummary, SurnamesReport, CONFIG_FILE_NAME,
};
