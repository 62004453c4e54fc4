//! Report drivers for kinship
//!
//! One driver per query type, each a thin orchestration over the query
//! crate: obtain the ordered record set once, evaluate every record, format
//! positive results through the injected [`Formatter`], and stream them to
//! the [`OutputSink`] — opened once, closed exactly once, post-processed
//! after a successful close.
//!
//! [`Formatter`]: kinship_core::Formatter
//! [`OutputSink`]: kinship_core::OutputSink

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dates;
pub mod html;
pub mod marriages;
pub mod prompt;
pub mod sink;
mod summary;
pub mod surnames;

pub use config::{ReportConfig, CONFIG_FILE_NAME};
pub use dates::DatesReport;
pub use html::HtmlFormatter;
pub use marriages::MarriagesReport;
pub use prompt::PresetPrompt;
pub use sink::{BufferSink, FileSink};
pub use summary::ReportSummary;
pub use surnames::SurnamesReport;
