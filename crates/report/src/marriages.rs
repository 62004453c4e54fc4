//! Marriages report driver
//!
//! Enumerates all named unions sorted by their derived descriptive key
//! (partner surnames joined with `/`). Unnamed unions are excluded entirely.
//! This report takes no user input, so it has no abort path before the sink
//! opens.

use crate::summary::{emit, ReportSummary};
use kinship_core::{Formatter, OutputSink, RecordSource, Result, Template};
use kinship_query::sorted_families;
use tracing::info;

/// Driver for the marriages report
#[derive(Debug, Clone, Copy, Default)]
pub struct MarriagesReport;

impl MarriagesReport {
    /// Create the driver
    pub fn new() -> Self {
        Self
    }

    /// Run the report end to end
    ///
    /// # Errors
    ///
    /// Returns [`kinship_core::Error::Sink`] if the sink cannot be opened,
    /// closed, or post-processed; individual write failures are logged and
    /// counted in the summary.
    pub fn run<S: RecordSource, O: OutputSink>(
        &self,
        source: &S,
        formatter: &dyn Formatter,
        sink: &O,
    ) -> Result<ReportSummary> {
        let families = source.families()?;
        let sorted = sorted_families(&families, source);

        let mut summary = ReportSummary {
            examined: families.len(),
            matched: sorted.len(),
            ..ReportSummary::default()
        };
        let mut handle = sink.open()?;
        emit(
            sink,
            &mut handle,
            &formatter.format(Template::HeaderMarriages, &[]),
            &mut summary,
        );

        for (key, family) in &sorted {
            let row = formatter.format(Template::MarriageRow, &[family.id().as_str(), key]);
            emit(sink, &mut handle, &row, &mut summary);
        }

        emit(
            sink,
            &mut handle,
            &formatter.format(Template::Footer, &[]),
            &mut summary,
        );
        sink.close(handle)?;
        sink.post_process()?;
        info!(
            target: "kinship::report",
            examined = summary.examined,
            matched = summary.matched,
            "marriages report finished"
        );
        Ok(summary)
    }
}
