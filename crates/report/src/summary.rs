//! Run summaries and shared emission plumbing

use kinship_core::OutputSink;
use tracing::warn;

/// Counters for one report run
///
/// `write_errors` counts sink writes that failed and were skipped; a run
/// with write errors still completes and still returns `Ok(summary)` unless
/// the final close or post-process step fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Records pulled from the source and evaluated
    pub examined: usize,
    /// Records that matched the query
    pub matched: usize,
    /// Chunks successfully written to the sink
    pub written: usize,
    /// Sink writes that failed and were logged
    pub write_errors: usize,
}

/// Write one chunk, logging and counting a failure instead of aborting
pub(crate) fn emit<O: OutputSink>(
    sink: &O,
    handle: &mut O::Handle,
    text: &str,
    summary: &mut ReportSummary,
) {
    match sink.write(handle, text) {
        Ok(()) => summary.written += 1,
        Err(err) => {
            summary.write_errors += 1;
            warn!(target: "kinship::report", error = %err, "report write failed, continuing");
        }
    }
}
