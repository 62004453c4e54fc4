//! Surnames report driver
//!
//! "Which individuals share a given surname?" Every name entry of every
//! person is checked; a female person whose record holds only her maiden
//! name is additionally checked against her partners' surnames. Each
//! matching person produces exactly one row, identified by their own id and
//! name even when the match came through a partner.

use crate::summary::{emit, ReportSummary};
use kinship_core::{
    Error, Formatter, OutputSink, PersonOrder, PromptId, RecordSource, Result, Template,
    UserPrompt,
};
use kinship_query::SurnameResolver;
use tracing::{debug, info};

/// Driver for the surnames report
#[derive(Debug, Clone, Copy, Default)]
pub struct SurnamesReport;

impl SurnamesReport {
    /// Create the driver
    pub fn new() -> Self {
        Self
    }

    /// Run the report end to end
    ///
    /// # Errors
    ///
    /// - [`Error::InputAborted`] if the prompt is cancelled (nothing opened)
    /// - [`Error::Sink`] if the sink cannot be opened, closed, or
    ///   post-processed; individual write failures are logged and counted
    pub fn run<S: RecordSource, O: OutputSink>(
        &self,
        source: &S,
        prompt: &dyn UserPrompt,
        formatter: &dyn Formatter,
        sink: &O,
    ) -> Result<ReportSummary> {
        let Some(surname) = prompt.ask(PromptId::Surname, "Last Name:") else {
            info!(target: "kinship::report", "surnames report aborted at prompt");
            return Err(Error::InputAborted);
        };
        let resolver = SurnameResolver::new(surname);
        let persons = source.persons(PersonOrder::PrimaryName)?;

        let mut summary = ReportSummary::default();
        let mut handle = sink.open()?;
        emit(
            sink,
            &mut handle,
            &formatter.format(Template::HeaderSurname, &[resolver.target()]),
            &mut summary,
        );

        for person in persons {
            summary.examined += 1;
            let Some(attribution) = resolver.resolve(person, source) else {
                continue;
            };
            summary.matched += 1;
            if attribution.via_partner() {
                debug!(
                    target: "kinship::surname",
                    person = %person.id(),
                    matched_on = %attribution.matched_on,
                    "match attributed to original person"
                );
            }
            // One row per top-level person, identified by their own record.
            let row = formatter.format(
                Template::SurnameRow,
                &[attribution.report_as.as_str(), &person.display_name()],
            );
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
            "surnames report finished"
        );
        Ok(summary)
    }
}
