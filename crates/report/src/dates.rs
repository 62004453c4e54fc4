//! Dates report driver
//!
//! "Which individuals were alive during year Y?" (default mode) or "which
//! individuals died in year Y or later?" (death mode). One row per matching
//! person, in primary-name order as supplied by the record source; the
//! driver never re-sorts results.

use crate::summary::{emit, ReportSummary};
use kinship_core::{
    Error, Formatter, GenDate, OutputSink, Person, PersonOrder, PromptId, RecordSource, Result,
    Template, UserPrompt,
};
use kinship_query::{LifespanFilter, MatchMode, YearInterval};
use tracing::{debug, info};

/// Driver for the dates report
#[derive(Debug, Clone, Copy, Default)]
pub struct DatesReport {
    mode: MatchMode,
}

impl DatesReport {
    /// Create a driver in the given match mode
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Run the report end to end
    ///
    /// Flow: prompt for the year, parse it, pull the full record set, open
    /// the sink once, stream header/rows/footer, close, post-process.
    ///
    /// # Errors
    ///
    /// - [`Error::InputAborted`] if the prompt is cancelled (nothing opened)
    /// - [`Error::MalformedDate`] if the year does not parse (nothing opened)
    /// - [`Error::Sink`] if the sink cannot be opened, closed, or
    ///   post-processed; individual write failures are logged and counted
    ///   in the summary instead
    pub fn run<S: RecordSource, O: OutputSink>(
        &self,
        source: &S,
        prompt: &dyn UserPrompt,
        formatter: &dyn Formatter,
        sink: &O,
    ) -> Result<ReportSummary> {
        let Some(year_input) = prompt.ask(PromptId::Year, "Year:") else {
            info!(target: "kinship::report", "dates report aborted at prompt");
            return Err(Error::InputAborted);
        };
        let interval = YearInterval::parse(&year_input)?;
        let filter = LifespanFilter::new(interval, self.mode);
        let persons = source.persons(PersonOrder::PrimaryName)?;

        let mut summary = ReportSummary::default();
        let mut handle = sink.open()?;
        let year_text = interval.year().to_string();
        let header = match self.mode {
            MatchMode::AliveDuring => Template::HeaderAlive,
            MatchMode::DiedInOrAfter => Template::HeaderDied,
        };
        emit(
            sink,
            &mut handle,
            &formatter.format(header, &[&year_text]),
            &mut summary,
        );

        for person in persons {
            summary.examined += 1;
            debug!(target: "kinship::dates", person = %person.id(), "checking lifespan");
            if !filter.matches(person) {
                continue;
            }
            summary.matched += 1;
            let names = name_fragments(person, formatter);
            let birth = display_or_unknown(person.birth());
            let death = display_or_unknown(person.death());
            let row = formatter.format(
                Template::PersonRow,
                &[person.id().as_str(), &names, &birth, &death],
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
            "dates report finished"
        );
        Ok(summary)
    }
}

/// Render a person's name sequence: primary entry first, aliases after,
/// empty entries skipped
fn name_fragments(person: &Person, formatter: &dyn Formatter) -> String {
    let mut out = String::new();
    let mut first = true;
    for name in person.names() {
        let Some(display) = name.display() else {
            continue;
        };
        let template = if first {
            Template::NamePrimary
        } else {
            Template::NameAlias
        };
        out.push_str(&formatter.format(template, &[&display]));
        first = false;
    }
    out
}

fn display_or_unknown(date: Option<&GenDate>) -> String {
    date.map(ToString::to_string)
        .unwrap_or_else(|| "(unknown)".to_string())
}
