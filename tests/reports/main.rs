//! End-to-end report runs over the fixture tree: driver orchestration,
//! matching semantics, attribution, ordering, and error policy all exercised
//! through the public facade.

#[path = "../common/mod.rs"]
mod common;

use common::{assert_ordered, sample_source, BEA, CARL, JOHN, MARY, PETE, UNNAMED};
use kinship::{
    BufferSink, DatesReport, Error, FileSink, HtmlFormatter, MarriagesReport, MatchMode,
    PresetPrompt, ReportConfig, SurnamesReport,
};

// ============================================================================
// Dates report
// ============================================================================

#[test]
fn dates_report_alive_during_1950() {
    let source = sample_source();
    let sink = BufferSink::new();
    let summary = DatesReport::new(MatchMode::AliveDuring)
        .run(
            &source,
            &PresetPrompt::with_year("1950"),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap();

    assert_eq!(summary.examined, 6);
    assert_eq!(summary.matched, 4); // John, Mary, Pete, Bea
    assert_eq!(summary.write_errors, 0);

    let body = sink.contents();
    assert!(body.contains(&format!("[{}]", JOHN)));
    assert!(body.contains(&format!("[{}]", MARY)));
    // Carl has a death date but no birth date: excluded unconditionally.
    assert!(!body.contains(&format!("[{}]", CARL)));
    assert!(!body.contains(&format!("[{}]", UNNAMED)));
    // Rows follow the source's primary-name order.
    assert_ordered(
        &body,
        &[
            &format!("[{}]", BEA),  // Bea Brown
            &format!("[{}]", JOHN), // John Smith
            &format!("[{}]", MARY), // Mary Jones
            &format!("[{}]", PETE), // Pete Potter
        ],
    );
    // Mary's alias is rendered after her primary name; her full birth date
    // is displayed and her open-ended death shows as unknown.
    assert!(body.contains("<b>Mary Jones</b>, also Mary Smith"));
    assert!(body.contains("born 15 Jun 1905"));
    assert!(body.contains("died (unknown)"));
}

#[test]
fn dates_report_concrete_scenario_all_modes() {
    // Person born 1900, died 1950 (John in the fixture).
    let source = sample_source();
    let cases = [
        ("1950", MatchMode::AliveDuring, true),
        ("1951", MatchMode::AliveDuring, false),
        ("1950", MatchMode::DiedInOrAfter, true),
        ("1949", MatchMode::DiedInOrAfter, true),
        ("1951", MatchMode::DiedInOrAfter, false),
    ];
    for (year, mode, expect_john) in cases {
        let sink = BufferSink::new();
        DatesReport::new(mode)
            .run(
                &source,
                &PresetPrompt::with_year(year),
                &HtmlFormatter::new(),
                &sink,
            )
            .unwrap();
        let has_john = sink.contents().contains(&format!("[{}]", JOHN));
        assert_eq!(has_john, expect_john, "year {} mode {:?}", year, mode);
    }
}

#[test]
fn dates_report_death_mode_requires_death_date() {
    let source = sample_source();
    let sink = BufferSink::new();
    let summary = DatesReport::new(MatchMode::DiedInOrAfter)
        .run(
            &source,
            &PresetPrompt::with_year("1950"),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap();
    // Only John died on record in 1950 or later with a known birth;
    // Carl's death is recorded but his missing birth excludes him.
    assert_eq!(summary.matched, 1);
    assert!(sink.contents().contains(&format!("[{}]", JOHN)));
    assert!(!sink.contents().contains(&format!("[{}]", CARL)));
}

#[test]
fn dates_report_cancelled_prompt_writes_nothing() {
    let source = sample_source();
    let sink = BufferSink::new();
    let err = DatesReport::default()
        .run(
            &source,
            &PresetPrompt::cancelled(),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap_err();
    assert!(matches!(err, Error::InputAborted));
    assert_eq!(sink.contents(), "");
}

#[test]
fn dates_report_malformed_year_aborts_whole_query() {
    let source = sample_source();
    let sink = BufferSink::new();
    for bad in ["nineteen fifty", "1950.0", ""] {
        let err = DatesReport::default()
            .run(
                &source,
                &PresetPrompt::with_year(bad),
                &HtmlFormatter::new(),
                &sink,
            )
            .unwrap_err();
        assert!(matches!(err, Error::MalformedDate { .. }), "{:?}", bad);
        assert_eq!(sink.contents(), "");
    }
}

#[test]
fn dates_report_empty_body_is_valid() {
    let source = sample_source();
    let sink = BufferSink::new();
    let summary = DatesReport::default()
        .run(
            &source,
            &PresetPrompt::with_year("1850"),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap();
    assert_eq!(summary.matched, 0);
    let body = sink.contents();
    assert!(body.starts_with("<html>"));
    assert!(body.ends_with("</body></html>\n"));
}

#[test]
fn dates_report_to_file_sink() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        viewer: None,
        output_dir: Some(dir.path().to_path_buf()),
    };
    let source = sample_source();
    let sink = FileSink::new(&config, "dates");
    DatesReport::default()
        .run(
            &source,
            &PresetPrompt::with_year("1950"),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap();
    let body = std::fs::read_to_string(sink.path()).unwrap();
    assert!(body.contains(&format!("[{}]", JOHN)));
    assert!(body.ends_with("</body></html>\n"));
}

// ============================================================================
// Surnames report
// ============================================================================

#[test]
fn surnames_report_direct_and_alias_matches() {
    let source = sample_source();
    let sink = BufferSink::new();
    let summary = SurnamesReport::new()
        .run(
            &source,
            &PresetPrompt::with_surname("Smith"),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap();
    // John directly, Mary through her married alias.
    assert_eq!(summary.matched, 2);
    let body = sink.contents();
    assert!(body.contains(&format!("[{}] John Smith", JOHN)));
    // Mary's row carries her own id and primary (maiden) display name.
    assert!(body.contains(&format!("[{}] Mary Jones", MARY)));
}

#[test]
fn surnames_report_partner_match_attributed_to_original() {
    let source = sample_source();
    let sink = BufferSink::new();
    let summary = SurnamesReport::new()
        .run(
            &source,
            &PresetPrompt::with_surname("Potter"),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap();
    // Pete directly; Mary via her partner Pete, reported as herself.
    assert_eq!(summary.matched, 2);
    let body = sink.contents();
    assert!(body.contains(&format!("[{}] Pete Potter", PETE)));
    assert!(body.contains(&format!("[{}] Mary Jones", MARY)));
    assert!(!body.contains(&format!("[{}] Pete", MARY)));
}

#[test]
fn surnames_report_male_never_matches_via_partner() {
    let source = sample_source();
    let sink = BufferSink::new();
    let summary = SurnamesReport::new()
        .run(
            &source,
            &PresetPrompt::with_surname("Brown"),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap();
    // Bea directly. Carl is male, so his Brown partner is never consulted.
    assert_eq!(summary.matched, 1);
    assert!(sink.contents().contains(&format!("[{}] Bea Brown", BEA)));
    assert!(!sink.contents().contains(&format!("[{}]", CARL)));
}

#[test]
fn surnames_report_case_sensitive() {
    let source = sample_source();
    let sink = BufferSink::new();
    let summary = SurnamesReport::new()
        .run(
            &source,
            &PresetPrompt::with_surname("smith"),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap();
    assert_eq!(summary.matched, 0);
}

#[test]
fn surnames_report_cancelled_prompt_writes_nothing() {
    let source = sample_source();
    let sink = BufferSink::new();
    let err = SurnamesReport::new()
        .run(
            &source,
            &PresetPrompt::cancelled(),
            &HtmlFormatter::new(),
            &sink,
        )
        .unwrap_err();
    assert!(matches!(err, Error::InputAborted));
    assert_eq!(sink.contents(), "");
}

// ============================================================================
// Marriages report
// ============================================================================

#[test]
fn marriages_report_sorted_and_filtered() {
    let source = sample_source();
    let sink = BufferSink::new();
    let summary = MarriagesReport::new()
        .run(&source, &HtmlFormatter::new(), &sink)
        .unwrap();
    assert_eq!(summary.examined, 4);
    assert_eq!(summary.matched, 3); // the unnamed union F003 is excluded
    let body = sink.contents();
    assert_ordered(
        &body,
        &[
            "[F004] Brown/Clark",
            "[F002] Potter/Jones",
            "[F001] Smith/Jones",
        ],
    );
    assert!(!body.contains("F003"));
}
