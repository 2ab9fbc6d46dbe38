//! Integration tests for the scorecard renderer

use chrono::{NaiveDate, NaiveDateTime};
use scorecard::output::FixedClock;
use scorecard::{
    Error, Layout, MatchState, RenderRequest, RendererConfig, Score, ScorecardRenderer,
};
use std::fs;
use std::path::Path;

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 17)
        .unwrap()
        .and_hms_opt(19, 30, 5)
        .unwrap()
}

fn renderer_in(dir: &Path) -> ScorecardRenderer<FixedClock> {
    let cfg = RendererConfig {
        output_dir: dir.to_path_buf(),
        ..Default::default()
    };
    ScorecardRenderer::with_clock(cfg, FixedClock(fixed_time()))
}

fn fixture(name: &str) -> MatchState {
    let raw = fs::read_to_string(format!("tests/fixtures/{}", name)).expect("read fixture");
    MatchState::from_json(&raw).expect("valid fixture")
}

#[test]
fn default_tournament_scorecard_is_written() {
    let tmp = tempfile::tempdir().unwrap();
    let state = MatchState::new("Pakistan", "India", Score::new(185, 4, 15, 2));

    let artifact = renderer_in(tmp.path())
        .generate(&state, &RenderRequest::default())
        .expect("render failed");

    assert!(artifact.path.exists());
    let written = fs::read_to_string(&artifact.path).unwrap();
    assert!(written.contains("185/4 (15"));
    assert!(written.contains("Pakistan vs India"));
    assert!(written.contains("ICC Men's T20I"));
}

#[test]
fn international_batting_team_colour() {
    let tmp = tempfile::tempdir().unwrap();
    let mut state = MatchState::new("India", "Australia", Score::new(120, 2, 14, 1));
    state.batting_team = Some("India".into());

    let request = RenderRequest::tournament("INTERNATIONAL").with_format("t20");
    let artifact = renderer_in(tmp.path()).generate(&state, &request).unwrap();

    assert!(artifact
        .document
        .as_str()
        .contains(r##"<rect width="100%" height="100%" fill="#0033A0" opacity="0.9"/>"##));
}

#[test]
fn psl_team_colour_overrides_tournament_default() {
    let tmp = tempfile::tempdir().unwrap();
    let mut state = MatchState::new("Quetta Gladiators", "Multan Sultans", Score::new(98, 3, 11, 4));
    state.batting_team = Some("Quetta Gladiators".into());

    let artifact = renderer_in(tmp.path())
        .generate(&state, &RenderRequest::tournament("PSL"))
        .unwrap();
    let svg = artifact.document.as_str();

    assert!(svg.contains(r##"fill="#652D90""##));
    assert!(!svg.contains(r##"fill="#01411C""##));
}

#[test]
fn zero_overs_render_zero_run_rate() {
    let tmp = tempfile::tempdir().unwrap();
    let state = MatchState::new("Pakistan", "India", Score::new(0, 0, 0, 0));

    let artifact = renderer_in(tmp.path())
        .generate(&state, &RenderRequest::default())
        .unwrap();

    assert!(artifact.document.as_str().contains("CRR: 0.00"));
}

#[test]
fn omitted_optional_fields_render_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let state = MatchState::new("Pakistan", "India", Score::new(10, 0, 1, 0));
    let renderer = renderer_in(tmp.path());

    let styled = renderer.render(&state, &RenderRequest::default()).unwrap();
    assert!(styled.as_str().contains("Man of the Match: TBD"));
    assert!(styled.as_str().contains(">Match in Progress</text>"));

    let detailed = renderer
        .render(&state, &RenderRequest::default().with_layout(Layout::Detailed))
        .unwrap();
    assert!(detailed.as_str().contains(">Batting: TBD*</text>"));
    assert!(detailed.as_str().contains(">Non-striker: TBD</text>"));
    assert!(detailed.as_str().contains(">Bowling: TBD</text>"));
    assert!(detailed.as_str().contains(">This Over: </text>"));
}

#[test]
fn detailed_live_state_from_json_fixture() {
    let tmp = tempfile::tempdir().unwrap();
    let state = fixture("psl_live.json");

    let doc = renderer_in(tmp.path())
        .render(
            &state,
            &RenderRequest::tournament("PSL").with_layout(Layout::Detailed),
        )
        .unwrap();
    let svg = doc.as_str();

    assert!(svg.contains(">Batting: Babar Azam* 72(48)</text>"));
    assert!(svg.contains(">Non-striker: Mohammad Rizwan 45(32)</text>"));
    assert!(svg.contains(">Bowling: Shaheen Afridi 3-0-28-2</text>"));
    assert!(svg.contains(">This Over: 1 W 4 . 2 1</text>"));
    assert!(svg.contains(">Partnership: 117 runs</text>"));
    assert!(svg.contains(">Last 5 overs: 52/1</text>"));
    // detailed layout keeps the tournament background
    assert!(svg.contains(r##"fill="#01411C""##));
}

#[test]
fn innings_layout_from_json_fixture() {
    let tmp = tempfile::tempdir().unwrap();
    let state = fixture("detailed_innings.json");

    let doc = renderer_in(tmp.path())
        .render(&state, &RenderRequest::default().with_layout(Layout::Innings))
        .unwrap();
    let svg = doc.as_str();

    assert!(svg.contains(">1st INNINGS (Pakistan: 185/4 (15.2 overs))</text>"));
    assert!(svg.contains(">2nd INNINGS (India: 182/7 (15.2 overs))</text>"));
    assert!(svg.contains("Player of the Match: Babar Azam (82 off 48)"));
    assert!(svg.contains("Shaheen Afridi     4    1   28    2    7.00"));
    assert!(doc.height >= 1200);
}

#[test]
fn markup_in_names_is_escaped() {
    let tmp = tempfile::tempdir().unwrap();
    let state = MatchState::new("Kings & <Co>", "India", Score::default());

    let doc = renderer_in(tmp.path())
        .render(&state, &RenderRequest::default())
        .unwrap();

    assert!(doc.as_str().contains("Kings &amp; &lt;Co&gt; vs India"));
}

#[test]
fn escaping_can_be_disabled() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = RendererConfig {
        output_dir: tmp.path().to_path_buf(),
        escape_text: false,
        ..Default::default()
    };
    let state = MatchState::new("A & B", "C", Score::default());

    let doc = ScorecardRenderer::with_clock(cfg, FixedClock(fixed_time()))
        .render(&state, &RenderRequest::default())
        .unwrap();

    assert!(doc.as_str().contains(">A & B vs C</text>"));
}

#[test]
fn repeated_renders_are_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let renderer = renderer_in(tmp.path());
    let state = fixture("psl_live.json");
    let request = RenderRequest::tournament("PSL");

    let first = renderer.generate(&state, &request).unwrap();
    let second = renderer.generate(&state, &request).unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(first.document, second.document);
    assert_eq!(fs::read(&second.path).unwrap(), second.document.content.as_bytes());
}

#[test]
fn filename_follows_timestamp_pattern() {
    let tmp = tempfile::tempdir().unwrap();
    let state = MatchState::new("A", "B", Score::default());

    let artifact = renderer_in(tmp.path())
        .generate(&state, &RenderRequest::default())
        .unwrap();

    assert_eq!(
        artifact.path.file_name().unwrap().to_str().unwrap(),
        "scorecard_20240217_193005.svg"
    );
}

#[test]
fn missing_required_field_fails_before_writing() {
    let err = MatchState::from_json(r#"{"team1": "Pakistan", "team2": "India"}"#).unwrap_err();
    assert!(matches!(err, Error::MissingData(ref f) if f == "score"));
}

#[test]
fn invalid_format_for_international_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let state = MatchState::new("A", "B", Score::default());

    let err = renderer_in(tmp.path())
        .generate(&state, &RenderRequest::tournament("INTERNATIONAL").with_format("hundred"))
        .unwrap_err();

    assert!(matches!(err, Error::InvalidFormat { .. }));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn convenience_entry_point_writes_under_output() {
    // writes relative to the working directory
    let state = MatchState::new("Pakistan", "India", Score::new(185, 4, 15, 2));
    let path = scorecard::generate_scorecard(&state, Some("IPL"), None).unwrap();
    assert!(path.starts_with("output"));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("scorecard_") && name.ends_with(".svg"));
    fs::remove_file(&path).unwrap();
    // only succeeds when no other file is left in output/
    let _ = fs::remove_dir("output");
}
