//! Fixed-position composition of each scorecard layout

use super::paint::{PaintCommand, TextStyle};
use super::{Canvas, Layout};
use crate::match_state::{BattingEntry, BowlingEntry, InningsCard, MatchState};
use crate::stats::Rate;
use crate::style::{team_color, StyleProfile};
use crate::{Error, Result};

/// Line advance inside innings tables
const TABLE_LINE_HEIGHT: u32 = 22;

/// A composed scorecard: canvas size plus paint commands in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub canvas: Canvas,
    pub commands: Vec<PaintCommand>,
}

/// Compose `state` into the paint commands of `layout`
pub fn compose(layout: Layout, state: &MatchState, style: &StyleProfile) -> Result<Scene> {
    match layout {
        Layout::Minimal => Ok(minimal(state, style)),
        Layout::Styled => Ok(styled(state, style)),
        Layout::Detailed => Ok(detailed(state, style)),
        Layout::Innings => innings(state, style),
    }
}

/// Background of the styled layout: batting side's colour, else the style default
pub fn styled_background<'a>(state: &MatchState, style: &'a StyleProfile) -> &'a str {
    match state.batting_side() {
        Some(team) => team_color(team, style.background_color),
        None => style.background_color,
    }
}

fn score_line(state: &MatchState) -> String {
    format!("{} ({})", state.score.summary(), state.score.overs_display())
}

fn crr_line(state: &MatchState) -> String {
    format!("CRR: {}", Rate(state.score.run_rate()))
}

fn minimal(state: &MatchState, style: &StyleProfile) -> Scene {
    let text = style.text_color;
    Scene {
        canvas: Layout::Minimal.canvas(),
        commands: vec![
            PaintCommand::Background {
                fill: style.background_color.to_string(),
                opacity: None,
            },
            PaintCommand::text(400, 100, TextStyle::new(28, text).centered(), state.fixture()),
            PaintCommand::text(400, 180, TextStyle::new(48, text).centered().bold(), score_line(state)),
            PaintCommand::text(400, 300, TextStyle::new(24, text).centered(), state.result_text()),
        ],
    }
}

fn styled(state: &MatchState, style: &StyleProfile) -> Scene {
    let text = style.text_color;
    let mut commands = vec![PaintCommand::Background {
        fill: styled_background(state, style).to_string(),
        opacity: Some(0.9),
    }];
    if let Some(tile) = style.pattern {
        commands.push(PaintCommand::Pattern { tile });
    }
    commands.extend([
        PaintCommand::text(400, 50, TextStyle::new(24, text).centered().bold(), style.title),
        PaintCommand::text(400, 100, TextStyle::new(28, text).centered(), state.fixture()),
        PaintCommand::text(400, 200, TextStyle::new(48, text).centered().bold(), score_line(state)),
        PaintCommand::text(400, 250, TextStyle::new(24, style.accent()).centered(), crr_line(state)),
        PaintCommand::text(
            50,
            350,
            TextStyle::new(20, text),
            format!("Man of the Match: {}", state.man_of_match_text()),
        ),
        PaintCommand::text(750, 350, TextStyle::new(20, text).right(), state.result_text()),
    ]);
    Scene {
        canvas: Layout::Styled.canvas(),
        commands,
    }
}

/// `label name stats`, without a trailing space when `stats` is empty
fn player_line(label: &str, name: &str, stats: &str) -> String {
    if stats.is_empty() {
        format!("{} {}", label, name)
    } else {
        format!("{} {} {}", label, name, stats)
    }
}

fn detailed(state: &MatchState, style: &StyleProfile) -> Scene {
    let text = style.text_color;
    let body = || TextStyle::new(18, text);
    let striker = format!("{}*", state.striker());

    let mut commands = vec![
        PaintCommand::Background {
            fill: style.background_color.to_string(),
            opacity: None,
        },
        PaintCommand::text(400, 40, TextStyle::new(20, text).centered().bold(), style.title),
        PaintCommand::text(400, 80, TextStyle::new(24, text).centered(), state.fixture()),
        PaintCommand::text(400, 130, TextStyle::new(36, text).centered().bold(), score_line(state)),
        PaintCommand::text(400, 165, TextStyle::new(20, style.accent()).centered(), crr_line(state)),
        PaintCommand::text(50, 220, body(), player_line("Batting:", &striker, state.striker_stats())),
        PaintCommand::text(
            50,
            250,
            body(),
            player_line("Non-striker:", state.non_striker(), state.non_striker_stats()),
        ),
        PaintCommand::text(50, 300, body(), player_line("Bowling:", state.bowler(), state.bowler_stats_text())),
        PaintCommand::text(50, 350, body(), format!("This Over: {}", state.this_over_text())),
    ];

    if let Some(runs) = state.partnership() {
        commands.push(PaintCommand::text(50, 385, body(), format!("Partnership: {} runs", runs)));
    }
    if let Some(recent) = state.last_five_overs.as_deref() {
        commands.push(PaintCommand::text(750, 385, body().right(), format!("Last 5 overs: {}", recent)));
    }

    if let Some(chase) = state.chase() {
        commands.extend([
            PaintCommand::text(50, 420, body(), format!("Target: {}", chase.target)),
            PaintCommand::text(
                50,
                450,
                TextStyle::new(18, style.accent()),
                format!("Required Rate: {}/over", Rate(chase.required_rate)),
            ),
            PaintCommand::text(
                50,
                480,
                body(),
                format!("Need {} from {} balls", chase.runs_needed, chase.balls_left),
            ),
        ]);
    }

    commands.push(PaintCommand::text(
        400,
        560,
        TextStyle::new(20, text).centered(),
        state.result_text(),
    ));

    Scene {
        canvas: Layout::Detailed.canvas(),
        commands,
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn batting_lines(rows: &[BattingEntry]) -> Vec<String> {
    let mut lines = vec![
        "BATTING".to_string(),
        format!("{:<15} {:>4} {:>4} {:>4} {:>4} {:>7}", "Batter", "R", "B", "4s", "6s", "SR"),
    ];
    lines.extend(rows.iter().map(|b| {
        format!(
            "{:<15} {:>4} {:>4} {:>4} {:>4} {:>7}",
            b.name,
            b.runs,
            b.balls,
            b.fours,
            b.sixes,
            Rate(b.strike_rate()).to_string()
        )
    }));
    lines
}

fn bowling_lines(rows: &[BowlingEntry]) -> Vec<String> {
    let mut lines = vec![
        "BOWLING".to_string(),
        format!("{:<15} {:>4} {:>4} {:>4} {:>4} {:>7}", "Bowler", "O", "M", "R", "W", "ECON"),
    ];
    lines.extend(rows.iter().map(|b| {
        format!(
            "{:<15} {:>4} {:>4} {:>4} {:>4} {:>7}",
            b.name,
            b.overs_display(),
            b.maidens,
            b.runs,
            b.wickets,
            Rate(b.economy()).to_string()
        )
    }));
    lines
}

fn innings_team<'a>(state: &'a MatchState, index: usize, card: &'a InningsCard) -> &'a str {
    match card.team.as_deref() {
        Some(team) => team,
        None if index % 2 == 0 => state.team1.as_str(),
        None => state.team2.as_str(),
    }
}

fn innings(state: &MatchState, style: &StyleProfile) -> Result<Scene> {
    if state.innings.is_empty() {
        return Err(Error::MissingData("innings".to_string()));
    }

    let text = style.text_color;
    let width = Layout::Innings.canvas().width;
    let center = (width / 2) as i32;
    let table = || TextStyle::new(18, text).monospace();

    let mut commands = vec![
        PaintCommand::Background {
            fill: style.background_color.to_string(),
            opacity: None,
        },
        PaintCommand::text(center, 50, TextStyle::new(32, text).centered().bold(), style.title),
        PaintCommand::text(center, 100, TextStyle::new(28, text).centered(), state.fixture()),
    ];

    let mut y: u32 = 150;
    for (i, card) in state.innings.iter().enumerate() {
        commands.push(PaintCommand::text(
            50,
            y as i32,
            TextStyle::new(24, text),
            format!(
                "{} INNINGS ({}: {})",
                ordinal(i + 1),
                innings_team(state, i, card),
                card.score
            ),
        ));
        y += 40;

        let batting = batting_lines(&card.batting);
        let advance = batting.len() as u32 * TABLE_LINE_HEIGHT + 20;
        commands.push(PaintCommand::TextBlock {
            x: 50,
            y: y as i32,
            style: table(),
            line_height: TABLE_LINE_HEIGHT,
            lines: batting,
        });
        y += advance;

        let bowling = bowling_lines(&card.bowling);
        let advance = bowling.len() as u32 * TABLE_LINE_HEIGHT + 40;
        commands.push(PaintCommand::TextBlock {
            x: 50,
            y: y as i32,
            style: table(),
            line_height: TABLE_LINE_HEIGHT,
            lines: bowling,
        });
        y += advance;
    }

    commands.push(PaintCommand::text(
        center,
        (y + 20) as i32,
        TextStyle::new(24, text).centered().bold(),
        state.result_text(),
    ));
    commands.push(PaintCommand::text(
        center,
        (y + 60) as i32,
        TextStyle::new(20, text).centered(),
        format!("Player of the Match: {}", state.man_of_match_text()),
    ));

    let min = Layout::Innings.canvas();
    Ok(Scene {
        canvas: Canvas {
            width,
            height: min.height.max(y + 100),
        },
        commands,
    })
}
