//! Match state consumed by the renderer.
//!
//! A [`MatchState`] is built fresh for each render and never mutated by the
//! crate. Optional fields carry display defaults ("TBD", "Match in Progress",
//! empty over) through accessor methods instead of failing.

use crate::stats;
use crate::{Error, Result};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// Placeholder for an unset player name
pub const UNSET_PLAYER: &str = "TBD";
/// Placeholder for an unset result line
pub const RESULT_IN_PROGRESS: &str = "Match in Progress";

/// Keys that must be present (and non-null) in match JSON
const REQUIRED_FIELDS: &[&str] = &[
    "team1",
    "team2",
    "score",
    "score.runs",
    "score.wickets",
    "score.overs",
    "score.balls",
];

/// Innings progress of the batting side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Score {
    pub runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls: u32,
}

impl Score {
    pub fn new(runs: u32, wickets: u32, overs: u32, balls: u32) -> Self {
        Self {
            runs,
            wickets,
            overs,
            balls,
        }
    }

    /// `runs/wickets`
    pub fn summary(&self) -> String {
        format!("{}/{}", self.runs, self.wickets)
    }

    /// `overs.balls`
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.overs, self.balls)
    }

    pub fn run_rate(&self) -> f64 {
        stats::run_rate(self.runs, self.overs, self.balls)
    }
}

/// Striker / non-striker pair, used both for names and for stat strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BatterPair {
    #[serde(default)]
    pub striker: Option<String>,
    #[serde(default, alias = "nonStriker")]
    pub non_striker: Option<String>,
}

/// Runs and balls faced by one batter at the crease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct BatterFigures {
    pub runs: u32,
    #[serde(default)]
    pub balls: u32,
}

/// Numeric figures of the two batters at the crease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct CreaseFigures {
    #[serde(default)]
    pub striker: BatterFigures,
    #[serde(default, alias = "nonStriker")]
    pub non_striker: BatterFigures,
}

/// One row of an innings batting table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BattingEntry {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    #[serde(default)]
    pub fours: u32,
    #[serde(default)]
    pub sixes: u32,
}

impl BattingEntry {
    pub fn strike_rate(&self) -> f64 {
        stats::strike_rate(self.runs, self.balls)
    }
}

/// One row of an innings bowling table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BowlingEntry {
    pub name: String,
    pub overs: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
}

impl BowlingEntry {
    pub fn economy(&self) -> f64 {
        stats::economy(self.runs, self.overs, self.balls)
    }

    pub fn overs_display(&self) -> String {
        if self.balls == 0 {
            self.overs.to_string()
        } else {
            format!("{}.{}", self.overs, self.balls)
        }
    }
}

/// A completed or in-progress innings for the full scorecard layout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InningsCard {
    /// Batting side; defaults to team1 for the first innings, team2 otherwise
    #[serde(default)]
    pub team: Option<String>,
    /// Free-text innings total, e.g. `185/4 (15.2 overs)`
    pub score: String,
    #[serde(default)]
    pub batting: Vec<BattingEntry>,
    #[serde(default)]
    pub bowling: Vec<BowlingEntry>,
}

/// Everything a scorecard can show about a match
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MatchState {
    pub team1: String,
    pub team2: String,
    #[serde(default, alias = "battingTeam")]
    pub batting_team: Option<String>,
    /// 1 or 2; picks the batting side when `batting_team` is unset
    #[serde(default, alias = "currentInnings")]
    pub current_innings: Option<u8>,
    pub score: Score,
    #[serde(default, alias = "matchResult", alias = "match_result", alias = "status")]
    pub result: Option<String>,
    #[serde(
        default,
        alias = "manOfMatch",
        alias = "manOfTheMatch",
        alias = "man_of_the_match",
        alias = "playerOfMatch",
        alias = "player_of_match"
    )]
    pub man_of_match: Option<String>,
    #[serde(default, alias = "currentBatsmen")]
    pub current_batsmen: Option<BatterPair>,
    #[serde(default, alias = "current_batsmen_stats", alias = "currentBatsmenStats")]
    pub batsmen_stats: Option<BatterPair>,
    /// Numeric crease figures, used for the partnership
    #[serde(default, alias = "batsmenFigures")]
    pub batsmen_figures: Option<CreaseFigures>,
    #[serde(default, alias = "currentBowler")]
    pub current_bowler: Option<String>,
    #[serde(default, alias = "current_bowler_stats", alias = "currentBowlerStats")]
    pub bowler_stats: Option<String>,
    #[serde(default, alias = "thisOver")]
    pub this_over: Option<String>,
    /// Free-text summary of the last five overs, e.g. `52/1`
    #[serde(default, alias = "lastFiveOvers")]
    pub last_five_overs: Option<String>,
    #[serde(default)]
    pub target: Option<u32>,
    #[serde(default, alias = "maxOvers")]
    pub max_overs: Option<u32>,
    #[serde(default)]
    pub innings: Vec<InningsCard>,
}

impl MatchState {
    pub fn new(team1: impl Into<String>, team2: impl Into<String>, score: Score) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
            score,
            ..Default::default()
        }
    }

    /// Parse match JSON, reporting absent required keys as [`Error::MissingData`]
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|path| lookup(&value, path).is_none()) {
            return Err(Error::MissingData((*missing).to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Team currently batting, if known
    pub fn batting_side(&self) -> Option<&str> {
        if let Some(team) = self.batting_team.as_deref() {
            return Some(team);
        }
        match self.current_innings {
            Some(1) => Some(self.team1.as_str()),
            Some(2) => Some(self.team2.as_str()),
            _ => None,
        }
    }

    /// `team1 vs team2`
    pub fn fixture(&self) -> String {
        format!("{} vs {}", self.team1, self.team2)
    }

    pub fn result_text(&self) -> &str {
        self.result.as_deref().unwrap_or(RESULT_IN_PROGRESS)
    }

    pub fn man_of_match_text(&self) -> &str {
        self.man_of_match.as_deref().unwrap_or(UNSET_PLAYER)
    }

    pub fn striker(&self) -> &str {
        self.current_batsmen
            .as_ref()
            .and_then(|b| b.striker.as_deref())
            .unwrap_or(UNSET_PLAYER)
    }

    pub fn non_striker(&self) -> &str {
        self.current_batsmen
            .as_ref()
            .and_then(|b| b.non_striker.as_deref())
            .unwrap_or(UNSET_PLAYER)
    }

    pub fn striker_stats(&self) -> &str {
        self.batsmen_stats
            .as_ref()
            .and_then(|b| b.striker.as_deref())
            .unwrap_or("")
    }

    pub fn non_striker_stats(&self) -> &str {
        self.batsmen_stats
            .as_ref()
            .and_then(|b| b.non_striker.as_deref())
            .unwrap_or("")
    }

    pub fn bowler(&self) -> &str {
        self.current_bowler.as_deref().unwrap_or(UNSET_PLAYER)
    }

    pub fn bowler_stats_text(&self) -> &str {
        self.bowler_stats.as_deref().unwrap_or("")
    }

    pub fn this_over_text(&self) -> &str {
        self.this_over.as_deref().unwrap_or("")
    }

    /// Current partnership: runs of the striker plus the non-striker
    pub fn partnership(&self) -> Option<u32> {
        self.batsmen_figures
            .map(|f| f.striker.runs.saturating_add(f.non_striker.runs))
    }

    /// Required rate and balls left, when a chase target is known
    pub fn chase(&self) -> Option<Chase> {
        let target = self.target?;
        let max_overs = self.max_overs?;
        let balls_left = stats::remaining_balls(max_overs, self.score.overs, self.score.balls)?;
        let rate = stats::required_run_rate(target, self.score.runs, max_overs, self.score.overs, self.score.balls)?;
        Some(Chase {
            target,
            runs_needed: target.saturating_sub(self.score.runs),
            balls_left,
            required_rate: rate,
        })
    }

    /// Log values outside cricket's usual ranges. Nothing is rejected.
    pub fn warn_unusual(&self) {
        if self.score.balls > 5 {
            warn!("Ball count {} exceeds an over (0-5)", self.score.balls);
        }
        if self.score.wickets > 10 {
            warn!("Wicket count {} exceeds 10", self.score.wickets);
        }
    }
}

/// Second-innings chase equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chase {
    pub target: u32,
    pub runs_needed: u32,
    pub balls_left: u32,
    pub required_rate: f64,
}

fn lookup<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.')
        .try_fold(value, |v, key| v.get(key))
        .filter(|v| !v.is_null())
}
