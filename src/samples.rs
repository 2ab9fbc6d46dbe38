//! Hardcoded sample matches for manual verification

use crate::match_state::{
    BatterFigures, BatterPair, BattingEntry, BowlingEntry, CreaseFigures, InningsCard, MatchState, Score,
};
use crate::rendering::Layout;
use crate::renderer::RenderRequest;

fn batter(name: &str, runs: u32, balls: u32, fours: u32, sixes: u32) -> BattingEntry {
    BattingEntry {
        name: name.to_string(),
        runs,
        balls,
        fours,
        sixes,
    }
}

fn bowler(name: &str, overs: u32, maidens: u32, runs: u32, wickets: u32) -> BowlingEntry {
    BowlingEntry {
        name: name.to_string(),
        overs,
        balls: 0,
        maidens,
        runs,
        wickets,
    }
}

/// PSL match in its 16th over, with live batsmen and bowler
pub fn psl_live() -> MatchState {
    MatchState {
        batting_team: Some("Karachi Kings".into()),
        current_batsmen: Some(BatterPair {
            striker: Some("Babar Azam".into()),
            non_striker: Some("Mohammad Rizwan".into()),
        }),
        batsmen_stats: Some(BatterPair {
            striker: Some("72(48)".into()),
            non_striker: Some("45(32)".into()),
        }),
        batsmen_figures: Some(CreaseFigures {
            striker: BatterFigures { runs: 72, balls: 48 },
            non_striker: BatterFigures { runs: 45, balls: 32 },
        }),
        last_five_overs: Some("52/1".into()),
        current_bowler: Some("Shaheen Afridi".into()),
        bowler_stats: Some("3-0-28-2".into()),
        this_over: Some("1 W 4 . 2 1".into()),
        ..MatchState::new("Karachi Kings", "Peshawar Zalmi", Score::new(185, 4, 15, 2))
    }
}

/// Finished Pakistan vs India T20I with both innings
pub fn pakistan_india() -> MatchState {
    MatchState {
        man_of_match: Some("Babar Azam".into()),
        result: Some("Pakistan won by 3 runs".into()),
        innings: vec![
            InningsCard {
                team: None,
                score: "185/4 (15.2 overs)".into(),
                batting: vec![
                    batter("Babar Azam", 82, 48, 8, 3),
                    batter("M Rizwan", 45, 28, 4, 2),
                    batter("Iftikhar Ahmed", 35, 15, 2, 4),
                ],
                bowling: vec![bowler("B Kumar", 4, 0, 42, 2), bowler("A Patel", 3, 0, 32, 2)],
            },
            InningsCard {
                team: None,
                score: "182/7 (15.2 overs)".into(),
                batting: vec![batter("KL Rahul", 55, 32, 6, 2), batter("V Kohli", 48, 28, 4, 3)],
                bowling: vec![
                    bowler("Shaheen Afridi", 4, 1, 28, 2),
                    bowler("Haris Rauf", 3, 0, 35, 1),
                ],
            },
        ],
        ..MatchState::new("Pakistan", "India", Score::new(185, 4, 15, 2))
    }
}

/// India chasing against Australia in the second innings
pub fn india_chase() -> MatchState {
    MatchState {
        batting_team: Some("India".into()),
        current_innings: Some(2),
        target: Some(187),
        max_overs: Some(20),
        current_batsmen: Some(BatterPair {
            striker: Some("V Kohli".into()),
            non_striker: Some("H Pandya".into()),
        }),
        current_bowler: Some("M Starc".into()),
        ..MatchState::new("India", "Australia", Score::new(150, 4, 17, 0))
    }
}

/// Sample matches with the selectors used to render them
pub fn all() -> Vec<(&'static str, MatchState, RenderRequest)> {
    vec![
        ("psl-styled", psl_live(), RenderRequest::tournament("PSL")),
        (
            "psl-detailed",
            psl_live(),
            RenderRequest::tournament("PSL").with_layout(Layout::Detailed),
        ),
        (
            "t20i-styled",
            india_chase(),
            RenderRequest::tournament("INTERNATIONAL").with_format("t20"),
        ),
        (
            "t20i-chase",
            india_chase(),
            RenderRequest::tournament("INTERNATIONAL")
                .with_format("t20")
                .with_layout(Layout::Detailed),
        ),
        (
            "minimal",
            pakistan_india(),
            RenderRequest::default().with_layout(Layout::Minimal),
        ),
        (
            "innings",
            pakistan_india(),
            RenderRequest::default().with_layout(Layout::Innings),
        ),
    ]
}
