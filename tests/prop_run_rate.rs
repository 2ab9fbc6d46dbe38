use proptest::prelude::*;
use scorecard::rendering::layout::styled_background;
use scorecard::stats::{run_rate, Rate};
use scorecard::style::{resolve_style, TEAM_COLORS};
use scorecard::{MatchState, Score};

proptest! {
    #[test]
    fn run_rate_never_faults_and_is_zero_before_first_ball(runs in any::<u32>()) {
        prop_assert_eq!(run_rate(runs, 0, 0), 0.0);
        prop_assert_eq!(Rate(run_rate(runs, 0, 0)).to_string(), "0.00");
    }

    #[test]
    fn run_rate_matches_fractional_overs(runs in 0u32..1000, overs in 0u32..100, balls in 0u32..6) {
        prop_assume!(overs > 0 || balls > 0);
        let expected = f64::from(runs) / (f64::from(overs) + f64::from(balls) / 6.0);
        let rr = run_rate(runs, overs, balls);
        prop_assert!((rr - expected).abs() < 1e-9);
        prop_assert!(rr >= 0.0);

        let shown = Rate(rr).to_string();
        let (_, decimals) = shown.split_once('.').expect("decimal point");
        prop_assert_eq!(decimals.len(), 2);
    }

    #[test]
    fn registered_teams_set_background(idx in 0usize..TEAM_COLORS.len(), tournament in prop::sample::select(vec!["PSL", "IPL", "BBL", "INTERNATIONAL"])) {
        let (team, color) = TEAM_COLORS[idx];
        let style = resolve_style(Some(tournament), None).unwrap();
        let mut state = MatchState::new(team, "Opposition", Score::default());
        state.batting_team = Some(team.to_string());
        prop_assert_eq!(styled_background(&state, style), color);
    }

    #[test]
    fn unregistered_teams_keep_style_background(team in "[a-z ]{1,20}") {
        prop_assume!(!TEAM_COLORS.iter().any(|(t, _)| *t == team));
        let style = resolve_style(Some("IPL"), None).unwrap();
        let mut state = MatchState::new(team.clone(), "Opposition", Score::default());
        state.batting_team = Some(team);
        prop_assert_eq!(styled_background(&state, style), style.background_color);
    }
}
