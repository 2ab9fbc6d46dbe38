//! Team colours taken from the sides' playing kits

use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Registered team colours, exact team name to colour
pub const TEAM_COLORS: &[(&str, &str)] = &[
    // PSL
    ("Karachi Kings", "#0085CA"),
    ("Peshawar Zalmi", "#FDB913"),
    ("Lahore Qalandars", "#00A651"),
    ("Islamabad United", "#ED1B24"),
    ("Quetta Gladiators", "#652D90"),
    ("Multan Sultans", "#00B7EB"),
    // BPL
    ("Rangpur Riders", "#E31837"),
    ("Dhaka Dominators", "#1E88E5"),
    // BBL
    ("Perth Scorchers", "#F7941D"),
    ("Melbourne Stars", "#1A825C"),
    ("Sydney Sixers", "#FF69B4"),
    // International
    ("India", "#0033A0"),
    ("Australia", "#FFD700"),
    ("England", "#1EA5DC"),
    ("South Africa", "#007A4D"),
    ("New Zealand", "#000000"),
    ("Pakistan", "#01411C"),
    ("West Indies", "#7B0041"),
    ("Sri Lanka", "#1B4A9C"),
    ("Bangladesh", "#006A4E"),
    ("Afghanistan", "#0066B3"),
];

static TEAM_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, &'static str> {
    TEAM_INDEX.get_or_init(|| TEAM_COLORS.iter().copied().collect())
}

/// Colour registered for `team`, or `fallback` when the name is unknown.
///
/// Matching is exact: no trimming, no case folding.
pub fn team_color<'a>(team: &str, fallback: &'a str) -> &'a str {
    match index().get(team) {
        Some(color) => color,
        None => {
            debug!("No registered colour for team '{}', using {}", team, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_team_overrides_background() {
        assert_eq!(team_color("Quetta Gladiators", "#01411C"), "#652D90");
        assert_eq!(team_color("India", "#1F2937"), "#0033A0");
    }

    #[test]
    fn unknown_team_falls_back() {
        assert_eq!(team_color("Mumbai Indians", "#1A237E"), "#1A237E");
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(team_color("india", "#111111"), "#111111");
        assert_eq!(team_color(" India", "#111111"), "#111111");
    }

    #[test]
    fn table_has_no_duplicate_names() {
        assert_eq!(index().len(), TEAM_COLORS.len());
    }
}
