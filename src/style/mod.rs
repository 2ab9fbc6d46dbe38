//! Tournament style profiles and team colour overrides
//!
//! Both tables are compiled-in and read-only. A style is selected by a
//! [`StyleKey`]: a tournament, plus a [`MatchFormat`] that only matters for
//! [`Tournament::International`].

pub mod teams;

pub use teams::{team_color, TEAM_COLORS};

use crate::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Colours and title used to paint one tournament's scorecards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    pub background_color: &'static str,
    pub text_color: &'static str,
    /// Highlight colour for derived figures such as the run rate
    pub accent_color: Option<&'static str>,
    pub title: &'static str,
    /// Optional SVG fragment tiled over the background (50x50 cell)
    pub pattern: Option<&'static str>,
}

impl StyleProfile {
    /// Accent colour, falling back to the text colour
    pub fn accent(&self) -> &'static str {
        self.accent_color.unwrap_or(self.text_color)
    }
}

/// Tournaments with a registered style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Tournament {
    Psl,
    Ipl,
    Bpl,
    Lpl,
    Bbl,
    Sa20,
    Ilt20,
    International,
}

impl Tournament {
    pub const ALL: [Tournament; 8] = [
        Tournament::Psl,
        Tournament::Ipl,
        Tournament::Bpl,
        Tournament::Lpl,
        Tournament::Bbl,
        Tournament::Sa20,
        Tournament::Ilt20,
        Tournament::International,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tournament::Psl => "PSL",
            Tournament::Ipl => "IPL",
            Tournament::Bpl => "BPL",
            Tournament::Lpl => "LPL",
            Tournament::Bbl => "BBL",
            Tournament::Sa20 => "SA20",
            Tournament::Ilt20 => "ILT20",
            Tournament::International => "INTERNATIONAL",
        }
    }

    /// Whether this tournament needs a [`MatchFormat`] to pick its style
    pub fn is_multi_format(&self) -> bool {
        matches!(self, Tournament::International)
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tournament {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tournament::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::StyleNotFound(s.to_string()))
    }
}

impl TryFrom<String> for Tournament {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Match formats of the multi-format tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum MatchFormat {
    T20,
    Odi,
    Test,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 3] = [MatchFormat::T20, MatchFormat::Odi, MatchFormat::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchFormat::T20 => "t20",
            MatchFormat::Odi => "odi",
            MatchFormat::Test => "test",
        }
    }

    fn parse_for(tournament: Tournament, s: &str) -> Result<Self> {
        MatchFormat::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidFormat {
                tournament: tournament.to_string(),
                format: s.to_string(),
            })
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MatchFormat::parse_for(Tournament::International, s)
    }
}

impl TryFrom<String> for MatchFormat {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Lookup key into the style table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub tournament: Tournament,
    pub format: MatchFormat,
}

impl Default for StyleKey {
    fn default() -> Self {
        Self {
            tournament: Tournament::International,
            format: MatchFormat::T20,
        }
    }
}

impl StyleKey {
    pub fn new(tournament: Tournament, format: MatchFormat) -> Self {
        Self { tournament, format }
    }

    /// Resolve optional textual selectors against `defaults`.
    ///
    /// Unknown tournaments fail with [`Error::StyleNotFound`]. The format is
    /// validated only for the multi-format tournament; other tournaments
    /// ignore it.
    pub fn parse(tournament: Option<&str>, format: Option<&str>, defaults: StyleKey) -> Result<Self> {
        let tournament = match tournament {
            Some(t) => t.parse()?,
            None => defaults.tournament,
        };

        let format = match format {
            Some(f) if tournament.is_multi_format() => MatchFormat::parse_for(tournament, f)?,
            Some(f) => {
                debug!("Ignoring format '{}' for single-format tournament {}", f, tournament);
                defaults.format
            }
            None => defaults.format,
        };

        Ok(Self { tournament, format })
    }

    /// The style profile this key selects
    pub fn profile(&self) -> &'static StyleProfile {
        match self.tournament {
            Tournament::Psl => &PSL,
            Tournament::Ipl => &IPL,
            Tournament::Bpl => &BPL,
            Tournament::Lpl => &LPL,
            Tournament::Bbl => &BBL,
            Tournament::Sa20 => &SA20,
            Tournament::Ilt20 => &ILT20,
            Tournament::International => match self.format {
                MatchFormat::T20 => &INTERNATIONAL_T20,
                MatchFormat::Odi => &INTERNATIONAL_ODI,
                MatchFormat::Test => &INTERNATIONAL_TEST,
            },
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tournament.is_multi_format() {
            write!(f, "{}/{}", self.tournament, self.format)
        } else {
            write!(f, "{}", self.tournament)
        }
    }
}

/// Resolve a style profile from optional selectors, defaulting to INTERNATIONAL t20
pub fn resolve_style(tournament: Option<&str>, format: Option<&str>) -> Result<&'static StyleProfile> {
    let key = StyleKey::parse(tournament, format, StyleKey::default())?;
    debug!("Resolved style {}", key);
    Ok(key.profile())
}

/// Every registered style key, in display order
pub fn all_style_keys() -> Vec<StyleKey> {
    let mut keys = Vec::new();
    for t in Tournament::ALL {
        if t.is_multi_format() {
            keys.extend(MatchFormat::ALL.into_iter().map(|f| StyleKey::new(t, f)));
        } else {
            keys.push(StyleKey::new(t, MatchFormat::T20));
        }
    }
    keys
}

static PSL: StyleProfile = StyleProfile {
    background_color: "#01411C",
    text_color: "#FFFFFF",
    accent_color: Some("#FFD700"),
    title: "HBL PSL 9",
    pattern: Some(r##"<path d="M0 0l25 25l-25 25l25-25l25 25l-25-25l25-25l-25 25z" stroke="#FFD700" stroke-width="0.5" opacity="0.1"/>"##),
};

static IPL: StyleProfile = StyleProfile {
    background_color: "#1A237E",
    text_color: "#FFFFFF",
    accent_color: Some("#FF9800"),
    title: "TATA IPL 2024",
    pattern: Some(r##"<circle cx="30" cy="30" r="25" fill="none" stroke="#FF9800" stroke-width="0.5" opacity="0.1"/>"##),
};

static BPL: StyleProfile = StyleProfile {
    background_color: "#006A4E",
    text_color: "#FFFFFF",
    accent_color: Some("#E31837"),
    title: "BPL 2024",
    pattern: Some(r##"<rect x="0" y="0" width="20" height="20" fill="#E31837" opacity="0.1"/>"##),
};

static LPL: StyleProfile = StyleProfile {
    background_color: "#00529B",
    text_color: "#FFFFFF",
    accent_color: None,
    title: "LPL 2024",
    pattern: None,
};

static BBL: StyleProfile = StyleProfile {
    background_color: "#2B2B2B",
    text_color: "#FFFFFF",
    accent_color: None,
    title: "KFC BBL|13",
    pattern: None,
};

static SA20: StyleProfile = StyleProfile {
    background_color: "#E31837",
    text_color: "#FFFFFF",
    accent_color: None,
    title: "Betway SA20",
    pattern: None,
};

static ILT20: StyleProfile = StyleProfile {
    background_color: "#00205B",
    text_color: "#FFFFFF",
    accent_color: None,
    title: "DP World ILT20",
    pattern: None,
};

static INTERNATIONAL_T20: StyleProfile = StyleProfile {
    background_color: "#1F2937",
    text_color: "#FFFFFF",
    accent_color: None,
    title: "ICC Men's T20I",
    pattern: None,
};

static INTERNATIONAL_ODI: StyleProfile = StyleProfile {
    background_color: "#1E3A8A",
    text_color: "#FFFFFF",
    accent_color: None,
    title: "ICC Men's ODI",
    pattern: None,
};

static INTERNATIONAL_TEST: StyleProfile = StyleProfile {
    background_color: "#18181B",
    text_color: "#FFFFFF",
    accent_color: None,
    title: "ICC World Test Championship",
    pattern: None,
};
