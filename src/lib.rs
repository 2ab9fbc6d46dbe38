//! Cricket scorecard renderer
//!
//! Turns a [`MatchState`] into a tournament-styled SVG scorecard and writes it
//! to a timestamped file.
//!
//! # Features
//!
//! - **Style profiles**: per-tournament colours and titles, with per-format
//!   profiles for international cricket
//! - **Team colours**: the styled layout paints the batting side's kit colour
//! - **Layouts**: minimal, styled, detailed live state and full innings tables
//!
//! # Example
//!
//! ```no_run
//! use scorecard::{MatchState, RenderRequest, RendererConfig, Score, ScorecardRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RendererConfig {
//!     output_dir: "output".into(),
//!     ..Default::default()
//! };
//!
//! let mut state = MatchState::new("Quetta Gladiators", "Lahore Qalandars", Score::new(142, 3, 16, 4));
//! state.batting_team = Some("Quetta Gladiators".into());
//!
//! let renderer = ScorecardRenderer::new(config);
//! let artifact = renderer.generate(&state, &RenderRequest::tournament("PSL"))?;
//! println!("Wrote {}", artifact.path.display());
//! # Ok(())
//! # }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod match_state;
pub mod output;
pub mod renderer;
pub mod rendering;
pub mod samples;
pub mod stats;
pub mod style;

pub use match_state::{MatchState, Score};
pub use renderer::{RenderRequest, RenderedArtifact, ScorecardRenderer};
pub use rendering::{Layout, SvgDocument};
pub use style::{resolve_style, MatchFormat, StyleProfile, Tournament};

/// Configuration for the scorecard renderer
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```
/// let cfg = scorecard::RendererConfig::default();
/// assert_eq!(cfg.output_dir, std::path::PathBuf::from("output"));
/// assert!(cfg.escape_text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Directory scorecards are written to (created on demand)
    pub output_dir: PathBuf,
    /// File name prefix, before the timestamp
    pub file_prefix: String,
    /// File extension, without the dot
    pub extension: String,
    /// Tournament used when a request names none
    pub default_tournament: Tournament,
    /// Format used for the multi-format tournament when a request names none
    pub default_format: MatchFormat,
    /// Layout used when a request names none
    pub layout: Layout,
    /// XML-escape substituted text. Disable to emit names verbatim.
    pub escape_text: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            file_prefix: "scorecard".to_string(),
            extension: "svg".to_string(),
            default_tournament: Tournament::International,
            default_format: MatchFormat::T20,
            layout: Layout::Styled,
            escape_text: true,
        }
    }
}

impl RendererConfig {
    /// Load a (possibly partial) JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: RendererConfig = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let is_plain = |s: &str| !s.is_empty() && !s.contains(['/', '\\', '.']);
        if !is_plain(&self.file_prefix) {
            return Err(Error::ConfigError(format!("invalid file prefix '{}'", self.file_prefix)));
        }
        if !is_plain(&self.extension) {
            return Err(Error::ConfigError(format!("invalid extension '{}'", self.extension)));
        }
        Ok(())
    }
}

/// Render `state` with the default configuration and write it under `output/`.
///
/// `tournament` defaults to INTERNATIONAL and `format` to t20. Returns the
/// path of the written file.
pub fn generate_scorecard(state: &MatchState, tournament: Option<&str>, format: Option<&str>) -> Result<PathBuf> {
    let request = RenderRequest {
        tournament: tournament.map(str::to_string),
        format: format.map(str::to_string),
        layout: None,
    };
    ScorecardRenderer::new(RendererConfig::default())
        .generate(state, &request)
        .map(|artifact| artifact.path)
}
