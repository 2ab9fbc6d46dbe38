//! The scorecard renderer: style lookup, template rendering, output placement.

use crate::match_state::MatchState;
use crate::output::{Clock, OutputPlacement, SystemClock};
use crate::rendering::{render_scorecard, Layout, RenderOptions, SvgDocument};
use crate::style::{StyleKey, StyleProfile};
use crate::{RendererConfig, Result};
use log::debug;
use std::path::PathBuf;

/// Per-call selectors. `None` falls back to the renderer's configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub tournament: Option<String>,
    pub format: Option<String>,
    pub layout: Option<Layout>,
}

impl RenderRequest {
    pub fn tournament(tournament: impl Into<String>) -> Self {
        Self {
            tournament: Some(tournament.into()),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }
}

/// A written scorecard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub path: PathBuf,
    pub document: SvgDocument,
}

/// Renders match states and writes them to the configured output directory
pub struct ScorecardRenderer<C: Clock = SystemClock> {
    config: RendererConfig,
    placement: OutputPlacement,
    clock: C,
}

impl ScorecardRenderer<SystemClock> {
    pub fn new(config: RendererConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ScorecardRenderer<C> {
    pub fn with_clock(config: RendererConfig, clock: C) -> Self {
        let placement = OutputPlacement::new(&config.output_dir)
            .with_prefix(config.file_prefix.clone())
            .with_extension(config.extension.clone());
        Self {
            config,
            placement,
            clock,
        }
    }

    /// Resolve the style profile for `request`
    pub fn style_for(&self, request: &RenderRequest) -> Result<&'static StyleProfile> {
        let defaults = StyleKey::new(self.config.default_tournament, self.config.default_format);
        let key = StyleKey::parse(request.tournament.as_deref(), request.format.as_deref(), defaults)?;
        debug!("Resolved style {} ({})", key, key.profile().title);
        Ok(key.profile())
    }

    /// Render without touching the filesystem
    pub fn render(&self, state: &MatchState, request: &RenderRequest) -> Result<SvgDocument> {
        let style = self.style_for(request)?;
        state.warn_unusual();
        let opts = RenderOptions {
            layout: request.layout.unwrap_or(self.config.layout),
            escape_text: self.config.escape_text,
        };
        render_scorecard(state, style, &opts)
    }

    /// Render and write to a timestamped file
    pub fn generate(&self, state: &MatchState, request: &RenderRequest) -> Result<RenderedArtifact> {
        let document = self.render(state, request)?;
        let path = self.placement.write(document.as_str(), self.clock.now())?;
        Ok(RenderedArtifact { path, document })
    }
}
