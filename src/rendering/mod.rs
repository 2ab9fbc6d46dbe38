//! Rendering: match state and style in, SVG document out
//!
//! Each [`Layout`] composes a fixed arrangement of paint commands
//! (`layout`), which `svg` then serializes. Rendering is pure: the same
//! inputs always produce byte-identical documents.

pub mod layout;
pub mod paint;
pub mod svg;

use crate::match_state::MatchState;
use crate::style::StyleProfile;
use crate::{Error, Result};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Canvas dimensions in SVG user units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Selectable scorecard layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Layout {
    /// Teams, score and result only
    Minimal,
    /// Tournament title, score, run rate, award and result on the batting side's colour
    #[default]
    Styled,
    /// Live state: batsmen, bowler, this over and the chase equation
    Detailed,
    /// Full batting and bowling tables per innings
    Innings,
}

impl Layout {
    pub const ALL: [Layout; 4] = [Layout::Minimal, Layout::Styled, Layout::Detailed, Layout::Innings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Minimal => "minimal",
            Layout::Styled => "styled",
            Layout::Detailed => "detailed",
            Layout::Innings => "innings",
        }
    }

    /// Canvas size; the innings layout grows taller than this when needed
    pub fn canvas(&self) -> Canvas {
        match self {
            Layout::Minimal | Layout::Styled => Canvas { width: 800, height: 400 },
            Layout::Detailed => Canvas { width: 800, height: 600 },
            Layout::Innings => Canvas { width: 1000, height: 1200 },
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Layout::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}

impl TryFrom<String> for Layout {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A rendered, self-contained SVG document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    pub content: String,
}

impl SvgDocument {
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// SHA-256 of the document bytes, lowercase hex
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.content.as_bytes()))
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Options controlling a single render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub layout: Layout,
    /// XML-escape substituted text (`&`, `<`, `>`)
    pub escape_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            escape_text: true,
        }
    }
}

/// Render `state` with `style` into an SVG document
pub fn render_scorecard(state: &MatchState, style: &StyleProfile, opts: &RenderOptions) -> Result<SvgDocument> {
    let scene = layout::compose(opts.layout, state, style)?;
    Ok(svg::serialize(&scene, opts.escape_text))
}
