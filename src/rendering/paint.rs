//! Paint commands emitted by the layouts and serialized into SVG elements

use std::fmt::Write;

/// Id of the background pattern in `<defs>`
pub const PATTERN_ID: &str = "bgPattern";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn attr(&self) -> Option<&'static str> {
        match self {
            Anchor::Start => None,
            Anchor::Middle => Some("middle"),
            Anchor::End => Some("end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub family: &'static str,
    pub size: u32,
    pub fill: String,
    pub anchor: Anchor,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: u32, fill: &str) -> Self {
        Self {
            family: "Arial",
            size,
            fill: fill.to_string(),
            anchor: Anchor::Start,
            bold: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.anchor = Anchor::Middle;
        self
    }

    pub fn right(mut self) -> Self {
        self.anchor = Anchor::End;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn monospace(mut self) -> Self {
        self.family = "monospace";
        self
    }

    fn write_attrs(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"font-family="{}" font-size="{}" fill="{}""#,
            self.family, self.size, self.fill
        );
        if let Some(anchor) = self.anchor.attr() {
            let _ = write!(out, r#" text-anchor="{}""#, anchor);
        }
        if self.bold {
            out.push_str(r#" font-weight="bold""#);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Full-canvas fill
    Background { fill: String, opacity: Option<f32> },
    /// Tiled 50x50 pattern over the whole canvas
    Pattern { tile: &'static str },
    /// Single line of text anchored at (x, y)
    Text {
        x: i32,
        y: i32,
        style: TextStyle,
        content: String,
    },
    /// Stacked lines with whitespace preserved (tables)
    TextBlock {
        x: i32,
        y: i32,
        style: TextStyle,
        line_height: u32,
        lines: Vec<String>,
    },
}

impl PaintCommand {
    pub fn text(x: i32, y: i32, style: TextStyle, content: impl Into<String>) -> Self {
        PaintCommand::Text {
            x,
            y,
            style,
            content: content.into(),
        }
    }

    /// Append this command as SVG markup. Text content is XML-escaped when `escape` is set.
    pub fn write_svg(&self, out: &mut String, escape: bool) {
        let text = |s: &str| if escape { escape_xml(s) } else { s.to_string() };
        match self {
            PaintCommand::Background { fill, opacity } => {
                let _ = write!(out, r#"    <rect width="100%" height="100%" fill="{}""#, fill);
                if let Some(o) = opacity {
                    let _ = write!(out, r#" opacity="{}""#, o);
                }
                out.push_str("/>\n");
            }
            PaintCommand::Pattern { tile } => {
                let _ = writeln!(out, "    <defs>");
                let _ = writeln!(
                    out,
                    r#"        <pattern id="{}" patternUnits="userSpaceOnUse" width="50" height="50">"#,
                    PATTERN_ID
                );
                let _ = writeln!(out, "            {}", tile);
                let _ = writeln!(out, "        </pattern>");
                let _ = writeln!(out, "    </defs>");
                let _ = writeln!(out, r#"    <rect width="100%" height="100%" fill="url(#{})"/>"#, PATTERN_ID);
            }
            PaintCommand::Text { x, y, style, content } => {
                let _ = write!(out, r#"    <text x="{}" y="{}" "#, x, y);
                style.write_attrs(out);
                let _ = writeln!(out, ">{}</text>", text(content));
            }
            PaintCommand::TextBlock {
                x,
                y,
                style,
                line_height,
                lines,
            } => {
                let _ = write!(out, r#"    <text x="{}" y="{}" xml:space="preserve" "#, x, y);
                style.write_attrs(out);
                out.push_str(">\n");
                for (i, line) in lines.iter().enumerate() {
                    let dy = if i == 0 { 0 } else { *line_height };
                    let _ = writeln!(out, r#"        <tspan x="{}" dy="{}">{}</tspan>"#, x, dy, text(line));
                }
                out.push_str("    </text>\n");
            }
        }
    }
}

/// Escape the characters that would break element content
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
