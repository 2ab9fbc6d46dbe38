//! Serialization of a composed scene into a standalone SVG document

use super::layout::Scene;
use super::SvgDocument;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Write every command of `scene` inside an `<svg>` root of the scene's canvas size
pub fn serialize(scene: &Scene, escape_text: bool) -> SvgDocument {
    let mut out = String::with_capacity(2048);
    out.push_str(XML_DECL);
    out.push('\n');
    out.push_str(&format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        scene.canvas.width, scene.canvas.height
    ));
    out.push('\n');
    for cmd in &scene.commands {
        cmd.write_svg(&mut out, escape_text);
    }
    out.push_str("</svg>\n");

    SvgDocument {
        width: scene.canvas.width,
        height: scene.canvas.height,
        content: out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::{PaintCommand, TextStyle};
    use crate::rendering::Canvas;

    #[test]
    fn document_has_declaration_and_root() {
        let scene = Scene {
            canvas: Canvas { width: 800, height: 400 },
            commands: vec![PaintCommand::text(1, 2, TextStyle::new(10, "#FFF"), "hi")],
        };
        let doc = serialize(&scene, true);
        assert!(doc.content.starts_with(XML_DECL));
        assert!(doc.content.contains(r#"<svg width="800" height="400" xmlns="http://www.w3.org/2000/svg">"#));
        assert!(doc.content.ends_with("</svg>\n"));
        assert_eq!((doc.width, doc.height), (800, 400));
    }
}
