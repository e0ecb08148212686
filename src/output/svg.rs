//! SVG output encoder.
//!
//! Renders a [`Scene`]'s shape descriptors to a standalone SVG document.
//! The encoder is the rendering collaborator for the chart builders: it
//! knows nothing about data, scales, or aggregation.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::color::Rgba;
use crate::error::Result;
use crate::mark::{Mark, Scene, TextAnchor};

/// SVG encoder for scenes.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// Background color (None for transparent).
    background: Option<Rgba>,
    /// Font size for text marks.
    font_size: f32,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgEncoder {
    /// Create an encoder with a white background.
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Some(Rgba::WHITE),
            font_size: 12.0,
        }
    }

    /// Set the background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Set the font size used for text marks.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size.max(1.0);
        self
    }

    /// Render a scene to an SVG document string.
    #[must_use]
    pub fn render(&self, scene: &Scene) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            scene.width, scene.height, scene.width, scene.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
                scene.width,
                scene.height,
                bg.to_hex()
            );
        }

        for mark in &scene.marks {
            self.write_mark(&mut svg, mark);
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Render a scene and write it to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn to_file<P: AsRef<Path>>(&self, scene: &Scene, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render(scene).as_bytes())?;
        Ok(())
    }

    fn write_mark(&self, svg: &mut String, mark: &Mark) {
        match mark {
            Mark::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => {
                let _ = writeln!(
                    svg,
                    r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                    stroke.to_hex()
                );
            }
            Mark::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
                stroke_width,
            } => {
                let _ = write!(
                    svg,
                    r#"  <rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}""#,
                    fill.to_hex()
                );
                if fill.a < 255 {
                    let _ = write!(svg, r#" fill-opacity="{:.3}""#, fill.opacity());
                }
                if let Some(stroke) = stroke {
                    let _ = write!(
                        svg,
                        r#" stroke="{}" stroke-width="{stroke_width}""#,
                        stroke.to_hex()
                    );
                }
                svg.push_str("/>\n");
            }
            Mark::Circle { cx, cy, r, fill } => {
                let _ = writeln!(
                    svg,
                    r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#,
                    fill.to_hex()
                );
            }
            Mark::Path {
                start,
                segments,
                stroke,
                stroke_width,
            } => {
                let mut d = format!("M{},{}", start.x, start.y);
                for seg in segments {
                    let _ = write!(
                        d,
                        " C{},{} {},{} {},{}",
                        seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.end.x, seg.end.y
                    );
                }
                let _ = writeln!(
                    svg,
                    r#"  <path d="{d}" fill="none" stroke="{}" stroke-width="{stroke_width}"/>"#,
                    stroke.to_hex()
                );
            }
            Mark::Text {
                x,
                y,
                text,
                anchor,
                rotate,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let _ = write!(
                    svg,
                    r#"  <text x="{x}" y="{y}" font-size="{}" text-anchor="{anchor}""#,
                    self.font_size
                );
                if let Some(deg) = rotate {
                    let _ = write!(svg, r#" transform="rotate({deg} {x} {y})""#);
                }
                let _ = writeln!(svg, ">{}</text>", escape_text(text));
            }
        }
    }
}

/// Escape the XML special characters in text content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
