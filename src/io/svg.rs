//! Standalone SVG document serialization
//!
//! Layout of a document: gradient and filter definitions, background rect,
//! one circle per guide dot, then a glow-filtered group holding the
//! decorative paths in drawing order.

use crate::io::configuration::{GUIDE_DOT_OPACITY, PATH_OPACITY};
use crate::pattern::{GeneratedPattern, Gradient};
use std::fmt::{self, Write};

/// Id of the glow filter applied to the decorative group
pub const GLOW_FILTER_ID: &str = "kolam-glow";

const DEFINITIONS: &str = r#"  <defs>
    <linearGradient id="primaryGradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#dc2626;stop-opacity:1" />
      <stop offset="50%" style="stop-color:#ea580c;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#ca8a04;stop-opacity:1" />
    </linearGradient>
    <radialGradient id="centerGradient" cx="50%" cy="50%" r="50%">
      <stop offset="0%" style="stop-color:#7c2d12;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#451a03;stop-opacity:0.9" />
    </radialGradient>
    <linearGradient id="accentGradient" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" style="stop-color:#b91c1c;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#a16207;stop-opacity:1" />
    </linearGradient>
    <radialGradient id="guideDotGradient" cx="50%" cy="50%" r="50%">
      <stop offset="0%" style="stop-color:#451a03;stop-opacity:0.2" />
      <stop offset="100%" style="stop-color:#451a03;stop-opacity:0.05" />
    </radialGradient>
    <filter id="kolam-glow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="1.5" result="coloredBlur"/>
      <feMerge>
        <feMergeNode in="coloredBlur"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>
  </defs>
"#;

/// Serialize a generated pattern as a standalone SVG document
pub fn to_svg_string(pattern: &GeneratedPattern) -> String {
    let mut document = String::new();
    // Writing into a String cannot fail
    let _ = write_svg(&mut document, pattern);
    document
}

/// Write a generated pattern as a standalone SVG document
///
/// # Errors
///
/// Propagates errors from the underlying writer
pub fn write_svg(out: &mut impl Write, pattern: &GeneratedPattern) -> fmt::Result {
    let size = pattern.canvas.size;
    writeln!(
        out,
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
    )?;
    out.write_str(DEFINITIONS)?;
    writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}" />"#,
        pattern.background
    )?;

    let radius = pattern.guide.dot_radius();
    for dot in pattern.guide.dots() {
        writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{radius}" fill="url(#{})" opacity="{GUIDE_DOT_OPACITY}"/>"#,
            dot.x,
            dot.y,
            Gradient::GuideDot.id()
        )?;
    }

    writeln!(out, r#"  <g filter="url(#{GLOW_FILTER_ID})">"#)?;
    for path in &pattern.paths {
        writeln!(
            out,
            r#"    <path d="{}" stroke="url(#{})" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round" opacity="{PATH_OPACITY}"/>"#,
            path.segment,
            path.gradient.id(),
            path.stroke_width
        )?;
    }
    out.write_str("  </g>\n</svg>\n")
}
