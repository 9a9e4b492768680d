//! SVG generation
//!
//! Serializes an outline plus its fill/shadow style into a standalone SVG
//! document. The drop shadow becomes a `feDropShadow` filter; the host
//! shadow radius maps to a Gaussian `stdDeviation` of half the radius.

use std::fmt::Write;

use kurbo::{BezPath, PathEl, Size};

use super::Fill;

/// Serialize a path to SVG path data, two decimals per coordinate.
pub fn path_data(path: &BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => write!(out, "M{:.2},{:.2}", p.x, p.y),
            PathEl::LineTo(p) => write!(out, "L{:.2},{:.2}", p.x, p.y),
            PathEl::QuadTo(c, p) => {
                write!(out, "Q{:.2},{:.2} {:.2},{:.2}", c.x, c.y, p.x, p.y)
            }
            PathEl::CurveTo(c1, c2, p) => write!(
                out,
                "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            ),
            PathEl::ClosePath => write!(out, "Z"),
        }
        .unwrap();
    }
    out
}

/// Generate a standalone SVG document for one filled outline.
///
/// An empty outline (degenerate bounds) produces a document without a path
/// element; the draw is skipped, never an error.
pub fn svg_document(outline: &BezPath, fill: &Fill, bounds: Size) -> String {
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="callout" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
        bounds.width, bounds.height, bounds.width, bounds.height
    )
    .unwrap();

    let shadow = &fill.shadow;
    writeln!(svg, "  <defs>").unwrap();
    // The filter region is widened so the blur is not clipped at the path box
    writeln!(
        svg,
        r#"    <filter id="callout-shadow" x="-50%" y="-50%" width="200%" height="200%">"#
    )
    .unwrap();
    writeln!(
        svg,
        r#"      <feDropShadow dx="0" dy="{:.2}" stdDeviation="{:.2}" flood-color="{}" flood-opacity="{:.2}"/>"#,
        shadow.offset_y,
        0.5 * shadow.blur_radius,
        shadow.color.to_rgb_string(),
        shadow.color.opacity()
    )
    .unwrap();
    writeln!(svg, "    </filter>").unwrap();
    writeln!(svg, "  </defs>").unwrap();

    if outline.elements().is_empty() {
        crate::log::debug!("degenerate callout outline, skipping path element");
    } else {
        writeln!(
            svg,
            r#"  <path d="{}" fill="{}" filter="url(#callout-shadow)"/>"#,
            path_data(outline),
            fill.color
        )
        .unwrap();
    }

    writeln!(svg, "</svg>").unwrap();
    svg
}
