//! A rounded-rectangle callout ("tooltip") shape with a downward pointer
//! arrow and a drop shadow, for overlaying on surfaces that have no native
//! elevation shadows — map tiles, canvas scenes, image annotations.
//!
//! The crate derives everything from a small attribute set: the body
//! rectangle (bounds inset for shadow and arrow), one compound outline path
//! (rounded body merged with a rounded-tip arrow), the fill/shadow paint,
//! and the exact height a layout pass must reserve. A built-in renderer
//! serializes the result to SVG; the outline and paint types are public so
//! other rasterizers can consume them instead.
//!
//! # Examples
//!
//! ```
//! use callout::{Callout, CalloutStyle};
//! use kurbo::Size;
//!
//! let callout = Callout::new(CalloutStyle::default());
//! let svg = callout.to_svg(Size::new(240.0, 160.0));
//! assert!(svg.contains("feDropShadow"));
//! ```
//!
//! Styles parse from `name = value` attribute text, strictly (diagnostics
//! with source spans) or leniently (defaults for anything malformed):
//!
//! ```
//! let svg = callout::render_svg("arrowSize = 16\nfillColor = #f8f8f8", 220.0, 140.0)?;
//! assert!(svg.contains("<path"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod errors;
pub mod log;
pub mod render;
pub mod style;
pub mod types;

pub use errors::StyleError;
pub use render::{Callout, Fill, Shadow};
pub use style::CalloutStyle;
pub use types::{Color, Length, Scale};

/// Render a callout SVG from a strict attribute block.
///
/// Returns the SVG string on success, or an error with diagnostics pointing
/// into `attrs`. Use [`CalloutStyle::from_attrs`] plus [`Callout`] directly
/// for lenient parsing or non-SVG consumers.
pub fn render_svg(attrs: &str, width: f64, height: f64) -> Result<String, miette::Report> {
    let style = CalloutStyle::parse("<attrs>", attrs)?;
    let callout = Callout::new(style);
    Ok(callout.to_svg(kurbo::Size::new(width, height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_svg_end_to_end() {
        let svg = render_svg("shadowSize = 4\narrowSize = 24", 240.0, 160.0).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("<path"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn render_svg_reports_bad_attrs() {
        let err = render_svg("arrowSize = very", 240.0, 160.0).unwrap_err();
        assert!(err.to_string().contains("invalid length"));
    }

    #[test]
    fn render_svg_skips_draw_on_tiny_bounds() {
        let svg = render_svg("", 4.0, 4.0).unwrap();
        assert!(!svg.contains("<path"));
    }
}
