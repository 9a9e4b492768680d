//! Callout shape generation: geometry plus fill/shadow styling.
//!
//! This module is organized into submodules:
//! - `geometry`: body inset, outline path construction, measurement
//! - `svg`: SVG document generation
//!
//! [`Callout`] ties them together: it resolves a [`CalloutStyle`] against a
//! [`Scale`] and derives everything else from the bounds supplied per call.

pub mod geometry;
pub mod svg;

use kurbo::{BezPath, Insets, Rect, Size};

use crate::style::CalloutStyle;
use crate::types::{Color, Scale};

/// Drop shadow parameters, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    /// Shadow color, usually translucent.
    pub color: Color,
    /// Blur radius; also the inset the body keeps from the bounds.
    pub blur_radius: f64,
    /// Vertical offset. The horizontal offset is fixed at zero.
    pub offset_y: f64,
}

/// Solid fill plus drop shadow: the paint for a single fill pass, no stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub color: Color,
    pub shadow: Shadow,
}

/// The shape generator.
///
/// Stateless between calls: every accessor recomputes from the style, the
/// scale and the supplied bounds, so there is no cached geometry to
/// invalidate when the bounds change.
#[derive(Debug, Clone)]
pub struct Callout {
    style: CalloutStyle,
    scale: Scale,
}

impl Callout {
    /// Generator with style lengths taken as raw pixels.
    pub fn new(style: CalloutStyle) -> Callout {
        Callout::with_scale(style, Scale::ONE)
    }

    /// Generator with style lengths converted through `scale`.
    pub fn with_scale(style: CalloutStyle, scale: Scale) -> Callout {
        Callout { style, scale }
    }

    pub fn style(&self) -> &CalloutStyle {
        &self.style
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The body rectangle for the given bounds: inset by the shadow size on
    /// left/top/right and by shadow plus arrow on the bottom. May be
    /// degenerate; [`Callout::outline`] then yields an empty path.
    pub fn body(&self, bounds: Size) -> Rect {
        geometry::body_rect(
            bounds,
            self.scale.px(self.style.shadow_size),
            self.scale.px(self.style.arrow_size),
        )
    }

    /// The compound outline (body ∪ arrow) for the given bounds.
    pub fn outline(&self, bounds: Size) -> BezPath {
        geometry::outline_path(
            self.body(bounds),
            self.scale.px(self.style.body_corner_radius),
            self.scale.px(self.style.arrow_size),
            self.scale.px(self.style.arrow_corner_radius),
        )
    }

    /// The paint: solid fill color plus the style's drop shadow.
    pub fn fill(&self) -> Fill {
        Fill {
            color: self.style.fill_color,
            shadow: Shadow {
                color: self.style.shadow_color,
                blur_radius: self.scale.px(self.style.shadow_size),
                offset_y: self.scale.px(self.style.shadow_offset_y),
            },
        }
    }

    /// Fix a measured height to exactly `content_height + arrow height`.
    ///
    /// An exact constraint, not a minimum: the arrow always gets its room
    /// below the body regardless of content size.
    pub fn measured_height(&self, content_height: f64) -> f64 {
        geometry::measured_height(content_height, self.scale.px(self.style.arrow_size))
    }

    /// Padding the container must apply so child content stays inside the
    /// body and clear of the shadow: the shadow size, on all four sides.
    pub fn content_insets(&self) -> Insets {
        Insets::uniform(self.scale.px(self.style.shadow_size))
    }

    /// Render to a standalone SVG document.
    pub fn to_svg(&self, bounds: Size) -> String {
        svg::svg_document(&self.outline(bounds), &self.fill(), bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Length;

    #[test]
    fn fill_reflects_style() {
        let fill = Callout::new(CalloutStyle::default()).fill();
        assert_eq!(fill.color, Color::WHITE);
        assert_eq!(fill.shadow.color, Color::argb(0x80, 0x88, 0x88, 0x88));
        assert_eq!(fill.shadow.blur_radius, 4.0);
        assert_eq!(fill.shadow.offset_y, 2.0);
    }

    #[test]
    fn content_insets_equal_shadow_size() {
        let callout = Callout::new(CalloutStyle::default());
        assert_eq!(callout.content_insets(), Insets::uniform(4.0));
    }

    #[test]
    fn measured_height_adds_arrow() {
        let callout = Callout::new(CalloutStyle::default());
        assert_eq!(callout.measured_height(100.0), 124.0);
    }

    #[test]
    fn density_scale_converts_every_metric() {
        let scale = Scale::from_density(2.0).unwrap();
        let callout = Callout::with_scale(CalloutStyle::default(), scale);
        assert_eq!(callout.measured_height(100.0), 148.0);
        assert_eq!(callout.content_insets(), Insets::uniform(8.0));
        assert_eq!(
            callout.body(Size::new(100.0, 100.0)),
            Rect::new(8.0, 8.0, 92.0, 44.0)
        );
        assert_eq!(callout.fill().shadow.blur_radius, 8.0);
    }

    #[test]
    fn shadow_only_changes_leave_outline_untouched() {
        let bounds = Size::new(220.0, 140.0);
        let base = Callout::new(CalloutStyle::default());

        let mut shifted_style = CalloutStyle::default();
        shifted_style.shadow_color = Color::argb(0xff, 0, 0, 0);
        shifted_style.shadow_offset_y = Length::of(9.0);
        let shifted = Callout::new(shifted_style);

        assert_eq!(
            svg::path_data(&base.outline(bounds)),
            svg::path_data(&shifted.outline(bounds))
        );
        assert_ne!(base.fill(), shifted.fill());
    }

    #[test]
    fn degenerate_bounds_yield_empty_outline() {
        let callout = Callout::new(CalloutStyle::default());
        // Width smaller than twice the shadow inset
        assert!(callout.outline(Size::new(6.0, 200.0)).elements().is_empty());
        // Height smaller than the shadow and arrow insets
        assert!(callout.outline(Size::new(200.0, 20.0)).elements().is_empty());
    }
}
