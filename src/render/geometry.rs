//! Geometry functions: body inset, outline path construction, measurement.
//!
//! Everything here is a pure function of its arguments, recomputed per draw.
//! Coordinates are SVG-style pixels: origin top-left, Y grows downward.

use glam::{DVec2, dvec2};
use kurbo::{BezPath, Rect, Size};

/// Cubic Bezier approximation factor for a quarter circle.
const KAPPA: f64 = 0.552_284_749_830_793_5;

/// Compute the body rectangle from the measured bounds.
///
/// The body is inset by `shadow` on the left/top/right edges and by
/// `shadow + arrow` on the bottom, reserving room for the blur and the
/// pointer. The result may be degenerate (non-positive width or height) when
/// the bounds are smaller than the insets; callers skip the draw in that
/// case, nothing raises.
pub fn body_rect(bounds: Size, shadow: f64, arrow: f64) -> Rect {
    Rect::new(
        shadow,
        shadow,
        bounds.width - shadow,
        bounds.height - shadow - arrow,
    )
}

/// Trace a rounded rectangle clockwise, starting on the top edge.
///
/// `radius` applies uniformly to all four corners and is clamped to half the
/// smaller dimension. Corners are quarter-circle cubics. Degenerate
/// rectangles produce an empty path.
pub fn rounded_rect_path(rect: Rect, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    let (w, h) = (rect.width(), rect.height());
    if w <= 0.0 || h <= 0.0 {
        return path;
    }

    let Rect { x0, y0, x1, y1 } = rect;
    let r = radius.clamp(0.0, 0.5 * w.min(h));
    if r <= 0.0 {
        path.move_to((x0, y0));
        path.line_to((x1, y0));
        path.line_to((x1, y1));
        path.line_to((x0, y1));
        path.close_path();
        return path;
    }

    // Offset from the corner to each cubic control point
    let k = r * (1.0 - KAPPA);

    path.move_to((x0 + r, y0));
    path.line_to((x1 - r, y0));
    path.curve_to((x1 - k, y0), (x1, y0 + k), (x1, y0 + r));
    path.line_to((x1, y1 - r));
    path.curve_to((x1, y1 - k), (x1 - k, y1), (x1 - r, y1));
    path.line_to((x0 + r, y1));
    path.curve_to((x0 + k, y1), (x0, y1 - k), (x0, y1 - r));
    path.line_to((x0, y0 + r));
    path.curve_to((x0, y0 + k), (x0 + k, y0), (x0 + r, y0));
    path.close_path();
    path
}

/// The five anchor points of the arrow, in trace order:
/// right base, right shoulder, tip control, left shoulder, left base.
///
/// All are symmetric about the horizontal center of `body`; the bases sit on
/// the body's bottom edge, `arrow` away from center. With `radius == 0` the
/// shoulders and the control coincide in a sharp point.
pub fn arrow_points(body: Rect, arrow: f64, radius: f64) -> [DVec2; 5] {
    let cx = 0.5 * (body.x0 + body.x1);
    let bottom = body.y1;
    [
        dvec2(cx + arrow, bottom),
        dvec2(cx + radius, bottom + arrow - radius),
        dvec2(cx, bottom + arrow),
        dvec2(cx - radius, bottom + arrow - radius),
        dvec2(cx - arrow, bottom),
    ]
}

/// Trace the arrow as a closed sub-path hanging below the body's bottom edge.
///
/// Down the right flank, a quadratic through the tip control to round the
/// point, up the left flank, then closed along the bottom edge of the body.
pub fn arrow_path(body: Rect, arrow: f64, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    if arrow <= 0.0 {
        return path;
    }
    let [base_right, shoulder_right, tip, shoulder_left, base_left] =
        arrow_points(body, arrow, radius);
    path.move_to((base_right.x, base_right.y));
    path.line_to((shoulder_right.x, shoulder_right.y));
    path.quad_to((tip.x, tip.y), (shoulder_left.x, shoulder_left.y));
    path.line_to((base_left.x, base_left.y));
    path.close_path();
    path
}

/// The full callout outline: body rounded rectangle plus arrow, merged into
/// one compound path for a single fill pass.
///
/// The two sub-paths share the body's bottom edge; filling them together
/// keeps that edge invisible. A degenerate body yields an empty path.
pub fn outline_path(body: Rect, body_radius: f64, arrow: f64, arrow_radius: f64) -> BezPath {
    if body.width() <= 0.0 || body.height() <= 0.0 {
        return BezPath::new();
    }
    let mut path = rounded_rect_path(body, body_radius);
    for el in arrow_path(body, arrow, arrow_radius).elements() {
        path.push(*el);
    }
    path
}

/// Fix the measured height to exactly `content_height + arrow`, reserving
/// vertical room for the arrow no matter what the layout pass produced.
pub fn measured_height(content_height: f64, arrow: f64) -> f64 {
    content_height + arrow
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{} != {}",
            actual,
            expected
        );
    }

    /// Count (sub-path, close) pairs and reject trailing open segments.
    fn assert_all_contours_closed(path: &BezPath) {
        let mut opens = 0usize;
        let mut closes = 0usize;
        for el in path.elements() {
            match el {
                PathEl::MoveTo(_) => opens += 1,
                PathEl::ClosePath => closes += 1,
                _ => {}
            }
        }
        assert_eq!(opens, closes, "open sub-path in {:?}", path);
        if let Some(last) = path.elements().last() {
            assert!(matches!(last, PathEl::ClosePath));
        }
    }

    #[test]
    fn body_rect_insets() {
        let body = body_rect(Size::new(200.0, 160.0), 4.0, 24.0);
        assert_eq!(body, Rect::new(4.0, 4.0, 196.0, 132.0));
        assert_close(body.width(), 200.0 - 2.0 * 4.0);
        assert_close(body.height(), 160.0 - 2.0 * 4.0 - 24.0);
    }

    #[test]
    fn body_rect_dimension_property() {
        for (w, h, s, a) in [
            (100.0, 100.0, 0.0, 0.0),
            (120.0, 90.0, 6.0, 18.0),
            (48.0, 64.0, 3.5, 10.0),
        ] {
            let body = body_rect(Size::new(w, h), s, a);
            assert_close(body.width(), w - 2.0 * s);
            assert_close(body.height(), h - 2.0 * s - a);
        }
    }

    #[test]
    fn body_rect_may_degenerate() {
        let body = body_rect(Size::new(6.0, 6.0), 4.0, 24.0);
        assert!(body.width() < 0.0);
        assert!(body.height() < 0.0);
    }

    #[test]
    fn measured_height_is_exact() {
        assert_eq!(measured_height(100.0, 24.0), 124.0);
        assert_eq!(measured_height(0.0, 24.0), 24.0);
    }

    #[test]
    fn rounded_rect_starts_on_top_edge_clockwise() {
        let path = rounded_rect_path(Rect::new(0.0, 0.0, 100.0, 80.0), 10.0);
        let els = path.elements();
        assert!(matches!(els[0], PathEl::MoveTo(p) if p == (10.0, 0.0).into()));
        // First segment runs left to right along the top edge
        assert!(matches!(els[1], PathEl::LineTo(p) if p == (90.0, 0.0).into()));
        assert_all_contours_closed(&path);
    }

    #[test]
    fn rounded_rect_clamps_radius() {
        let path = rounded_rect_path(Rect::new(0.0, 0.0, 10.0, 10.0), 50.0);
        // Effective radius is half the side: the trace starts at the midpoint
        assert!(matches!(path.elements()[0], PathEl::MoveTo(p) if p == (5.0, 0.0).into()));
    }

    #[test]
    fn rounded_rect_zero_radius_is_a_rectangle() {
        let path = rounded_rect_path(Rect::new(1.0, 2.0, 9.0, 8.0), 0.0);
        let expected = vec![
            PathEl::MoveTo((1.0, 2.0).into()),
            PathEl::LineTo((9.0, 2.0).into()),
            PathEl::LineTo((9.0, 8.0).into()),
            PathEl::LineTo((1.0, 8.0).into()),
            PathEl::ClosePath,
        ];
        assert_eq!(path.elements(), expected.as_slice());
    }

    #[test]
    fn rounded_rect_degenerate_is_empty() {
        assert!(rounded_rect_path(Rect::new(0.0, 0.0, 0.0, 10.0), 4.0)
            .elements()
            .is_empty());
        assert!(rounded_rect_path(Rect::new(10.0, 0.0, 0.0, 10.0), 4.0)
            .elements()
            .is_empty());
    }

    #[test]
    fn arrow_points_are_symmetric_about_center() {
        let body = Rect::new(10.0, 10.0, 110.0, 90.0);
        let [base_right, shoulder_right, tip, shoulder_left, base_left] =
            arrow_points(body, 12.0, 3.0);
        let cx = 60.0;
        assert_close(tip.x, cx);
        assert_close(base_right.x - cx, cx - base_left.x);
        assert_close(base_right.x - cx, 12.0);
        assert_close(shoulder_right.x - cx, cx - shoulder_left.x);
        assert_close(base_right.y, body.y1);
        assert_close(base_left.y, body.y1);
        assert_close(shoulder_right.y, shoulder_left.y);
    }

    #[test]
    fn arrow_tip_is_sharp_with_zero_radius() {
        let body = Rect::new(0.0, 0.0, 100.0, 80.0);
        let [_, shoulder_right, tip, shoulder_left, _] = arrow_points(body, 8.0, 0.0);
        let point = dvec2(50.0, 88.0);
        assert_eq!(shoulder_right, point);
        assert_eq!(tip, point);
        assert_eq!(shoulder_left, point);
    }

    #[test]
    fn arrow_path_matches_reference_coordinates() {
        // Body (0,0)-(100,80), arrow 8, tip radius 1
        let path = arrow_path(Rect::new(0.0, 0.0, 100.0, 80.0), 8.0, 1.0);
        let expected = vec![
            PathEl::MoveTo((58.0, 80.0).into()),
            PathEl::LineTo((51.0, 87.0).into()),
            PathEl::QuadTo((50.0, 88.0).into(), (49.0, 87.0).into()),
            PathEl::LineTo((42.0, 80.0).into()),
            PathEl::ClosePath,
        ];
        assert_eq!(path.elements(), expected.as_slice());
    }

    #[test]
    fn arrow_path_zero_size_is_empty() {
        let path = arrow_path(Rect::new(0.0, 0.0, 100.0, 80.0), 0.0, 0.0);
        assert!(path.elements().is_empty());
    }

    #[test]
    fn outline_merges_body_and_arrow() {
        let body = Rect::new(4.0, 4.0, 196.0, 132.0);
        let outline = outline_path(body, 24.0, 24.0, 4.0);
        let opens = outline
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(opens, 2);
        assert_all_contours_closed(&outline);
    }

    #[test]
    fn outline_is_closed_for_all_parameters() {
        let body = Rect::new(0.0, 0.0, 60.0, 40.0);
        for (body_r, arrow, arrow_r) in [
            (0.0, 0.0, 0.0),
            (0.0, 10.0, 0.0),
            (8.0, 10.0, 2.0),
            (500.0, 10.0, 2.0),
            (8.0, 10.0, 50.0),
        ] {
            let outline = outline_path(body, body_r, arrow, arrow_r);
            assert!(!outline.elements().is_empty());
            assert_all_contours_closed(&outline);
        }
    }

    #[test]
    fn outline_degenerate_body_is_empty() {
        let body = body_rect(Size::new(6.0, 200.0), 4.0, 24.0);
        assert!(outline_path(body, 24.0, 24.0, 4.0).elements().is_empty());
    }
}
