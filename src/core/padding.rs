//! Glyph-aware padding of the data area.
//!
//! For each dimension the solver picks the two most extreme glyphs (leftmost
//! and rightmost, or bottommost and topmost) and shrinks the area so exactly
//! those two land on its edges. Because the normalized → device mapping is
//! affine, this is a closed-form 2×2 solve; interior glyphs are never
//! consulted.
//!
//! The near edge (left/bottom) only considers data glyphs. Axis tick-label
//! glyphs are passed separately and bound the far edge (right/top) only.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use tracing::{trace, warn};

use crate::core::{DrawArea, GlyphBox};

/// Spread of normalized positions below which two extreme glyphs are treated
/// as coincident.
pub const DEGENERATE_SPREAD: f64 = f64::EPSILON;

/// Leftmost glyph whose left edge pokes out of `area`, or a zero box at 0.
#[must_use]
pub fn left_most(area: DrawArea, boxes: &[GlyphBox]) -> GlyphBox {
    boxes
        .iter()
        .filter(|glyph| glyph.pads_horizontally() && glyph.x >= 0.0)
        .map(|glyph| (area.x(glyph.x) + glyph.rect.min.x, glyph))
        .filter(|(edge, _)| *edge < area.min().x)
        .min_by_key(|(edge, _)| OrderedFloat(*edge))
        .map_or_else(|| GlyphBox::at(0.0, 0.0), |(_, glyph)| *glyph)
}

/// Rightmost glyph whose right edge pokes out of `area`, or a zero box at 1.
#[must_use]
pub fn right_most(area: DrawArea, boxes: &[GlyphBox]) -> GlyphBox {
    boxes
        .iter()
        .filter(|glyph| glyph.pads_horizontally() && glyph.x <= 1.0)
        .map(|glyph| (area.x(glyph.x) + glyph.rect.min.x + glyph.size().x, glyph))
        .filter(|(edge, _)| *edge > area.max().x)
        .min_by_key(|(edge, _)| Reverse(OrderedFloat(*edge)))
        .map_or_else(|| GlyphBox::at(1.0, 0.0), |(_, glyph)| *glyph)
}

/// Bottommost glyph whose bottom edge pokes out of `area`, or a zero box at 0.
#[must_use]
pub fn bottom_most(area: DrawArea, boxes: &[GlyphBox]) -> GlyphBox {
    boxes
        .iter()
        .filter(|glyph| glyph.pads_vertically() && glyph.y >= 0.0)
        .map(|glyph| (area.y(glyph.y) + glyph.rect.min.y, glyph))
        .filter(|(edge, _)| *edge < area.min().y)
        .min_by_key(|(edge, _)| OrderedFloat(*edge))
        .map_or_else(|| GlyphBox::at(0.0, 0.0), |(_, glyph)| *glyph)
}

/// Topmost glyph whose top edge pokes out of `area`, or a zero box at 1.
#[must_use]
pub fn top_most(area: DrawArea, boxes: &[GlyphBox]) -> GlyphBox {
    boxes
        .iter()
        .filter(|glyph| glyph.pads_vertically() && glyph.y <= 1.0)
        .map(|glyph| (area.y(glyph.y) + glyph.rect.min.y + glyph.size().y, glyph))
        .filter(|(edge, _)| *edge > area.max().y)
        .min_by_key(|(edge, _)| Reverse(OrderedFloat(*edge)))
        .map_or_else(|| GlyphBox::at(0.0, 1.0), |(_, glyph)| *glyph)
}

/// Solves for the span `[new_min, new_max]` that puts the low glyph's near
/// edge on `raw_min` and the high glyph's far edge on `raw_max`.
///
/// `low_offset` is the low glyph's offset from its anchor to its near edge;
/// `high_offset` the high glyph's offset to its far edge. Returns `None` when
/// the two anchors coincide and the system has no unique solution.
#[must_use]
pub fn solve_span(
    raw_min: f64,
    raw_max: f64,
    low_norm: f64,
    low_offset: f64,
    high_norm: f64,
    high_offset: f64,
) -> Option<(f64, f64)> {
    let spread = low_norm - high_norm;
    if spread.abs() <= DEGENERATE_SPREAD {
        return None;
    }

    let min = raw_min - low_offset;
    let max = raw_max - high_offset;
    let new_min = (low_norm * max - high_norm * min) / spread;
    let new_max = ((low_norm - 1.0) * max - high_norm * min + min) / spread;
    Some((new_min, new_max))
}

/// Pads `area` horizontally so no data or x-axis glyph is clipped.
#[must_use]
pub fn pad_horizontal(area: DrawArea, glyphs: &[GlyphBox], axis_glyphs: &[GlyphBox]) -> DrawArea {
    let left = left_most(area, glyphs);
    let far_candidates: Vec<GlyphBox> = glyphs.iter().chain(axis_glyphs).copied().collect();
    let right = right_most(area, &far_candidates);

    match solve_span(
        area.min().x,
        area.max().x,
        left.x,
        left.rect.min.x,
        right.x,
        right.rect.min.x + right.size().x,
    ) {
        Some((min_x, max_x)) => {
            trace!(left = left.x, right = right.x, min_x, max_x, "horizontal padding");
            area.with_x_span(min_x, max_x)
        }
        None => {
            warn!(
                position = left.x,
                "extreme glyphs share a horizontal position; keeping unpadded area"
            );
            area
        }
    }
}

/// Pads `area` vertically so no data or y-axis glyph is clipped.
#[must_use]
pub fn pad_vertical(area: DrawArea, glyphs: &[GlyphBox], axis_glyphs: &[GlyphBox]) -> DrawArea {
    let bottom = bottom_most(area, glyphs);
    let far_candidates: Vec<GlyphBox> = glyphs.iter().chain(axis_glyphs).copied().collect();
    let top = top_most(area, &far_candidates);

    match solve_span(
        area.min().y,
        area.max().y,
        bottom.y,
        bottom.rect.min.y,
        top.y,
        top.rect.min.y + top.size().y,
    ) {
        Some((min_y, max_y)) => {
            trace!(bottom = bottom.y, top = top.y, min_y, max_y, "vertical padding");
            area.with_y_span(min_y, max_y)
        }
        None => {
            warn!(
                position = bottom.y,
                "extreme glyphs share a vertical position; keeping unpadded area"
            );
            area
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{left_most, pad_horizontal, pad_vertical, right_most, solve_span};
    use crate::core::{DrawArea, GlyphBox};

    fn area() -> DrawArea {
        DrawArea::with_size(100.0, 100.0)
    }

    #[test]
    fn no_glyphs_leave_the_area_untouched() {
        assert_eq!(pad_horizontal(area(), &[], &[]), area());
        assert_eq!(pad_vertical(area(), &[], &[]), area());
    }

    #[test]
    fn glyphs_inside_the_area_need_no_padding() {
        let glyphs = [GlyphBox::centered(0.5, 0.5, 10.0, 10.0)];
        assert_eq!(pad_horizontal(area(), &glyphs, &[]), area());
    }

    #[test]
    fn edge_glyphs_land_exactly_on_the_area_edges() {
        let glyphs = [
            GlyphBox::centered(0.0, 0.5, 10.0, 10.0),
            GlyphBox::centered(1.0, 0.5, 20.0, 10.0),
        ];
        let padded = pad_horizontal(area(), &glyphs, &[]);
        assert_abs_diff_eq!(padded.min().x, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(padded.max().x, 90.0, epsilon = 1e-9);

        for glyph in &glyphs {
            let rect = glyph.device_rect(padded);
            assert!(rect.min.x >= -1e-9);
            assert!(rect.max.x <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn interior_extreme_glyph_is_solved_affinely() {
        let glyphs = [GlyphBox::centered(0.25, 0.5, 80.0, 0.0)];
        let padded = pad_horizontal(area(), &glyphs, &[GlyphBox::centered(1.0, 0.0, 0.0, 0.0)]);
        let rect = glyphs[0].device_rect(padded);
        assert_abs_diff_eq!(rect.min.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn near_edge_ignores_axis_glyphs() {
        let axis_glyphs = [GlyphBox::centered(0.0, 0.0, 30.0, 0.0)];
        let padded = pad_horizontal(area(), &[], &axis_glyphs);
        assert_eq!(padded.min().x, 0.0);
    }

    #[test]
    fn far_edge_includes_axis_glyphs() {
        let axis_glyphs = [GlyphBox::centered(1.0, 0.0, 30.0, 0.0)];
        let padded = pad_horizontal(area(), &[], &axis_glyphs);
        assert_abs_diff_eq!(padded.max().x, 85.0, epsilon = 1e-9);
    }

    #[test]
    fn vertical_padding_mirrors_horizontal() {
        let glyphs = [
            GlyphBox::centered(0.5, 0.0, 0.0, 8.0),
            GlyphBox::centered(0.5, 1.0, 0.0, 12.0),
        ];
        let padded = pad_vertical(area(), &glyphs, &[]);
        assert_abs_diff_eq!(padded.min().y, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(padded.max().y, 94.0, epsilon = 1e-9);
        assert_eq!(padded.min().x, 0.0);
    }

    #[test]
    fn coincident_extremes_fall_back_to_raw_area() {
        let glyphs = [GlyphBox::centered(1.0, 0.5, 400.0, 0.0)];
        let left = left_most(area(), &glyphs);
        let right = right_most(area(), &glyphs);
        assert_eq!(left.x, right.x);
        assert_eq!(pad_horizontal(area(), &glyphs, &[]), area());
        assert!(solve_span(0.0, 100.0, 0.5, 0.0, 0.5, 0.0).is_none());
    }

    #[test]
    fn first_of_equally_extreme_glyphs_wins() {
        let first = GlyphBox::centered(0.0, 0.1, 10.0, 0.0);
        let second = GlyphBox::centered(0.0, 0.9, 10.0, 0.0);
        assert_eq!(left_most(area(), &[first, second]), first);
        let first = GlyphBox::centered(1.0, 0.1, 10.0, 0.0);
        let second = GlyphBox::centered(1.0, 0.9, 10.0, 0.0);
        assert_eq!(right_most(area(), &[first, second]), first);
    }
}
