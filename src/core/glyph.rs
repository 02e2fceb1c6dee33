use serde::{Deserialize, Serialize};

use crate::core::{DrawArea, Point, Rect};

/// Footprint of one drawable mark, used to keep it from being clipped.
///
/// `x`/`y` locate the mark in normalized data-area coordinates; `rect` is the
/// offset of the mark's bounding box from that location plus its size, in
/// device units. A non-positive size on one dimension opts the glyph out of
/// padding along that dimension (bars sitting on zero, for example).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlyphBox {
    pub x: f64,
    pub y: f64,
    pub rect: Rect,
}

impl GlyphBox {
    #[must_use]
    pub const fn new(x: f64, y: f64, rect: Rect) -> Self {
        Self { x, y, rect }
    }

    /// A zero-size box at a normalized location.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, Rect::default())
    }

    /// A `width × height` box centred on its location.
    #[must_use]
    pub fn centered(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            x,
            y,
            Rect::new(
                Point::new(-width / 2.0, -height / 2.0),
                Point::new(width / 2.0, height / 2.0),
            ),
        )
    }

    #[must_use]
    pub fn size(&self) -> Point {
        self.rect.size()
    }

    /// Whether the box takes part in horizontal padding at all.
    #[must_use]
    pub fn pads_horizontally(&self) -> bool {
        self.size().x > 0.0
    }

    /// Whether the box takes part in vertical padding at all.
    #[must_use]
    pub fn pads_vertically(&self) -> bool {
        self.size().y > 0.0
    }

    /// Whether a box reported by a renderer survives collection.
    ///
    /// A box whose size is positive on a dimension must lie within `[0, 1]`
    /// on that dimension; the two tests are independent.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        let unit = 0.0..=1.0;
        if self.pads_horizontally() && !unit.contains(&self.x) {
            return false;
        }
        if self.pads_vertically() && !unit.contains(&self.y) {
            return false;
        }
        true
    }

    /// Device-space bounding box within `area`.
    #[must_use]
    pub fn device_rect(&self, area: DrawArea) -> Rect {
        self.rect.translate(Point::new(area.x(self.x), area.y(self.y)))
    }
}
