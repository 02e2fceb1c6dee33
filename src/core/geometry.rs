use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::render::Path;

/// Horizontal/vertical slack used by [`DrawArea::contains_x`] and
/// [`DrawArea::contains_y`] so marks sitting exactly on an edge survive
/// floating point noise.
pub const CONTAINS_SLOP: f64 = 0.01;

/// A point in device space. The y axis points up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotates the point around the origin by `angle` radians (counter-clockwise).
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle given by its minimum (bottom-left) and maximum
/// (top-right) corners.
///
/// Glyph boxes reuse this type as an *offset* rectangle relative to an
/// anchor, so `min` may be negative and the rectangle may be degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Point::default(), Point::new(width, height))
    }

    #[must_use]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn translate(self, offset: Point) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Smallest rectangle containing every point, or `None` for an empty input.
    #[must_use]
    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Self>, point| {
            Some(match acc {
                None => Self::new(point, point),
                Some(rect) => Self::new(
                    Point::new(rect.min.x.min(point.x), rect.min.y.min(point.y)),
                    Point::new(rect.max.x.max(point.x), rect.max.y.max(point.y)),
                ),
            })
        })
    }

    /// Closed outline path, counter-clockwise from `min`.
    #[must_use]
    pub fn path(self) -> Path {
        Path::polygon(&[
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ])
    }
}

/// The rectangle a drawing stage is allowed to paint into.
///
/// `DrawArea` is a plain value: every layout stage receives one and returns a
/// freshly cropped one. Normalized `[0, 1]` positions map affinely onto the
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawArea {
    rect: Rect,
}

impl DrawArea {
    #[must_use]
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Area anchored at the origin with the given device size.
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(Rect::from_size(width, height))
    }

    #[must_use]
    pub fn rect(self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn min(self) -> Point {
        self.rect.min
    }

    #[must_use]
    pub fn max(self) -> Point {
        self.rect.max
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.rect.width()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.rect.height()
    }

    /// Device x coordinate of a normalized horizontal position.
    #[must_use]
    pub fn x(self, normalized: f64) -> f64 {
        self.rect.min.x + normalized * self.width()
    }

    /// Device y coordinate of a normalized vertical position.
    #[must_use]
    pub fn y(self, normalized: f64) -> f64 {
        self.rect.min.y + normalized * self.height()
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x(0.5), self.y(0.5))
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        self.rect.min.x <= x + CONTAINS_SLOP && x <= self.rect.max.x + CONTAINS_SLOP
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        self.rect.min.y <= y + CONTAINS_SLOP && y <= self.rect.max.y + CONTAINS_SLOP
    }

    /// Returns a new area whose edges are moved by the given signed offsets.
    ///
    /// Offsets are added to `min.x`, `max.x`, `min.y` and `max.y`
    /// respectively, so shrinking from the right or top uses negative values.
    #[must_use]
    pub fn crop(self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self::new(Rect::new(
            Point::new(self.rect.min.x + left, self.rect.min.y + bottom),
            Point::new(self.rect.max.x + right, self.rect.max.y + top),
        ))
    }

    /// Same area with its horizontal span replaced.
    #[must_use]
    pub fn with_x_span(self, min_x: f64, max_x: f64) -> Self {
        Self::new(Rect::new(
            Point::new(min_x, self.rect.min.y),
            Point::new(max_x, self.rect.max.y),
        ))
    }

    /// Same area with its vertical span replaced.
    #[must_use]
    pub fn with_y_span(self, min_y: f64, max_y: f64) -> Self {
        Self::new(Rect::new(
            Point::new(self.rect.min.x, min_y),
            Point::new(self.rect.max.x, max_y),
        ))
    }

    #[must_use]
    pub fn path(self) -> Path {
        self.rect.path()
    }
}
