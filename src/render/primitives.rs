use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Stroke settings for axis lines, tick marks and renderer outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    /// Alternating on/off dash lengths; empty means a solid line.
    #[serde(default)]
    pub dashes: Vec<f64>,
    #[serde(default)]
    pub dash_offset: f64,
}

impl LineStyle {
    #[must_use]
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashes: Vec::new(),
            dash_offset: 0.0,
        }
    }

    /// Lines with a non-positive width are not painted at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 0.5)
    }
}

/// One segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathComp {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A sequence of move/line/close commands in device space.
///
/// Most paths painted by the layout core are tick marks, axis lines and
/// rectangles, so a handful of components are kept inline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    comps: SmallVec<[PathComp; 5]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open polyline through `points`.
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        for (index, point) in points.iter().enumerate() {
            if index == 0 {
                path.move_to(*point);
            } else {
                path.line_to(*point);
            }
        }
        path
    }

    /// Closed polygon through `points`.
    #[must_use]
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::polyline(points);
        if !points.is_empty() {
            path.close();
        }
        path
    }

    pub fn move_to(&mut self, point: Point) {
        self.comps.push(PathComp::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.comps.push(PathComp::LineTo(point));
    }

    pub fn close(&mut self) {
        self.comps.push(PathComp::Close);
    }

    #[must_use]
    pub fn comps(&self) -> &[PathComp] {
        &self.comps
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.comps.iter().filter_map(|comp| match comp {
            PathComp::MoveTo(point) | PathComp::LineTo(point) => Some(*point),
            PathComp::Close => None,
        })
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.points().all(Point::is_finite) {
            Ok(())
        } else {
            Err(PlotError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ))
        }
    }
}
