use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Point, Rect};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Size-independent proportions of a font face, as fractions of the em size.
///
/// Real glyph metrics are computed outside this crate; a face only carries
/// the handful of numbers layout needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontFace {
    /// Scale applied to the proportional advance table.
    pub width_scale: f64,
    /// Fixed advance for monospaced faces; overrides the proportional table.
    pub monospace_advance: Option<f64>,
    pub ascent: f64,
    pub descent: f64,
    /// Baseline-to-baseline distance between lines.
    pub line_height: f64,
}

impl FontFace {
    #[must_use]
    pub const fn proportional(width_scale: f64) -> Self {
        Self {
            width_scale,
            monospace_advance: None,
            ascent: 0.72,
            descent: 0.22,
            line_height: 1.15,
        }
    }

    #[must_use]
    pub const fn monospace(advance: f64) -> Self {
        Self {
            width_scale: 1.0,
            monospace_advance: Some(advance),
            ascent: 0.72,
            descent: 0.22,
            line_height: 1.15,
        }
    }

    fn advance_units(&self, line: &str) -> f64 {
        if let Some(advance) = self.monospace_advance {
            return advance * line.chars().count() as f64;
        }
        let units = line.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.56,
                '.' | ',' | ':' | ';' | '\'' | '|' | 'i' | 'l' | 'j' => 0.28,
                '-' | '+' | '%' | '(' | ')' => 0.42,
                ' ' => 0.28,
                'm' | 'w' | 'M' | 'W' => 0.86,
                'A'..='Z' => 0.68,
                _ => 0.52,
            }
        });
        units * self.width_scale
    }
}

/// Vertical font metrics at a concrete size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontExtents {
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: f64,
    /// Distance from the baseline down to the lowest glyph point (positive).
    pub descent: f64,
    /// Recommended baseline-to-baseline distance.
    pub height: f64,
}

/// A resolved font: name, size and the face proportions used for measuring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub name: String,
    pub size: f64,
    pub face: FontFace,
}

impl Font {
    /// Width of the widest line of `text`.
    #[must_use]
    pub fn width(&self, text: &str) -> f64 {
        text.lines()
            .map(|line| self.face.advance_units(line) * self.size)
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn extents(&self) -> FontExtents {
        FontExtents {
            ascent: self.face.ascent * self.size,
            descent: self.face.descent * self.size,
            height: self.face.line_height * self.size,
        }
    }

    #[must_use]
    pub fn with_size(&self, size: f64) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

/// Name → face registry used to resolve fonts at plot construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct FontBook {
    faces: IndexMap<String, FontFace>,
}

impl FontBook {
    /// An empty book; every resolution fails until faces are registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            faces: IndexMap::new(),
        }
    }

    /// Book pre-populated with the fourteen standard PDF base fonts.
    #[must_use]
    pub fn standard() -> Self {
        let mut book = Self::empty();
        for name in [
            "Times-Roman",
            "Times-Italic",
            "Helvetica",
            "Helvetica-Oblique",
        ] {
            book.register(name, FontFace::proportional(1.0));
        }
        for name in [
            "Times-Bold",
            "Times-BoldItalic",
            "Helvetica-Bold",
            "Helvetica-BoldOblique",
        ] {
            book.register(name, FontFace::proportional(1.08));
        }
        for name in [
            "Courier",
            "Courier-Bold",
            "Courier-Oblique",
            "Courier-BoldOblique",
        ] {
            book.register(name, FontFace::monospace(0.6));
        }
        book.register("Symbol", FontFace::proportional(1.05));
        book.register("ZapfDingbats", FontFace::proportional(1.4));
        book
    }

    /// Adds or replaces a face.
    pub fn register(&mut self, name: impl Into<String>, face: FontFace) {
        self.faces.insert(name.into(), face);
    }

    pub fn resolve(&self, name: &str, size: f64) -> PlotResult<Font> {
        if !size.is_finite() || size <= 0.0 {
            return Err(PlotError::FontResolution {
                name: name.to_owned(),
                reason: format!("size must be finite and > 0, got {size}"),
            });
        }
        let face = self
            .faces
            .get(name)
            .copied()
            .ok_or_else(|| PlotError::FontResolution {
                name: name.to_owned(),
                reason: "no such face registered".to_owned(),
            })?;
        debug!(name, size, "resolved font");
        Ok(Font {
            name: name.to_owned(),
            size,
            face,
        })
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::standard()
    }
}

/// Horizontal anchor of a text box relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    /// Offset of the box's left edge, as a fraction of its width.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => -0.5,
            Self::Right => -1.0,
        }
    }
}

/// Vertical anchor of a text box relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VAlign {
    #[default]
    Bottom,
    Center,
    Top,
}

impl VAlign {
    /// Offset of the box's bottom edge, as a fraction of its height.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Bottom => 0.0,
            Self::Center => -0.5,
            Self::Top => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextAlign {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl TextAlign {
    #[must_use]
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Color, font and rotation used to paint a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub font: Font,
    /// Counter-clockwise rotation in radians around the anchor point.
    #[serde(default)]
    pub rotation: f64,
}

impl TextStyle {
    #[must_use]
    pub fn new(font: Font) -> Self {
        Self {
            color: Color::BLACK,
            font,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub fn rotated(&self, rotation: f64) -> Self {
        Self {
            rotation,
            ..self.clone()
        }
    }

    /// Unrotated width of `text`.
    #[must_use]
    pub fn width(&self, text: &str) -> f64 {
        self.font.width(text)
    }

    /// Unrotated height of `text`; zero for the empty string.
    #[must_use]
    pub fn height(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let extents = self.font.extents();
        let lines = text.lines().count().max(1);
        extents.ascent + extents.descent + extents.height * (lines - 1) as f64
    }

    /// Bounding box of `text` relative to its anchor, after alignment and rotation.
    #[must_use]
    pub fn rectangle(&self, text: &str, align: TextAlign) -> Rect {
        let width = self.width(text);
        let height = self.height(text);
        let min = Point::new(
            align.horizontal.fraction() * width,
            align.vertical.fraction() * height,
        );
        let unrotated = Rect::new(min, Point::new(min.x + width, min.y + height));
        if self.rotation == 0.0 {
            return unrotated;
        }

        let corners = [
            unrotated.min,
            Point::new(unrotated.max.x, unrotated.min.y),
            unrotated.max,
            Point::new(unrotated.min.x, unrotated.max.y),
        ];
        Rect::bounding(corners.into_iter().map(|corner| corner.rotate(self.rotation)))
            .unwrap_or(unrotated)
    }
}
