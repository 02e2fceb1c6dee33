use serde::{Deserialize, Serialize};

use crate::core::{Axis, DrawArea, GlyphBox};
use crate::render::Surface;

use super::Plot;

/// A pluggable component that paints data into the plot's data area.
///
/// Renderers may additionally report glyph footprints and data ranges. The
/// plot discovers those capabilities through [`Renderer::glyph_boxer`] and
/// [`Renderer::data_ranger`] instead of assuming them.
pub trait Renderer {
    /// Paints into `area` using the two axes' normalization.
    fn plot(&self, surface: &mut dyn Surface, area: DrawArea, plot: &Plot, x: &Axis, y: &Axis);

    fn glyph_boxer(&self) -> Option<&dyn GlyphBoxer> {
        None
    }

    fn data_ranger(&self) -> Option<&dyn DataRanger> {
        None
    }
}

/// Capability of renderers whose marks must not be clipped at the data-area edge.
pub trait GlyphBoxer {
    /// Footprints of every mark this renderer intends to paint.
    ///
    /// Boxes with a positive size on a dimension whose normalized location is
    /// outside `[0, 1]` are dropped by the plot before padding.
    fn glyph_boxes(&self, plot: &Plot, x: &Axis, y: &Axis) -> Vec<GlyphBox>;
}

/// Capability of renderers that know the extent of their data.
pub trait DataRanger {
    fn data_range(&self) -> DataRange;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataRange {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// Draws a small icon for a legend entry.
pub trait Thumbnailer {
    fn thumbnail(&self, surface: &mut dyn Surface, area: DrawArea);
}
