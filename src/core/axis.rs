use serde::{Deserialize, Serialize};

use crate::config::PlotConfig;
use crate::core::{DrawArea, TickMarker};
use crate::error::PlotResult;
use crate::render::{Color, FontBook, LineStyle, TextStyle};

/// Fraction of its magnitude by which an empty range is widened when one
/// unit is below its precision.
const RELATIVE_WIDENING: f64 = 1e-9;

/// Mapping used by [`Axis::norm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisScale {
    /// Uniform spacing in raw data units.
    #[default]
    Linear,
    /// Uniform spacing in natural-log units; the range must be positive.
    Log,
}

impl AxisScale {
    /// Normalizes `value` against `[min, max]` without clamping.
    #[must_use]
    pub fn normalize(self, min: f64, max: f64, value: f64) -> f64 {
        match self {
            Self::Linear => (value - min) / (max - min),
            Self::Log => {
                let log_min = min.ln();
                (value.ln() - log_min) / (max.ln() - log_min)
            }
        }
    }
}

/// Optional axis title painted beside the tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    /// Empty text disables the label and its reserved space.
    pub text: String,
    pub style: TextStyle,
}

/// Tick marks and tick labels of an axis.
#[derive(Debug, Clone)]
pub struct TickConfig {
    pub label: TextStyle,
    pub line: LineStyle,
    pub length: f64,
    pub marker: TickMarker,
}

/// One dimension of a plot: data range, scaling, ticks and styling.
///
/// Ranges start out inverted (`+∞`, `−∞`) so the first renderer that reports
/// a data range determines them; [`Axis::sanitize_range`] turns whatever is
/// left into a drawable `min < max` range.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub scale: AxisScale,
    pub label: AxisLabel,
    /// Style of the axis line.
    pub line: LineStyle,
    /// Gap between the axis footprint and the data area.
    pub padding: f64,
    pub tick: TickConfig,
    /// Draw on the right-hand side (tick labels to the right of the line).
    pub align_right: bool,
}

impl Axis {
    /// Builds an axis with the fonts and lengths from `config`.
    pub fn new(fonts: &FontBook, config: &PlotConfig) -> PlotResult<Self> {
        let label_font = fonts.resolve(&config.default_font, config.axis_label_font_size)?;
        let tick_font = fonts.resolve(&config.default_font, config.tick_label_font_size)?;
        let line = LineStyle::solid(Color::BLACK, config.axis_line_width);

        Ok(Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            scale: AxisScale::Linear,
            label: AxisLabel {
                text: String::new(),
                style: TextStyle::new(label_font),
            },
            line: line.clone(),
            padding: config.axis_padding,
            tick: TickConfig {
                label: TextStyle::new(tick_font),
                line,
                length: config.tick_length,
                marker: TickMarker::Default,
            },
            align_right: false,
        })
    }

    /// Makes the range drawable.
    ///
    /// Non-finite bounds become 0, an inverted range is swapped and an empty
    /// range is widened by one unit on each side. Values too large for a unit
    /// step to register are widened relative to their magnitude instead.
    pub fn sanitize_range(&mut self) {
        if !self.min.is_finite() {
            self.min = 0.0;
        }
        if !self.max.is_finite() {
            self.max = 0.0;
        }
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
        }
        if self.min == self.max {
            let value = self.min;
            let pad = (value.abs() * RELATIVE_WIDENING).max(1.0);
            self.min = value - pad;
            self.max = value + pad;
            if !self.min.is_finite() {
                self.min = value;
            }
            if !self.max.is_finite() {
                self.max = value;
            }
        }
    }

    /// Widens the range so it covers `[min, max]`; never narrows it.
    pub fn include_range(&mut self, min: f64, max: f64) {
        self.min = self.min.min(min);
        self.max = self.max.max(max);
    }

    /// Fractional position of `value` between `min` (0) and `max` (1).
    ///
    /// Out-of-range values extrapolate outside `[0, 1]`.
    #[must_use]
    pub fn norm(&self, value: f64) -> f64 {
        self.scale.normalize(self.min, self.max, value)
    }

    /// Whether ticks marks are painted at all.
    #[must_use]
    pub fn draws_ticks(&self) -> bool {
        self.tick.line.width > 0.0 && self.tick.length > 0.0
    }

    #[must_use]
    pub fn transform_x(&self, area: DrawArea) -> Transform {
        Transform {
            origin: area.min().x,
            extent: area.width(),
            min: self.min,
            max: self.max,
            scale: self.scale,
        }
    }

    #[must_use]
    pub fn transform_y(&self, area: DrawArea) -> Transform {
        Transform {
            origin: area.min().y,
            extent: area.height(),
            min: self.min,
            max: self.max,
            scale: self.scale,
        }
    }
}

/// Data → device mapping along one dimension of a [`DrawArea`].
///
/// Captures the axis range at creation time, so later range changes on the
/// axis do not affect an existing transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    origin: f64,
    extent: f64,
    min: f64,
    max: f64,
    scale: AxisScale,
}

impl Transform {
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        self.origin + self.extent * self.scale.normalize(self.min, self.max, value)
    }
}
