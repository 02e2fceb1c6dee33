//! The linear draw pass of a [`Plot`].
//!
//! Every stage consumes the canvas left over by the previous one; the areas
//! only ever shrink. [`Plot::layout`] resolves all of them up front as plain
//! values so callers can inspect the result without painting.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{DrawArea, GlyphBox, pad_horizontal, pad_vertical};
use crate::render::{Color, LineStyle, Surface};

use super::{HorizontalAxis, Plot, VerticalAxis};

/// States of the draw pass, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawStage {
    Background,
    Title,
    PrimaryAxesSizing,
    PadX,
    PadY,
    VerticalAxis,
    HorizontalAxis,
    Data,
    Legend,
    SecondaryVerticalAxis,
}

/// Resolved areas of one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    /// The full area handed to the plot.
    pub canvas: DrawArea,
    /// Canvas left after the title is carved off.
    pub body: DrawArea,
    /// Height reserved by the horizontal axis.
    pub x_axis_height: f64,
    /// Width reserved by the primary vertical axis.
    pub y_axis_width: f64,
    /// Area the primary Y axis is drawn into, padded vertically.
    pub y_axis: DrawArea,
    /// Area the X axis is drawn into, padded horizontally.
    pub x_axis: DrawArea,
    /// Area renderers paint into.
    pub data: DrawArea,
    pub legend: DrawArea,
    pub secondary_y_axis: Option<DrawArea>,
    stages: SmallVec<[DrawStage; 10]>,
}

impl PlotLayout {
    #[must_use]
    pub fn stages(&self) -> &[DrawStage] {
        &self.stages
    }
}

impl Plot {
    /// Resolves every area of the draw pass for `area`.
    ///
    /// Sanitizes all axis ranges first, exactly like [`Plot::draw`].
    pub fn layout(&mut self, area: DrawArea) -> PlotLayout {
        self.sanitize_ranges();

        let mut stages: SmallVec<[DrawStage; 10]> = SmallVec::from_slice(&[
            DrawStage::Background,
            DrawStage::Title,
            DrawStage::PrimaryAxesSizing,
            DrawStage::PadX,
            DrawStage::PadY,
            DrawStage::VerticalAxis,
            DrawStage::HorizontalAxis,
            DrawStage::Data,
            DrawStage::Legend,
        ]);

        let body = area.crop(0.0, 0.0, 0.0, -self.title().reserved_height());
        let has_secondary = self.y_axes().len() > 1;
        let margin_right = if has_secondary {
            -self.config().secondary_axis_margin
        } else {
            0.0
        };

        let x_axis_height = HorizontalAxis::new(self.x_axis()).size();
        let y_axis_width = VerticalAxis::new(&self.y_axes()[0]).size();
        trace!(x_axis_height, y_axis_width, margin_right, "axis footprints");

        let glyphs = self.glyph_boxes();
        let y_axis = self.pad_y(body.crop(0.0, 0.0, x_axis_height, 0.0), &glyphs);
        let x_axis = self.pad_x(body.crop(y_axis_width, margin_right, 0.0, 0.0), &glyphs);
        let unpadded = body.crop(y_axis_width, margin_right, x_axis_height, 0.0);
        let data = self.pad_y(self.pad_x(unpadded, &glyphs), &glyphs);

        let secondary_y_axis = has_secondary.then(|| {
            stages.push(DrawStage::SecondaryVerticalAxis);
            let left = body.width() - self.config().secondary_axis_margin;
            self.pad_y(body.crop(left, 0.0, x_axis_height, 0.0), &glyphs)
        });

        debug!(
            min_x = data.min().x,
            min_y = data.min().y,
            max_x = data.max().x,
            max_y = data.max().y,
            glyphs = glyphs.len(),
            "resolved plot layout"
        );

        PlotLayout {
            canvas: area,
            body,
            x_axis_height,
            y_axis_width,
            y_axis,
            x_axis,
            data,
            legend: unpadded,
            secondary_y_axis,
            stages,
        }
    }

    /// Paints the whole plot into `area` of `surface`.
    ///
    /// Renderers paint in registration order, each with the X axis and its
    /// bound Y axis.
    pub fn draw(&mut self, surface: &mut dyn Surface, area: DrawArea) {
        let layout = self.layout(area);
        for &stage in layout.stages() {
            debug!(?stage, "draw stage");
            match stage {
                DrawStage::Background => {
                    if let Some(color) = self.background() {
                        surface.set_color(color);
                        surface.fill(&layout.canvas.path());
                    }
                }
                DrawStage::Title => self.title().draw(surface, layout.canvas),
                DrawStage::PrimaryAxesSizing => {
                    trace!(
                        x_axis_height = layout.x_axis_height,
                        y_axis_width = layout.y_axis_width,
                        "primary axes sized"
                    );
                }
                DrawStage::PadX | DrawStage::PadY => {}
                DrawStage::VerticalAxis => {
                    VerticalAxis::new(&self.y_axes()[0]).draw(surface, layout.y_axis);
                }
                DrawStage::HorizontalAxis => {
                    HorizontalAxis::new(self.x_axis()).draw(surface, layout.x_axis);
                }
                DrawStage::Data => {
                    for (renderer, y_axis) in self.renderers() {
                        renderer.plot(
                            surface,
                            layout.data,
                            self,
                            self.x_axis(),
                            &self.y_axes()[y_axis],
                        );
                    }
                }
                DrawStage::Legend => self.legend().draw(surface, layout.legend),
                DrawStage::SecondaryVerticalAxis => {
                    if let (Some(area), Some(axis)) = (layout.secondary_y_axis, self.y_axes().get(1))
                    {
                        let mut axis = axis.clone();
                        axis.align_right = true;
                        VerticalAxis::new(&axis).draw(surface, area);
                    }
                }
            }
        }
    }

    /// The area renderers paint into when the plot is drawn into `area`.
    pub fn data_area(&mut self, area: DrawArea) -> DrawArea {
        self.layout(area).data
    }

    /// Strokes a red outline around every renderer glyph box, positioned in
    /// the data area resolved for `area`.
    pub fn draw_glyph_boxes(&mut self, surface: &mut dyn Surface, area: DrawArea) {
        let data = self.data_area(area);
        surface.set_line_style(&LineStyle::solid(Color::RED, 1.0));
        for glyph in self.glyph_boxes() {
            surface.stroke(&glyph.device_rect(data).path());
        }
    }

    fn pad_x(&self, area: DrawArea, glyphs: &[GlyphBox]) -> DrawArea {
        let axis_glyphs = HorizontalAxis::new(self.x_axis()).glyph_boxes();
        pad_horizontal(area, glyphs, &axis_glyphs)
    }

    fn pad_y(&self, area: DrawArea, glyphs: &[GlyphBox]) -> DrawArea {
        let axis_glyphs: Vec<GlyphBox> = self
            .y_axes()
            .iter()
            .flat_map(|axis| VerticalAxis::new(axis).glyph_boxes())
            .collect();
        pad_vertical(area, glyphs, &axis_glyphs)
    }
}
