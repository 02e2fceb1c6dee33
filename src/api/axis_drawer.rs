use std::f64::consts::FRAC_PI_2;

use crate::core::{Axis, DrawArea, GlyphBox, Point, Tick};
use crate::render::{HAlign, Surface, TextAlign, TextStyle, VAlign, stroke_line};

const HORIZONTAL_TICK_ALIGN: TextAlign = TextAlign::new(HAlign::Center, VAlign::Top);
const LEFT_TICK_ALIGN: TextAlign = TextAlign::new(HAlign::Right, VAlign::Center);
const RIGHT_TICK_ALIGN: TextAlign = TextAlign::new(HAlign::Left, VAlign::Center);

/// Tallest major tick label, measured with the style's rotation.
fn major_label_height(style: &TextStyle, ticks: &[Tick]) -> f64 {
    ticks
        .iter()
        .filter(|tick| !tick.is_minor())
        .map(|tick| style.rectangle(&tick.label, HORIZONTAL_TICK_ALIGN).height())
        .fold(0.0, f64::max)
}

/// Widest major tick label, measured with the style's rotation.
fn major_label_width(style: &TextStyle, ticks: &[Tick]) -> f64 {
    ticks
        .iter()
        .filter(|tick| !tick.is_minor())
        .map(|tick| style.rectangle(&tick.label, LEFT_TICK_ALIGN).width())
        .fold(0.0, f64::max)
}

/// Draws an [`Axis`] as the horizontal axis below the data area.
///
/// The footprint is stacked bottom-up: axis label, tick labels, tick marks,
/// half the axis line, padding.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalAxis<'a> {
    axis: &'a Axis,
}

impl<'a> HorizontalAxis<'a> {
    #[must_use]
    pub fn new(axis: &'a Axis) -> Self {
        Self { axis }
    }

    /// Height reserved below the data area.
    #[must_use]
    pub fn size(&self) -> f64 {
        let axis = self.axis;
        let mut height = 0.0;
        if !axis.label.text.is_empty() {
            height += axis.label.style.height(&axis.label.text);
        }
        let ticks = axis.tick.marker.ticks(axis.min, axis.max);
        if !ticks.is_empty() {
            if axis.draws_ticks() {
                height += axis.tick.length;
            }
            height += major_label_height(&axis.tick.label, &ticks);
        }
        height + axis.line.width / 2.0 + axis.padding
    }

    /// Paints the axis into `area`; only `area.min().y` and the horizontal
    /// span are used.
    pub fn draw(&self, surface: &mut dyn Surface, area: DrawArea) {
        let axis = self.axis;
        let mut y = area.min().y;

        if !axis.label.text.is_empty() {
            surface.fill_text(
                &axis.label.style,
                Point::new(area.center().x, y),
                TextAlign::new(HAlign::Center, VAlign::Bottom),
                &axis.label.text,
            );
            y += axis.label.style.height(&axis.label.text);
        }

        let ticks = axis.tick.marker.ticks(axis.min, axis.max);
        if !ticks.is_empty() {
            let label_height = major_label_height(&axis.tick.label, &ticks);
            for tick in ticks.iter().filter(|tick| !tick.is_minor()) {
                let x = area.x(axis.norm(tick.value));
                if !area.contains_x(x) {
                    continue;
                }
                surface.fill_text(
                    &axis.tick.label,
                    Point::new(x, y + label_height),
                    HORIZONTAL_TICK_ALIGN,
                    &tick.label,
                );
            }
            y += label_height;

            if axis.draws_ticks() {
                let length = axis.tick.length;
                for tick in &ticks {
                    let x = area.x(axis.norm(tick.value));
                    if !area.contains_x(x) {
                        continue;
                    }
                    stroke_line(
                        surface,
                        &axis.tick.line,
                        &[
                            Point::new(x, y + tick.length_offset(length)),
                            Point::new(x, y + length),
                        ],
                    );
                }
                y += length;
            }
        }

        y += axis.line.width / 2.0;
        stroke_line(
            surface,
            &axis.line,
            &[Point::new(area.min().x, y), Point::new(area.max().x, y)],
        );
    }

    /// Footprints of the major tick labels, centred on their ticks.
    #[must_use]
    pub fn glyph_boxes(&self) -> Vec<GlyphBox> {
        let axis = self.axis;
        axis.tick
            .marker
            .ticks(axis.min, axis.max)
            .iter()
            .filter(|tick| !tick.is_minor())
            .map(|tick| {
                let width = axis
                    .tick
                    .label
                    .rectangle(&tick.label, HORIZONTAL_TICK_ALIGN)
                    .width();
                GlyphBox::centered(axis.norm(tick.value), 0.0, width, 0.0)
            })
            .collect()
    }
}

/// Draws an [`Axis`] as a vertical axis.
///
/// Left-aligned axes stack their footprint left to right: rotated label,
/// tick labels, a space, tick marks, half the line, padding. Right-aligned
/// axes mirror that order starting from the data side.
#[derive(Debug, Clone, Copy)]
pub struct VerticalAxis<'a> {
    axis: &'a Axis,
}

impl<'a> VerticalAxis<'a> {
    #[must_use]
    pub fn new(axis: &'a Axis) -> Self {
        Self { axis }
    }

    /// Width reserved beside the data area.
    #[must_use]
    pub fn size(&self) -> f64 {
        let axis = self.axis;
        let mut width = 0.0;
        if !axis.label.text.is_empty() {
            width += axis.label.style.height(&axis.label.text);
        }
        let ticks = axis.tick.marker.ticks(axis.min, axis.max);
        if !ticks.is_empty() {
            let label_width = major_label_width(&axis.tick.label, &ticks);
            if label_width > 0.0 {
                width += label_width + axis.tick.label.width(" ");
            }
            if axis.draws_ticks() {
                width += axis.tick.length;
            }
        }
        width + axis.line.width / 2.0 + axis.padding
    }

    /// Paints the axis into `area`; only the vertical span and `area.min().x`
    /// are used.
    pub fn draw(&self, surface: &mut dyn Surface, area: DrawArea) {
        if self.axis.align_right {
            self.draw_right(surface, area);
        } else {
            self.draw_left(surface, area);
        }
    }

    fn draw_left(&self, surface: &mut dyn Surface, area: DrawArea) {
        let axis = self.axis;
        let mut x = area.min().x;

        if !axis.label.text.is_empty() {
            surface.fill_text(
                &axis.label.style.rotated(FRAC_PI_2),
                Point::new(x, area.center().y),
                TextAlign::new(HAlign::Center, VAlign::Top),
                &axis.label.text,
            );
            x += axis.label.style.height(&axis.label.text);
        }

        let ticks = axis.tick.marker.ticks(axis.min, axis.max);
        let label_width = major_label_width(&axis.tick.label, &ticks);
        if label_width > 0.0 {
            x += label_width;
            for tick in ticks.iter().filter(|tick| !tick.is_minor()) {
                let y = area.y(axis.norm(tick.value));
                if !area.contains_y(y) {
                    continue;
                }
                surface.fill_text(
                    &axis.tick.label,
                    Point::new(x, y),
                    LEFT_TICK_ALIGN,
                    &tick.label,
                );
            }
            x += axis.tick.label.width(" ");
        }

        if axis.draws_ticks() && !ticks.is_empty() {
            let length = axis.tick.length;
            for tick in &ticks {
                let y = area.y(axis.norm(tick.value));
                if !area.contains_y(y) {
                    continue;
                }
                stroke_line(
                    surface,
                    &axis.tick.line,
                    &[
                        Point::new(x + tick.length_offset(length), y),
                        Point::new(x + length, y),
                    ],
                );
            }
            x += length;
        }

        x += axis.line.width / 2.0;
        stroke_line(
            surface,
            &axis.line,
            &[Point::new(x, area.min().y), Point::new(x, area.max().y)],
        );
    }

    fn draw_right(&self, surface: &mut dyn Surface, area: DrawArea) {
        let axis = self.axis;
        let mut x = area.min().x + axis.padding + axis.line.width / 2.0;
        stroke_line(
            surface,
            &axis.line,
            &[Point::new(x, area.min().y), Point::new(x, area.max().y)],
        );

        let ticks = axis.tick.marker.ticks(axis.min, axis.max);
        if axis.draws_ticks() && !ticks.is_empty() {
            let length = axis.tick.length;
            for tick in &ticks {
                let y = area.y(axis.norm(tick.value));
                if !area.contains_y(y) {
                    continue;
                }
                stroke_line(
                    surface,
                    &axis.tick.line,
                    &[
                        Point::new(x, y),
                        Point::new(x + length - tick.length_offset(length), y),
                    ],
                );
            }
            x += length;
        }

        let label_width = major_label_width(&axis.tick.label, &ticks);
        if label_width > 0.0 {
            x += axis.tick.label.width(" ");
            for tick in ticks.iter().filter(|tick| !tick.is_minor()) {
                let y = area.y(axis.norm(tick.value));
                if !area.contains_y(y) {
                    continue;
                }
                surface.fill_text(
                    &axis.tick.label,
                    Point::new(x, y),
                    RIGHT_TICK_ALIGN,
                    &tick.label,
                );
            }
            x += label_width;
        }

        if !axis.label.text.is_empty() {
            surface.fill_text(
                &axis.label.style.rotated(-FRAC_PI_2),
                Point::new(x, area.center().y),
                TextAlign::new(HAlign::Center, VAlign::Bottom),
                &axis.label.text,
            );
        }
    }

    /// Footprints of the major tick labels, centred on their ticks.
    #[must_use]
    pub fn glyph_boxes(&self) -> Vec<GlyphBox> {
        let axis = self.axis;
        axis.tick
            .marker
            .ticks(axis.min, axis.max)
            .iter()
            .filter(|tick| !tick.is_minor())
            .map(|tick| {
                let height = axis
                    .tick
                    .label
                    .rectangle(&tick.label, LEFT_TICK_ALIGN)
                    .height();
                GlyphBox::centered(0.0, axis.norm(tick.value), 0.0, height)
            })
            .collect()
    }
}
