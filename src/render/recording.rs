use crate::core::{Point, Rect};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, LineStyle, Path, Surface, TextAlign, TextStyle};

/// One paint call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetColor(Color),
    SetLineStyle(LineStyle),
    Fill(Path),
    Stroke(Path),
    FillText {
        style: TextStyle,
        at: Point,
        align: TextAlign,
        text: String,
    },
}

/// Headless surface that records every paint call in order.
///
/// Used by tests and by hosts that want to inspect a draw pass before handing
/// it to a real encoder. It validates nothing while recording; call
/// [`RecordingSurface::validate`] to check the captured geometry.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text runs in paint order, with their anchor.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillText { text, at, .. } => Some((text.as_str(), *at)),
            _ => None,
        })
    }

    /// Stroked paths in paint order.
    pub fn strokes(&self) -> impl Iterator<Item = &Path> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Stroke(path) => Some(path),
            _ => None,
        })
    }

    /// Bounding box of all stroked and filled geometry plus text anchors.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.commands.iter().flat_map(|command| {
            let points: Vec<Point> = match command {
                DrawCommand::Fill(path) | DrawCommand::Stroke(path) => path.points().collect(),
                DrawCommand::FillText { at, .. } => vec![*at],
                DrawCommand::SetColor(_) | DrawCommand::SetLineStyle(_) => Vec::new(),
            };
            points
        }))
    }

    pub fn validate(&self) -> PlotResult<()> {
        for command in &self.commands {
            match command {
                DrawCommand::SetColor(color) => color.validate()?,
                DrawCommand::SetLineStyle(style) => {
                    style.color.validate()?;
                    if !style.width.is_finite() || style.width < 0.0 {
                        return Err(PlotError::InvalidData(
                            "line width must be finite and >= 0".to_owned(),
                        ));
                    }
                }
                DrawCommand::Fill(path) | DrawCommand::Stroke(path) => path.validate()?,
                DrawCommand::FillText { style, at, text, .. } => {
                    if text.is_empty() {
                        return Err(PlotError::InvalidData(
                            "text run must not be empty".to_owned(),
                        ));
                    }
                    if !at.is_finite() {
                        return Err(PlotError::InvalidData(
                            "text coordinates must be finite".to_owned(),
                        ));
                    }
                    style.color.validate()?;
                }
            }
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        self.commands.push(DrawCommand::SetLineStyle(style.clone()));
    }

    fn fill(&mut self, path: &Path) {
        self.commands.push(DrawCommand::Fill(path.clone()));
    }

    fn stroke(&mut self, path: &Path) {
        self.commands.push(DrawCommand::Stroke(path.clone()));
    }

    fn fill_text(&mut self, style: &TextStyle, at: Point, align: TextAlign, text: &str) {
        self.commands.push(DrawCommand::FillText {
            style: style.clone(),
            at,
            align,
            text: text.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawCommand, RecordingSurface};
    use crate::core::Point;
    use crate::render::{Color, LineStyle, Path, Surface, stroke_line};

    #[test]
    fn stroke_line_records_style_then_path() {
        let mut surface = RecordingSurface::new();
        let style = LineStyle::solid(Color::RED, 2.0);
        stroke_line(
            &mut surface,
            &style,
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        );

        assert_eq!(surface.commands().len(), 2);
        assert_eq!(surface.commands()[0], DrawCommand::SetLineStyle(style));
        assert!(matches!(surface.commands()[1], DrawCommand::Stroke(_)));
    }

    #[test]
    fn invisible_lines_are_not_recorded() {
        let mut surface = RecordingSurface::new();
        stroke_line(
            &mut surface,
            &LineStyle::solid(Color::BLACK, 0.0),
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        );
        assert!(surface.is_empty());
    }

    #[test]
    fn validate_flags_non_finite_geometry() {
        let mut surface = RecordingSurface::new();
        surface.fill(&Path::polygon(&[
            Point::new(0.0, 0.0),
            Point::new(f64::INFINITY, 0.0),
        ]));
        assert!(surface.validate().is_err());
    }

    #[test]
    fn bounds_cover_strokes_and_text_anchors() {
        let mut surface = RecordingSurface::new();
        surface.stroke(&Path::polyline(&[
            Point::new(-5.0, 2.0),
            Point::new(5.0, 2.0),
        ]));
        let bounds = surface.bounds().expect("bounds");
        assert_eq!(bounds.min, Point::new(-5.0, 2.0));
        assert_eq!(bounds.max, Point::new(5.0, 2.0));
    }
}
