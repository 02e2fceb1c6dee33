mod primitives;
mod recording;
mod text;

pub use primitives::{Color, LineStyle, Path, PathComp};
pub use recording::{DrawCommand, RecordingSurface};
pub use text::{Font, FontBook, FontExtents, FontFace, HAlign, TextAlign, TextStyle, VAlign};

use crate::core::Point;

/// Contract implemented by any drawing backend.
///
/// The layout core only issues paint commands in device coordinates that it
/// has already resolved; the backend owns encoding (raster, vector, screen).
/// Text rotation is carried by [`TextStyle::rotation`] and applied around the
/// anchor point after alignment.
pub trait Surface {
    fn set_color(&mut self, color: Color);
    /// Sets the stroke color, width and dash pattern for following strokes.
    fn set_line_style(&mut self, style: &LineStyle);
    fn fill(&mut self, path: &Path);
    fn stroke(&mut self, path: &Path);
    fn fill_text(&mut self, style: &TextStyle, at: Point, align: TextAlign, text: &str);
}

/// Strokes a polyline with `style`; invisible styles paint nothing.
pub fn stroke_line(surface: &mut dyn Surface, style: &LineStyle, points: &[Point]) {
    if !style.is_visible() || points.len() < 2 {
        return;
    }
    surface.set_line_style(style);
    surface.stroke(&Path::polyline(points));
}
