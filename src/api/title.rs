use crate::core::{DrawArea, Point};
use crate::render::{HAlign, Surface, TextAlign, TextStyle, VAlign};

/// Plot title, painted centred along the top edge of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    /// Empty text disables the title and its reserved space.
    pub text: String,
    /// Gap between the title and everything below it.
    pub padding: f64,
    pub style: TextStyle,
}

impl Title {
    #[must_use]
    pub fn new(style: TextStyle) -> Self {
        Self {
            text: String::new(),
            padding: 0.0,
            style,
        }
    }

    /// Height carved off the top of the canvas.
    #[must_use]
    pub fn reserved_height(&self) -> f64 {
        if self.text.is_empty() {
            return 0.0;
        }
        self.style.height(&self.text) + self.padding
    }

    pub fn draw(&self, surface: &mut dyn Surface, area: DrawArea) {
        if self.text.is_empty() {
            return;
        }
        surface.fill_text(
            &self.style,
            Point::new(area.center().x, area.max().y),
            TextAlign::new(HAlign::Center, VAlign::Top),
            &self.text,
        );
    }
}
