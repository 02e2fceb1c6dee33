use std::fmt;

use crate::config::PlotConfig;
use crate::core::{DrawArea, Point, Rect};
use crate::error::PlotResult;
use crate::render::{FontBook, HAlign, Surface, TextAlign, TextStyle, VAlign};

use super::Thumbnailer;

struct LegendEntry {
    text: String,
    thumbnails: Vec<Box<dyn Thumbnailer>>,
}

/// Stack of named entries with a thumbnail icon each.
///
/// Entries are laid out top to bottom in insertion order. By default the
/// stack hugs the bottom-right corner of the area it is given; `top` and
/// `left` move it to the opposite edges and the offsets nudge it from there.
pub struct Legend {
    pub text_style: TextStyle,
    /// Vertical gap between entries.
    pub padding: f64,
    pub top: bool,
    pub left: bool,
    pub x_offset: f64,
    pub y_offset: f64,
    pub thumbnail_width: f64,
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(fonts: &FontBook, config: &PlotConfig) -> PlotResult<Self> {
        let font = fonts.resolve(&config.default_font, config.legend_font_size)?;
        Ok(Self {
            text_style: TextStyle::new(font),
            padding: 0.0,
            top: false,
            left: false,
            x_offset: 0.0,
            y_offset: 0.0,
            thumbnail_width: config.legend_thumbnail_width,
            entries: Vec::new(),
        })
    }

    /// Appends an entry; its thumbnails are painted on top of each other.
    pub fn add(&mut self, name: impl Into<String>, thumbnails: Vec<Box<dyn Thumbnailer>>) {
        self.entries.push(LegendEntry {
            text: name.into(),
            thumbnails,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    /// Height of one entry row: the tallest entry text.
    #[must_use]
    pub fn entry_height(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| self.text_style.height(&entry.text))
            .fold(0.0, f64::max)
    }

    pub fn draw(&self, surface: &mut dyn Surface, area: DrawArea) {
        if self.entries.is_empty() {
            return;
        }

        let space = self.text_style.width(" ");
        let (mut icon_x, mut text_x, horizontal) = if self.left {
            let icon_x = area.min().x;
            (icon_x, icon_x + self.thumbnail_width + space, HAlign::Left)
        } else {
            let icon_x = area.max().x - self.thumbnail_width;
            (icon_x, icon_x - space, HAlign::Right)
        };
        icon_x += self.x_offset;
        text_x += self.x_offset;

        let entry_height = self.entry_height();
        let step = entry_height + self.padding;
        let mut y = if self.top {
            area.max().y - entry_height
        } else {
            area.min().y + step * (self.entries.len() - 1) as f64
        };
        y += self.y_offset;

        for entry in &self.entries {
            let icon = DrawArea::new(Rect::new(
                Point::new(icon_x, y),
                Point::new(icon_x + self.thumbnail_width, y + entry_height),
            ));
            for thumbnail in &entry.thumbnails {
                thumbnail.thumbnail(surface, icon);
            }
            let text_y = y + (entry_height - self.text_style.height(&entry.text)) / 2.0;
            surface.fill_text(
                &self.text_style,
                Point::new(text_x, text_y),
                TextAlign::new(horizontal, VAlign::Bottom),
                &entry.text,
            );
            y -= step;
        }
    }
}

impl fmt::Debug for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Legend")
            .field("text_style", &self.text_style)
            .field("padding", &self.padding)
            .field("top", &self.top)
            .field("left", &self.left)
            .field("x_offset", &self.x_offset)
            .field("y_offset", &self.y_offset)
            .field("thumbnail_width", &self.thumbnail_width)
            .field("entries", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::Legend;
    use crate::api::Thumbnailer;
    use crate::config::PlotConfig;
    use crate::core::DrawArea;
    use crate::render::{Color, DrawCommand, FontBook, RecordingSurface, Surface};

    struct Swatch;

    impl Thumbnailer for Swatch {
        fn thumbnail(&self, surface: &mut dyn Surface, area: DrawArea) {
            surface.set_color(Color::RED);
            surface.fill(&area.path());
        }
    }

    fn legend() -> Legend {
        Legend::new(&FontBook::standard(), &PlotConfig::default()).expect("legend")
    }

    #[test]
    fn empty_legend_paints_nothing() {
        let mut surface = RecordingSurface::new();
        legend().draw(&mut surface, DrawArea::with_size(100.0, 100.0));
        assert!(surface.is_empty());
    }

    #[test]
    fn entries_stack_downwards_from_bottom_right() {
        let mut legend = legend();
        legend.add("first", vec![Box::new(Swatch)]);
        legend.add("second", vec![Box::new(Swatch)]);

        let mut surface = RecordingSurface::new();
        legend.draw(&mut surface, DrawArea::with_size(200.0, 100.0));

        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0, "first");
        assert!(texts[0].1.y > texts[1].1.y);
        assert_abs_diff_eq!(texts[1].1.y, 0.0, epsilon = 1e-12);

        let space = legend.text_style.width(" ");
        assert_abs_diff_eq!(texts[0].1.x, 200.0 - 20.0 - space, epsilon = 1e-12);
    }

    #[test]
    fn thumbnails_fill_the_icon_column() {
        let mut legend = legend();
        legend.left = true;
        legend.top = true;
        legend.add("only", vec![Box::new(Swatch)]);

        let mut surface = RecordingSurface::new();
        legend.draw(&mut surface, DrawArea::with_size(200.0, 100.0));
        let fill = surface
            .commands()
            .iter()
            .find_map(|command| match command {
                DrawCommand::Fill(path) => Some(path.clone()),
                _ => None,
            })
            .expect("thumbnail fill");
        let xs: Vec<f64> = fill.points().map(|point| point.x).collect();
        assert!(xs.iter().all(|x| (0.0..=20.0).contains(x)));
        let top = fill.points().map(|point| point.y).fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(top, 100.0, epsilon = 1e-12);
    }
}
