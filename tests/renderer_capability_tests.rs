use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use plot_rs::Plot;
use plot_rs::api::{DataRange, DataRanger, GlyphBoxer, Renderer, Thumbnailer};
use plot_rs::core::{Axis, DrawArea, GlyphBox};
use plot_rs::render::{Color, DrawCommand, RecordingSurface, Surface};

/// Plain renderer: no optional capabilities, logs its name when painted.
struct Painter {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Renderer for Painter {
    fn plot(&self, _: &mut dyn Surface, _: DrawArea, _: &Plot, _: &Axis, _: &Axis) {
        self.log.borrow_mut().push(self.name);
    }
}

/// Renderer reporting a fixed set of glyph boxes.
struct Marks(Vec<GlyphBox>);

impl Renderer for Marks {
    fn plot(&self, surface: &mut dyn Surface, area: DrawArea, _: &Plot, _: &Axis, _: &Axis) {
        for glyph in &self.0 {
            surface.fill(&glyph.device_rect(area).path());
        }
    }

    fn glyph_boxer(&self) -> Option<&dyn GlyphBoxer> {
        Some(self)
    }
}

impl GlyphBoxer for Marks {
    fn glyph_boxes(&self, _: &Plot, _: &Axis, _: &Axis) -> Vec<GlyphBox> {
        self.0.clone()
    }
}

struct Ranged(DataRange);

impl Renderer for Ranged {
    fn plot(&self, _: &mut dyn Surface, _: DrawArea, _: &Plot, _: &Axis, _: &Axis) {}

    fn data_ranger(&self) -> Option<&dyn DataRanger> {
        Some(self)
    }
}

impl DataRanger for Ranged {
    fn data_range(&self) -> DataRange {
        self.0
    }
}

struct Swatch(Color);

impl Thumbnailer for Swatch {
    fn thumbnail(&self, surface: &mut dyn Surface, area: DrawArea) {
        surface.set_color(self.0);
        surface.fill(&area.path());
    }
}

#[test]
fn renderers_paint_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut plot = Plot::new().expect("plot");
    for name in ["first", "second", "third"] {
        plot.add(Painter {
            name,
            log: Rc::clone(&log),
        });
    }

    plot.draw(&mut RecordingSurface::new(), DrawArea::with_size(100.0, 100.0));
    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn renderers_without_capabilities_leave_ranges_and_padding_alone() {
    let mut plot = Plot::new().expect("plot");
    plot.add(Painter {
        name: "plain",
        log: Rc::default(),
    });
    assert_eq!(plot.x_axis().min, f64::INFINITY);
    assert!(plot.glyph_boxes().is_empty());
}

#[test]
fn data_ranges_only_widen_axes() {
    let mut plot = Plot::new().expect("plot");
    plot.add(Ranged(DataRange::new(0.0, 10.0, -5.0, 5.0)));
    plot.add(Ranged(DataRange::new(2.0, 4.0, -1.0, 1.0)));
    assert_eq!((plot.x_axis().min, plot.x_axis().max), (0.0, 10.0));
    assert_eq!((plot.y_axes()[0].min, plot.y_axes()[0].max), (-5.0, 5.0));

    plot.add(Ranged(DataRange::new(-3.0, 4.0, 2.0, 9.0)));
    assert_eq!((plot.x_axis().min, plot.x_axis().max), (-3.0, 10.0));
    assert_eq!((plot.y_axes()[0].min, plot.y_axes()[0].max), (-5.0, 9.0));
}

#[test]
fn out_of_range_glyphs_are_filtered_per_dimension() {
    let mut plot = Plot::new().expect("plot");
    plot.add(Marks(vec![
        GlyphBox::centered(1.5, 0.5, 4.0, 4.0),
        GlyphBox::centered(1.5, 0.5, 0.0, 4.0),
        GlyphBox::centered(0.5, -0.2, 4.0, 0.0),
        GlyphBox::centered(0.5, -0.2, 4.0, 4.0),
        GlyphBox::centered(0.5, 0.5, 4.0, 4.0),
    ]));
    let boxes = plot.glyph_boxes();
    assert_eq!(boxes.len(), 3);
    assert!(boxes.iter().all(GlyphBox::is_in_range));
}

#[test]
fn edge_glyphs_are_not_clipped() {
    let area = DrawArea::with_size(300.0, 200.0);
    let mut reference = Plot::new().expect("plot");
    reference.hide_axes();
    let unpadded = reference.data_area(area);

    let marks = vec![
        GlyphBox::centered(0.0, 0.0, 12.0, 12.0),
        GlyphBox::centered(1.0, 1.0, 30.0, 8.0),
        GlyphBox::centered(0.5, 0.5, 6.0, 6.0),
    ];
    let mut plot = Plot::new().expect("plot");
    plot.hide_axes();
    plot.add(Marks(marks));
    let data = plot.data_area(area);

    assert_abs_diff_eq!(data.min().x, unpadded.min().x + 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(data.max().x, unpadded.max().x - 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(data.min().y, unpadded.min().y + 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(data.max().y, unpadded.max().y - 4.0, epsilon = 1e-9);

    let mut surface = RecordingSurface::new();
    plot.draw(&mut surface, area);
    let bounds = surface.bounds().expect("marks painted");
    assert!(bounds.min.x >= -1e-9 && bounds.min.y >= -1e-9);
    assert!(bounds.max.x <= 300.0 + 1e-9 && bounds.max.y <= 200.0 + 1e-9);
}

#[test]
fn bar_like_glyphs_only_pad_along_their_sized_dimension() {
    let area = DrawArea::with_size(300.0, 200.0);
    let mut plot = Plot::new().expect("plot");
    plot.hide_axes();
    plot.add(Marks(vec![
        GlyphBox::centered(0.0, 0.0, 20.0, 0.0),
        GlyphBox::centered(1.0, 0.0, 20.0, 0.0),
    ]));
    let data = plot.data_area(area);
    assert_abs_diff_eq!(data.min().x, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(data.max().x, 290.0, epsilon = 1e-9);
    assert_eq!(data.min().y, 0.0);
    assert_eq!(data.max().y, 200.0);
}

#[test]
fn debug_overlay_outlines_every_glyph() {
    let mut plot = Plot::new().expect("plot");
    plot.add(Marks(vec![
        GlyphBox::centered(0.25, 0.5, 4.0, 4.0),
        GlyphBox::centered(0.75, 0.5, 4.0, 4.0),
    ]));
    let mut surface = RecordingSurface::new();
    plot.draw_glyph_boxes(&mut surface, DrawArea::with_size(100.0, 100.0));

    assert!(matches!(
        &surface.commands()[0],
        DrawCommand::SetLineStyle(style) if style.color == Color::RED
    ));
    assert_eq!(surface.strokes().count(), 2);
}

#[test]
fn legend_is_painted_after_data() {
    let mut plot = Plot::new().expect("plot");
    plot.add(Marks(vec![GlyphBox::centered(0.5, 0.5, 4.0, 4.0)]));
    plot.legend_mut().add("series", vec![Box::new(Swatch(Color::RED))]);

    let mut surface = RecordingSurface::new();
    plot.draw(&mut surface, DrawArea::with_size(200.0, 200.0));
    let commands = surface.commands();
    let legend_text = commands
        .iter()
        .position(|command| matches!(command, DrawCommand::FillText { text, .. } if text == "series"))
        .expect("legend text");
    let swatch = commands
        .iter()
        .position(|command| *command == DrawCommand::SetColor(Color::RED))
        .expect("legend swatch");
    let data_mark = commands[..swatch]
        .iter()
        .rposition(|command| matches!(command, DrawCommand::Fill(_)))
        .expect("data mark");
    // commands[1] is the background fill.
    assert!(data_mark > 1);
    assert!(swatch < legend_text);
}
