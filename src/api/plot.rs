use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::PlotConfig;
use crate::core::{Axis, DrawArea, GlyphBox, Tick, TickMarker, Transform};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, FontBook, TextStyle};

use super::{Legend, Renderer, Title};

struct RendererEntry {
    renderer: Box<dyn Renderer>,
    y_axis: usize,
}

/// A plot: title, one X axis, one or more Y axes, a legend and the renderers
/// painting into the data area.
///
/// Renderers are painted in the order they were added. Axis ranges start
/// empty and widen as range-reporting renderers are added.
pub struct Plot {
    config: PlotConfig,
    fonts: FontBook,
    title: Title,
    background: Option<Color>,
    x: Axis,
    ys: Vec<Axis>,
    legend: Legend,
    renderers: Vec<RendererEntry>,
}

impl Plot {
    /// Builds an empty plot with the default configuration and standard fonts.
    pub fn new() -> PlotResult<Self> {
        Self::with_config(PlotConfig::default())
    }

    pub fn with_config(config: PlotConfig) -> PlotResult<Self> {
        Self::with_fonts(config, FontBook::standard())
    }

    /// Builds an empty plot resolving every text style through `fonts`.
    ///
    /// Fails if the configuration is invalid or its default font is unknown.
    pub fn with_fonts(config: PlotConfig, fonts: FontBook) -> PlotResult<Self> {
        config.validate()?;
        let title_font = fonts.resolve(&config.default_font, config.title_font_size)?;
        let x = Axis::new(&fonts, &config)?;
        let y = Axis::new(&fonts, &config)?;
        let legend = Legend::new(&fonts, &config)?;
        debug!(font = %config.default_font, "plot created");

        Ok(Self {
            title: Title::new(TextStyle::new(title_font)),
            background: Some(Color::WHITE),
            x,
            ys: vec![y],
            legend,
            renderers: Vec::new(),
            config,
            fonts,
        })
    }

    /// Appends a Y axis drawn on the right-hand side and returns its index.
    ///
    /// Only the axis at index 1 is painted; further axes still take part in
    /// ranges and padding.
    pub fn add_y_axis(&mut self) -> PlotResult<usize> {
        let mut axis = Axis::new(&self.fonts, &self.config)?;
        axis.align_right = true;
        self.ys.push(axis);
        let index = self.ys.len() - 1;
        debug!(index, "added y axis");
        Ok(index)
    }

    /// Adds a renderer bound to the primary Y axis.
    pub fn add(&mut self, renderer: impl Renderer + 'static) {
        self.push_renderer(Box::new(renderer), 0);
    }

    /// Adds several renderers bound to the primary Y axis, in order.
    pub fn extend<I>(&mut self, renderers: I)
    where
        I: IntoIterator<Item = Box<dyn Renderer>>,
    {
        for renderer in renderers {
            self.push_renderer(renderer, 0);
        }
    }

    /// Adds a renderer bound to the Y axis at `y_axis`.
    ///
    /// A renderer that reports a data range widens the X axis and the bound
    /// Y axis to contain it.
    pub fn add_with_axis(
        &mut self,
        y_axis: usize,
        renderer: impl Renderer + 'static,
    ) -> PlotResult<()> {
        if y_axis >= self.ys.len() {
            return Err(PlotError::UnknownAxis {
                index: y_axis,
                count: self.ys.len(),
            });
        }
        self.push_renderer(Box::new(renderer), y_axis);
        Ok(())
    }

    fn push_renderer(&mut self, renderer: Box<dyn Renderer>, y_axis: usize) {
        if let Some(ranger) = renderer.data_ranger() {
            let range = ranger.data_range();
            self.x.include_range(range.x_min, range.x_max);
            self.ys[y_axis].include_range(range.y_min, range.y_max);
            trace!(
                y_axis,
                x_min = self.x.min,
                x_max = self.x.max,
                y_min = self.ys[y_axis].min,
                y_max = self.ys[y_axis].max,
                "widened axis ranges"
            );
        }
        self.renderers.push(RendererEntry { renderer, y_axis });
    }

    /// Turns the X axis into a nominal axis with one labelled tick per name
    /// at `0, 1, 2, …`.
    ///
    /// The last Y axis gets padding of half the first label's width so that
    /// label is not clipped at the origin.
    pub fn nominal_x<S: AsRef<str>>(&mut self, names: &[S]) {
        let Some(first) = names.first() else {
            warn!("nominal x axis needs at least one name; ignoring");
            return;
        };
        let pad = self.x.tick.label.width(first.as_ref()) / 2.0;
        if let Some(last) = self.ys.last_mut() {
            last.padding = pad;
        }
        make_nominal(&mut self.x, names);
    }

    /// Turns the Y axis at `y_axis` into a nominal axis.
    ///
    /// The X axis padding grows to half the first label's height if that is
    /// larger than its current padding.
    pub fn nominal_y<S: AsRef<str>>(&mut self, y_axis: usize, names: &[S]) {
        let count = self.ys.len();
        let Some(axis) = self.ys.get_mut(y_axis) else {
            warn!(index = y_axis, count, "nominal y axis index out of range; ignoring");
            return;
        };
        let Some(first) = names.first() else {
            warn!(index = y_axis, "nominal y axis needs at least one name; ignoring");
            return;
        };
        let pad = axis.tick.label.height(first.as_ref()) / 2.0;
        make_nominal(axis, names);
        if pad > self.x.padding {
            self.x.padding = pad;
        }
    }

    /// Removes the X axis footprint: no ticks, labels, line or padding.
    pub fn hide_x(&mut self) {
        hide(&mut self.x);
    }

    /// Removes the footprint of every Y axis.
    pub fn hide_y(&mut self) {
        for axis in &mut self.ys {
            hide(axis);
        }
    }

    pub fn hide_axes(&mut self) {
        self.hide_x();
        self.hide_y();
    }

    /// Glyph boxes of every renderer able to report them, in registration
    /// order.
    ///
    /// Boxes sized on a dimension but located outside `[0, 1]` on it are
    /// dropped; axis tick-label boxes are not included.
    #[must_use]
    pub fn glyph_boxes(&self) -> Vec<GlyphBox> {
        let mut boxes = Vec::new();
        for entry in &self.renderers {
            let Some(boxer) = entry.renderer.glyph_boxer() else {
                continue;
            };
            let reported = boxer.glyph_boxes(self, &self.x, &self.ys[entry.y_axis]);
            let before = boxes.len();
            boxes.extend(reported.into_iter().filter(GlyphBox::is_in_range));
            trace!(
                y_axis = entry.y_axis,
                kept = boxes.len() - before,
                "collected glyph boxes"
            );
        }
        boxes
    }

    /// Data → device mappings for `x` and `y` within `area`.
    #[must_use]
    pub fn transforms(&self, area: DrawArea, x: &Axis, y: &Axis) -> (Transform, Transform) {
        (x.transform_x(area), y.transform_y(area))
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    #[must_use]
    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn title_mut(&mut self) -> &mut Title {
        &mut self.title
    }

    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    #[must_use]
    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    pub fn x_axis_mut(&mut self) -> &mut Axis {
        &mut self.x
    }

    #[must_use]
    pub fn y_axes(&self) -> &[Axis] {
        &self.ys
    }

    pub fn y_axis_mut(&mut self, index: usize) -> Option<&mut Axis> {
        self.ys.get_mut(index)
    }

    #[must_use]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn legend_mut(&mut self) -> &mut Legend {
        &mut self.legend
    }

    #[must_use]
    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    pub(super) fn renderers(&self) -> impl Iterator<Item = (&dyn Renderer, usize)> {
        self.renderers
            .iter()
            .map(|entry| (entry.renderer.as_ref(), entry.y_axis))
    }

    pub(super) fn sanitize_ranges(&mut self) {
        self.x.sanitize_range();
        for axis in &mut self.ys {
            axis.sanitize_range();
        }
    }
}

fn make_nominal<S: AsRef<str>>(axis: &mut Axis, names: &[S]) {
    axis.tick.line.width = 0.0;
    axis.tick.length = 0.0;
    axis.line.width = 0.0;
    let ticks = names
        .iter()
        .enumerate()
        .map(|(index, name)| Tick::major(index as f64, name.as_ref()))
        .collect();
    axis.tick.marker = TickMarker::Constant(ticks);
}

fn hide(axis: &mut Axis) {
    axis.tick.length = 0.0;
    axis.line.width = 0.0;
    axis.padding = 0.0;
    axis.tick.marker = TickMarker::Constant(Vec::new());
}

impl fmt::Debug for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plot")
            .field("config", &self.config)
            .field("title", &self.title)
            .field("background", &self.background)
            .field("x", &self.x)
            .field("ys", &self.ys)
            .field("legend", &self.legend)
            .field("renderers", &self.renderers.len())
            .finish_non_exhaustive()
    }
}
