pub mod axis;
pub mod geometry;
pub mod glyph;
pub mod padding;
pub mod ticks;

pub use axis::{Axis, AxisLabel, AxisScale, TickConfig, Transform};
pub use geometry::{DrawArea, Point, Rect};
pub use glyph::GlyphBox;
pub use padding::{pad_horizontal, pad_vertical};
pub use ticks::{Tick, TickMarker, Ticker, default_ticks, log_ticks};
