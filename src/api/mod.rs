mod axis_drawer;
mod layout;
mod legend;
mod plot;
mod renderer;
mod title;

pub use axis_drawer::{HorizontalAxis, VerticalAxis};
pub use layout::{DrawStage, PlotLayout};
pub use legend::Legend;
pub use plot::Plot;
pub use renderer::{DataRange, DataRanger, GlyphBoxer, Renderer, Thumbnailer};
pub use title::Title;
