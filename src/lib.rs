//! plot-rs: a 2D plotting core.
//!
//! A [`Plot`] carves a drawing area into title, axes, legend and data
//! regions, pads the data region so no reported glyph is clipped, and hands
//! the result to pluggable [`api::Renderer`]s. Output encoding and font
//! metrics live behind the [`render::Surface`] and [`render::FontBook`]
//! seams.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Plot, PlotLayout};
pub use config::PlotConfig;
pub use error::{PlotError, PlotResult};
