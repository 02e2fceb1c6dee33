use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to resolve font `{name}`: {reason}")]
    FontResolution { name: String, reason: String },

    #[error("unknown y axis index {index} (plot has {count} y axes)")]
    UnknownAxis { index: usize, count: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
