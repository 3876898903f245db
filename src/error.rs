use thiserror::Error;

/// Reasons a configuration is rejected before any grid is allocated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u16, height: u16 },

    #[error("minimum room {axis} must be positive")]
    ZeroRoomSize { axis: &'static str },

    #[error("minimum room {axis} ({min}) exceeds maximum room {axis} ({max})")]
    InvertedRoomBounds {
        axis: &'static str,
        min: u16,
        max: u16,
    },

    #[error("hallway width must be at least 1")]
    ZeroHallwayWidth,

    #[error("coverage must be a number, got {0}")]
    InvalidCoverage(f64),

    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

/// Errors surfaced by the library and the command-line front end.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("grid is empty; nothing to render")]
    EmptyGrid,
}
