/// Errors raised while configuring a viewer
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(
        "raster must hold between 1 and {max} pixels, got {width}x{height}",
        max = crate::raster::MAX_RASTER_PIXELS
    )]
    InvalidRasterSize { width: usize, height: usize },
    #[error("zoom step must be a positive finite number, got {0}")]
    InvalidZoomStep(f32),
    #[error("zoom must be finite and at least one zoom step ({step}), got {zoom}")]
    InvalidZoom { zoom: f32, step: f32 },
    #[error("cube edge must be a positive finite number, got {0}")]
    InvalidCubeEdge(f32),
    #[error("invalid rotation `{0}`, expected three comma-separated degrees like `30,-15,0`")]
    InvalidRotation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
