/// Command-line options for the terminal viewer
use std::path::PathBuf;

use clap::Parser;
use view3d_core::{parse_rotation, RotationState, ViewerConfig};

/// Interactive wireframe cube viewer for the terminal.
///
/// Drag with the mouse to rotate, hold the middle button or Ctrl while
/// dragging to roll, and scroll to zoom.
#[derive(Parser, Debug, Clone)]
#[command(name = "view3d-terminal", version)]
pub struct Args {
    /// Side of the square raster, in pixels
    #[arg(long, default_value_t = 300, value_name = "PIXELS")]
    pub size: usize,

    /// Half the cube's edge length, in world units
    #[arg(long, default_value_t = 3.0)]
    pub edge: f32,

    /// Initial zoom, in pixels per world unit
    #[arg(long, default_value_t = 10.0)]
    pub zoom: f32,

    /// Zoom change per scroll notch, also the minimum zoom
    #[arg(long, default_value_t = 1.0)]
    pub zoom_step: f32,

    /// Initial rotation as `x,y,z` degrees
    #[arg(
        long,
        default_value = "0,0,0",
        value_parser = parse_rotation,
        allow_hyphen_values = true,
        value_name = "X,Y,Z"
    )]
    pub rotation: RotationState,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn config(&self) -> ViewerConfig {
        ViewerConfig {
            raster_size: self.size,
            cube_edge: self.edge,
            zoom: self.zoom,
            zoom_step: self.zoom_step,
            initial_rotation: self.rotation,
        }
    }
}
