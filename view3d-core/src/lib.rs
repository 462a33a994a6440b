/// View3D Core Library - Orthographic wireframe rendering
///
/// This library provides the UI-independent core of the viewer: axis
/// rotation, world/pixel mapping, cube wireframe generation, and a scene
/// renderer that redraws a raster from the session state.

pub mod config;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod render;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use config::{parse_rotation, ViewerConfig};
pub use error::{Error, Result};
pub use geometry::{cube_wireframe, CUBE_WIREFRAME_LEN};
pub use projection::ViewState;
pub use raster::{Raster, Rgb};
pub use render::{Presenter, SceneRenderer};
pub use scene::{Scene, SceneStatus};
pub use transform::{rotate, RotationState};
