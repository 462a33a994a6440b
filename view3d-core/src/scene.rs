/// Session state and the input policies that mutate it
use std::fmt;

use nalgebra::Point2;
use tracing::trace;

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::projection::ViewState;
use crate::transform::RotationState;

/// Everything a render pass reads. Only the input handlers below mutate it.
#[derive(Debug, Clone)]
pub struct Scene {
    pub rotation: RotationState,
    pub view: ViewState,
    /// Half the cube's edge length, in world units
    pub cube_edge: f32,
    drag_anchor: Option<Point2<i32>>,
}

impl Scene {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        let view = ViewState::new(
            config.raster_size,
            config.raster_size,
            config.zoom,
            config.zoom_step,
        )?;

        Ok(Self {
            rotation: config.initial_rotation,
            view,
            cube_edge: config.cube_edge,
            drag_anchor: None,
        })
    }

    /// Rotate by a pointer movement of `(dx, dy)` pixels.
    ///
    /// With `roll` held, horizontal movement rolls about Z and vertical
    /// movement is ignored. Otherwise horizontal movement yaws (about Y,
    /// inverted) and vertical movement pitches (about X).
    pub fn apply_drag(&mut self, dx: i32, dy: i32, roll: bool) {
        if roll {
            self.rotation.rotate(0.0, 0.0, dx as f32);
        } else {
            self.rotation.rotate(dy as f32, -(dx as f32), 0.0);
        }
    }

    /// Start a drag at `pos` (pixel space)
    pub fn press(&mut self, pos: Point2<i32>) {
        trace!(x = pos.x, y = pos.y, "drag started");
        self.drag_anchor = Some(pos);
    }

    /// Continue a drag to `pos`. Ignored unless a drag is in progress.
    ///
    /// Returns whether the rotation changed.
    pub fn drag_to(&mut self, pos: Point2<i32>, roll: bool) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        self.drag_anchor = Some(pos);

        let before = self.rotation;
        self.apply_drag(pos.x - anchor.x, pos.y - anchor.y, roll);
        trace!(rotation = ?self.rotation, roll, "dragged");
        self.rotation != before
    }

    pub fn release(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Apply a wheel movement. Returns whether the zoom changed.
    pub fn wheel(&mut self, delta: i32) -> bool {
        let changed = self.view.zoom_by(delta);
        trace!(delta, zoom = self.view.zoom, "wheel");
        changed
    }

    pub fn status(&self) -> SceneStatus {
        SceneStatus {
            rotation: self.rotation,
            zoom: self.view.zoom,
        }
    }
}

/// Human-readable snapshot of the rotation angles and zoom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStatus {
    pub rotation: RotationState,
    pub zoom: f32,
}

impl fmt::Display for SceneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rotation X = {} Y = {} Z = {} | Zoom = {}",
            self.rotation.x, self.rotation.y, self.rotation.z, self.zoom
        )
    }
}
