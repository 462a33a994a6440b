/// Orthographic mapping between world space and raster pixels
use nalgebra::Point2;

use crate::error::{Error, Result};

/// Zoom and raster center used to map world units to pixels.
///
/// World space is Y-up with its origin at `center`; pixel space is Y-down
/// with its origin at the top-left of the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub zoom: f32,
    pub zoom_step: f32,
    pub center: Point2<i32>,
}

impl ViewState {
    /// Create a view centered on a `width` x `height` raster
    pub fn new(width: usize, height: usize, zoom: f32, zoom_step: f32) -> Result<Self> {
        if !zoom_step.is_finite() || zoom_step <= 0.0 {
            return Err(Error::InvalidZoomStep(zoom_step));
        }
        if !zoom.is_finite() || zoom < zoom_step {
            return Err(Error::InvalidZoom {
                zoom,
                step: zoom_step,
            });
        }

        Ok(Self {
            zoom,
            zoom_step,
            center: Point2::new((width / 2) as i32, (height / 2) as i32),
        })
    }

    pub fn pixel_to_world(&self, pixel: Point2<i32>) -> Point2<f32> {
        Point2::new(
            (pixel.x - self.center.x) as f32 / self.zoom,
            (self.center.y - pixel.y) as f32 / self.zoom,
        )
    }

    pub fn world_to_pixel(&self, world: Point2<f32>) -> Point2<i32> {
        Point2::new(self.world_to_pixel_x(world.x), self.world_to_pixel_y(world.y))
    }

    /// Unrounded pixel position of `world`. Unlike [`world_to_pixel`] this
    /// does not saturate for points far outside the raster.
    ///
    /// [`world_to_pixel`]: ViewState::world_to_pixel
    pub fn world_to_raster(&self, world: Point2<f32>) -> Point2<f32> {
        Point2::new(
            world.x * self.zoom + self.center.x as f32,
            self.center.y as f32 - world.y * self.zoom,
        )
    }

    pub fn world_to_pixel_x(&self, x: f32) -> i32 {
        (x * self.zoom + self.center.x as f32).round() as i32
    }

    pub fn world_to_pixel_y(&self, y: f32) -> i32 {
        (self.center.y as f32 - y * self.zoom).round() as i32
    }

    /// Step the zoom by one `zoom_step` in the direction of `wheel_delta`.
    ///
    /// Zoom never drops below one step. Returns whether the zoom changed.
    pub fn zoom_by(&mut self, wheel_delta: i32) -> bool {
        let previous = self.zoom;
        let next = self.zoom + wheel_delta.signum() as f32 * self.zoom_step;
        self.zoom = next.max(self.zoom_step);
        self.zoom != previous
    }
}
