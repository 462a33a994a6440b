/// Rotation state and the sequential axis rotation applied to scene points
use nalgebra::Vector3;

/// Accumulated rotation around three axes (in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in degrees). Angles are never wrapped.
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Apply this rotation to a point, see [`rotate`].
    pub fn apply(&self, point: Vector3<f32>) -> Vector3<f32> {
        rotate(point, self)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotate a point by `rotation`: first in the XY plane by `z` degrees, then
/// in the XZ plane by `y`, then in the YZ plane by `x`.
///
/// Each plane rotation reads the coordinates written by the previous one.
pub fn rotate(point: Vector3<f32>, rotation: &RotationState) -> Vector3<f32> {
    let mut p = point;

    let (sin, cos) = rotation.z.to_radians().sin_cos();
    let (x, y) = (p.x, p.y);
    p.x = x * cos - y * sin;
    p.y = y * cos + x * sin;

    let (sin, cos) = rotation.y.to_radians().sin_cos();
    let (x, z) = (p.x, p.z);
    p.x = x * cos - z * sin;
    p.z = z * cos + x * sin;

    let (sin, cos) = rotation.x.to_radians().sin_cos();
    let (y, z) = (p.y, p.z);
    p.y = y * cos - z * sin;
    p.z = z * cos + y * sin;

    p
}
