/// Geometry primitives for the wireframe scene
use nalgebra::Vector3;

/// Number of points in the cube wireframe polyline
pub const CUBE_WIREFRAME_LEN: usize = 19;

/// Build the cube wireframe as one connected polyline.
///
/// The cube spans `-half_edge..=half_edge` on every axis. All 12 edges are
/// covered by walking 19 points, some edges being traced twice; the order
/// is significant for the rendered output and must not be rearranged.
pub fn cube_wireframe(half_edge: f32) -> Vec<Vector3<f32>> {
    let e = half_edge;
    let v = Vector3::new;

    vec![
        // Left face
        v(-e, -e, -e),
        v(-e, -e, e),
        v(-e, e, e),
        v(-e, e, -e),
        v(-e, -e, -e),
        // Right face
        v(e, -e, -e),
        v(e, -e, e),
        v(e, e, e),
        v(e, e, -e),
        v(e, -e, -e),
        // Bottom face
        v(e, -e, e),
        v(-e, -e, e),
        v(-e, -e, -e),
        v(e, -e, -e),
        v(e, e, -e),
        // Top edges
        v(e, e, e),
        v(-e, e, e),
        v(-e, e, -e),
        v(e, e, -e),
    ]
}
