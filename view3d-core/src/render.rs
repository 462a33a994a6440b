/// Scene rasterizer: axes, ticks, and the cube wireframe
use nalgebra::{Point2, Vector3};
use tracing::{debug, trace};

use crate::geometry::cube_wireframe;
use crate::projection::ViewState;
use crate::raster::{Raster, Rgb};
use crate::scene::{Scene, SceneStatus};
use crate::transform::RotationState;

/// Spans and steps below this are treated as collapsed
const DEGENERATE_SPAN: f32 = 1e-6;

/// Slack so the far endpoint survives float division
const TICK_SLACK: f32 = 1e-4;

/// Receives finished frames. Implemented by display front-ends.
pub trait Presenter {
    type Error;

    fn present(&mut self, raster: &Raster, status: &SceneStatus) -> Result<(), Self::Error>;
}

/// Colors and marker sizes used when rendering a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRenderer {
    pub background: Rgb,
    pub axis_color: Rgb,
    pub cube_color: Rgb,
    /// Side of the square tick marker, in pixels
    pub tick_size: u32,
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            axis_color: Rgb::BLACK,
            cube_color: Rgb::RED,
            tick_size: 3,
        }
    }
}

impl SceneRenderer {
    /// Redraw `raster` from scratch for the current scene state
    pub fn render(&self, scene: &Scene, raster: &mut Raster) {
        raster.fill(self.background);
        self.draw_axes(scene, raster);
        self.draw_cube(scene, raster);
        debug!(rotation = ?scene.rotation, zoom = scene.view.zoom, "rendered scene");
    }

    /// Render, then hand the finished raster and status to `presenter`
    pub fn refresh<P: Presenter>(
        &self,
        scene: &Scene,
        raster: &mut Raster,
        presenter: &mut P,
    ) -> Result<(), P::Error> {
        self.render(scene, raster);
        presenter.present(raster, &scene.status())
    }

    fn draw_axes(&self, scene: &Scene, raster: &mut Raster) {
        let view = &scene.view;
        let rotation = &scene.rotation;
        let (width, height) = (raster.width() as i32, raster.height() as i32);
        let center = view.center;

        let (x_from, x_to) = rotated_axis(
            view,
            rotation,
            Point2::new(0, center.y),
            Point2::new(width, center.y),
        );
        let (y_from, y_to) = rotated_axis(
            view,
            rotation,
            Point2::new(center.x, 0),
            Point2::new(center.x, height),
        );

        raster.draw_line(project(view, x_from), project(view, x_to), self.axis_color);
        raster.draw_line(project(view, y_from), project(view, y_to), self.axis_color);

        // Tick spacing follows the foreshortened unit basis vectors, but
        // never drops below one pixel
        let x_step = rotation.apply(Vector3::x()).x.abs();
        let y_step = rotation.apply(Vector3::y()).y.abs();
        let min_step = 1.0 / view.zoom;

        for (x, y) in axis_ticks((x_from.x, x_from.y), (x_to.x, x_to.y), x_step, min_step) {
            self.draw_tick(view, raster, Point2::new(x, y));
        }
        for (y, x) in axis_ticks((y_from.y, y_from.x), (y_to.y, y_to.x), y_step, min_step) {
            self.draw_tick(view, raster, Point2::new(x, y));
        }
    }

    fn draw_tick(&self, view: &ViewState, raster: &mut Raster, world: Point2<f32>) {
        raster.fill_dot(view.world_to_pixel(world), self.tick_size, self.axis_color);
    }

    fn draw_cube(&self, scene: &Scene, raster: &mut Raster) {
        let points: Vec<Point2<f32>> = cube_wireframe(scene.cube_edge)
            .into_iter()
            .map(|p| project(&scene.view, scene.rotation.apply(p)))
            .collect();
        raster.draw_polyline(&points, self.cube_color);
    }
}

/// Map two pixel positions to world space, rotate them as points on the
/// Z = 0 plane, and return the rotated endpoints
fn rotated_axis(
    view: &ViewState,
    rotation: &RotationState,
    from: Point2<i32>,
    to: Point2<i32>,
) -> (Vector3<f32>, Vector3<f32>) {
    let lift = |pixel: Point2<i32>| {
        let world = view.pixel_to_world(pixel);
        rotation.apply(Vector3::new(world.x, world.y, 0.0))
    };
    (lift(from), lift(to))
}

/// Orthographic projection: drop Z and map to unrounded pixels
fn project(view: &ViewState, point: Vector3<f32>) -> Point2<f32> {
    view.world_to_raster(Point2::new(point.x, point.y))
}

/// Tick positions along a rotated axis, as `(along, across)` pairs.
///
/// `from` and `to` are the axis endpoints given as `(along, across)`.
/// Ticks step by `step`, widened to at least `min_step`, through the
/// `along` range, both ends included, and `across` is interpolated
/// linearly between the endpoints. When the range or the step has
/// collapsed a single tick at `from` is produced.
fn axis_ticks(
    from: (f32, f32),
    to: (f32, f32),
    step: f32,
    min_step: f32,
) -> impl Iterator<Item = (f32, f32)> {
    let span = to.0 - from.0;
    let collapsed = span.abs() < DEGENERATE_SPAN || step < DEGENERATE_SPAN;
    if collapsed {
        trace!(span, step, "collapsed axis, single tick");
    }

    let step = step.max(min_step);
    let start = from.0.min(to.0);
    let count = if collapsed {
        0
    } else {
        (span.abs() / step + TICK_SLACK).floor() as usize
    };

    (0..=count).map(move |i| {
        if collapsed {
            return from;
        }
        let along = start + i as f32 * step;
        let across = from.1 + (to.1 - from.1) * ((along - from.0) / span);
        (along, across)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::geometry::CUBE_WIREFRAME_LEN;
    use crate::transform::rotate;

    fn setup() -> (Scene, Raster) {
        let config = ViewerConfig::default();
        (Scene::new(&config).unwrap(), config.raster().unwrap())
    }

    fn render(scene: &Scene, raster: &mut Raster) {
        SceneRenderer::default().render(scene, raster);
    }

    #[test]
    fn test_axis_ticks_inclusive() {
        let ticks: Vec<_> = axis_ticks((-15.0, 0.0), (15.0, 0.0), 1.0, 0.1).collect();
        assert_eq!(ticks.len(), 31);
        assert_eq!(ticks[0], (-15.0, 0.0));
        assert_eq!(ticks[30], (15.0, 0.0));
    }

    #[test]
    fn test_axis_ticks_reversed_endpoints() {
        let ticks: Vec<_> = axis_ticks((2.0, 4.0), (-2.0, 0.0), 1.0, 0.0).collect();
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], (-2.0, 0.0));
        assert_eq!(ticks[2], (0.0, 2.0));
        assert_eq!(ticks[4], (2.0, 4.0));
    }

    #[test]
    fn test_axis_ticks_fractional_step() {
        // Foreshortened by 60 degrees
        let step = 60f32.to_radians().cos();
        let ticks = axis_ticks((-15.0 * step, 0.0), (15.0 * step, 0.0), step, 0.1);
        assert_eq!(ticks.count(), 31);
    }

    #[test]
    fn test_axis_ticks_collapsed_span() {
        let ticks: Vec<_> = axis_ticks((0.0, 15.0), (0.0, -15.0), 0.0, 0.1).collect();
        assert_eq!(ticks, vec![(0.0, 15.0)]);
        let ticks: Vec<_> = axis_ticks((1e-6, 2.0), (2e-6, -2.0), 4e-8, 0.1).collect();
        assert_eq!(ticks, vec![(1e-6, 2.0)]);
    }

    #[test]
    fn test_axis_ticks_at_most_one_per_pixel() {
        // 300 pixel axis at zoom 1e-4: one world unit is far below a pixel
        let zoom = 1e-4f32;
        let half = 150.0 / zoom;
        let mut ticks = axis_ticks((-half, 0.0), (half, 0.0), 1.0, 1.0 / zoom);
        assert_eq!(ticks.next(), Some((-half, 0.0)));
        assert_eq!(ticks.count(), 300);

        // Wide enough steps are left alone
        let ticks = axis_ticks((-15.0, 0.0), (15.0, 0.0), 1.0, 1.0 / 10.0);
        assert_eq!(ticks.count(), 31);
    }

    #[test]
    fn test_default_scene_axes() {
        let (scene, mut raster) = setup();
        render(&scene, &mut raster);

        // Horizontal axis spans the full width at the vertical center
        for x in 0..300 {
            assert_ne!(raster.get(x, 150), Some(Rgb::WHITE), "gap at x = {}", x);
        }
        // Vertical axis spans the full height at the horizontal center
        for y in 0..300 {
            assert_ne!(raster.get(150, y), Some(Rgb::WHITE), "gap at y = {}", y);
        }
        assert_eq!(raster.get(5, 150), Some(Rgb::BLACK));
        assert_eq!(raster.get(150, 295), Some(Rgb::BLACK));
    }

    #[test]
    fn test_default_scene_ticks() {
        let (scene, mut raster) = setup();
        render(&scene, &mut raster);

        // One tick per world unit, zoom 10
        for x in [0, 10, 20, 50, 100, 200, 290] {
            assert_eq!(raster.get(x, 149), Some(Rgb::BLACK), "no tick at x = {}", x);
            assert_eq!(raster.get(x, 151), Some(Rgb::BLACK));
        }
        assert_eq!(raster.get(15, 149), Some(Rgb::WHITE));
        assert_eq!(raster.get(151, 30), Some(Rgb::BLACK));
        assert_eq!(raster.get(151, 35), Some(Rgb::WHITE));
    }

    #[test]
    fn test_default_scene_cube() {
        let (scene, mut raster) = setup();
        render(&scene, &mut raster);

        // Corners at center +/- edge * zoom
        for (x, y) in [(120, 120), (180, 120), (120, 180), (180, 180)] {
            assert_eq!(raster.get(x, y), Some(Rgb::RED), "corner ({}, {})", x, y);
        }
        assert_eq!(raster.get(150, 120), Some(Rgb::RED));
        assert_eq!(raster.get(60, 60), Some(Rgb::WHITE));
        assert_eq!(raster.get(130, 130), Some(Rgb::WHITE));

        let red: Vec<(usize, usize)> = raster
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, &p)| p == Rgb::RED)
            .map(|(i, _)| (i % 300, i / 300))
            .collect();
        assert!(!red.is_empty());
        assert!(red
            .iter()
            .all(|&(x, y)| (120..=180).contains(&x) && (120..=180).contains(&y)));
    }

    #[test]
    fn test_rotated_cube_corners_stay_on_raster() {
        let (mut scene, mut raster) = setup();
        scene.rotation = RotationState::new(30.0, -45.0, 10.0);
        render(&scene, &mut raster);

        let points = cube_wireframe(scene.cube_edge);
        assert_eq!(points.len(), CUBE_WIREFRAME_LEN);
        for p in points {
            let q = rotate(p, &scene.rotation);
            let pixel = scene.view.world_to_pixel(Point2::new(q.x, q.y));
            assert_eq!(raster.get(pixel.x, pixel.y), Some(Rgb::RED));
        }
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let (mut scene, mut raster) = setup();
        render(&scene, &mut raster);
        assert_eq!(raster.get(180, 180), Some(Rgb::RED));

        scene.view.zoom = 20.0;
        render(&scene, &mut raster);
        assert_eq!(raster.get(180, 180), Some(Rgb::WHITE));
        assert_eq!(raster.get(210, 210), Some(Rgb::RED));
    }

    #[test]
    fn test_axes_rotate_with_scene() {
        let (mut scene, mut raster) = setup();
        scene.rotation = RotationState::new(0.0, 0.0, 90.0);
        render(&scene, &mut raster);

        // The X axis now lies on the vertical center line
        assert_eq!(raster.get(150, 10), Some(Rgb::BLACK));
        assert_eq!(raster.get(10, 150), Some(Rgb::BLACK));
        assert_eq!(raster.get(10, 140), Some(Rgb::WHITE));
    }

    #[test]
    fn test_edge_on_axes_render_without_panicking() {
        let (mut scene, mut raster) = setup();
        for rotation in [
            RotationState::new(0.0, 90.0, 0.0),
            RotationState::new(90.0, 0.0, 0.0),
            RotationState::new(90.0, 90.0, 0.0),
            RotationState::new(-270.0, 450.0, 0.0),
        ] {
            scene.rotation = rotation;
            render(&scene, &mut raster);
            assert!(raster.pixels().contains(&Rgb::RED));
        }
    }

    #[test]
    fn test_huge_zoom_keeps_visible_edges() {
        let (mut scene, mut raster) = setup();
        // Looking along (1, 1, 0): the edges through (e, e, z) and (-e, -e, z)
        // cross the raster center while their corners lie millions of pixels off
        scene.rotation = RotationState::new(90.0, 0.0, 45.0);
        scene.view.zoom = 1e7;
        render(&scene, &mut raster);

        for y in [0, 10, 150, 290, 299] {
            assert!(
                (140..=160).any(|x| raster.get(x, y) == Some(Rgb::RED)),
                "no edge crossing row {}",
                y
            );
        }
    }

    #[test]
    fn test_huge_zoom_with_offscreen_cube() {
        let (mut scene, mut raster) = setup();
        scene.view.zoom = 1e9;
        render(&scene, &mut raster);

        assert_eq!(raster.get(5, 150), Some(Rgb::BLACK));
        assert_eq!(raster.get(150, 5), Some(Rgb::BLACK));
        assert!(!raster.pixels().contains(&Rgb::RED));
    }

    #[test]
    fn test_tiny_zoom_renders_bounded_ticks() {
        let config = ViewerConfig {
            zoom: 1e-7,
            zoom_step: 1e-7,
            ..ViewerConfig::default()
        };
        let scene = Scene::new(&config).unwrap();
        let mut raster = config.raster().unwrap();
        render(&scene, &mut raster);

        assert_eq!(raster.get(5, 150), Some(Rgb::BLACK));
        assert_eq!(raster.get(150, 295), Some(Rgb::BLACK));
        assert_eq!(raster.get(150, 150), Some(Rgb::RED));
        assert_eq!(raster.get(5, 140), Some(Rgb::WHITE));
    }

    #[test]
    fn test_refresh_presents_status() {
        struct Capture(Vec<String>);

        impl Presenter for Capture {
            type Error = ();

            fn present(&mut self, raster: &Raster, status: &SceneStatus) -> Result<(), ()> {
                assert!(raster.pixels().contains(&Rgb::RED));
                self.0.push(status.to_string());
                Ok(())
            }
        }

        let (mut scene, mut raster) = setup();
        let mut capture = Capture(Vec::new());
        scene.wheel(1);
        SceneRenderer::default()
            .refresh(&scene, &mut raster, &mut capture)
            .unwrap();
        assert_eq!(capture.0, vec!["Rotation X = 0 Y = 0 Z = 0 | Zoom = 11"]);
    }
}
