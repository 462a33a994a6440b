/// View3D Web - WASM front-end for the wireframe viewer
///
/// The host page forwards pointer and wheel events and asks for frames,
/// either as raw RGBA bytes or painted straight into a 2D canvas.

use nalgebra::Point2;
use view3d_core::{Presenter, Raster, Scene, SceneRenderer, SceneStatus, ViewerConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

#[wasm_bindgen]
pub struct WebViewer {
    scene: Scene,
    raster: Raster,
    renderer: SceneRenderer,
}

#[wasm_bindgen]
impl WebViewer {
    /// Create a viewer with a `size` x `size` raster and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<WebViewer, JsValue> {
        let config = ViewerConfig {
            raster_size: size,
            ..ViewerConfig::default()
        };
        let scene = Scene::new(&config).map_err(to_js)?;
        let raster = config.raster().map_err(to_js)?;

        Ok(WebViewer {
            scene,
            raster,
            renderer: SceneRenderer::default(),
        })
    }

    pub fn width(&self) -> usize {
        self.raster.width()
    }

    pub fn height(&self) -> usize {
        self.raster.height()
    }

    /// Start a drag at canvas pixel `(x, y)`
    pub fn press(&mut self, x: i32, y: i32) {
        self.scene.press(Point2::new(x, y));
    }

    /// Continue a drag. `roll` is the alternate modifier (middle button).
    /// Returns whether a redraw is needed.
    pub fn drag_to(&mut self, x: i32, y: i32, roll: bool) -> bool {
        self.scene.drag_to(Point2::new(x, y), roll)
    }

    pub fn release(&mut self) {
        self.scene.release();
    }

    /// Apply a wheel delta; only its sign matters. Returns whether a
    /// redraw is needed.
    pub fn wheel(&mut self, delta: i32) -> bool {
        self.scene.wheel(delta)
    }

    /// Render a frame and return it as RGBA bytes
    pub fn render(&mut self) -> Vec<u8> {
        self.renderer.render(&self.scene, &mut self.raster);
        self.raster.to_rgba8()
    }

    pub fn status(&self) -> String {
        self.scene.status().to_string()
    }

    /// Render a frame into the canvas with id `canvas_id`, returning the
    /// status text
    pub fn draw_to(&mut self, canvas_id: &str) -> Result<String, JsValue> {
        let mut canvas = CanvasPresenter::find(canvas_id)?;
        self.renderer
            .refresh(&self.scene, &mut self.raster, &mut canvas)?;
        Ok(canvas.status)
    }
}

/// Paints finished rasters into a 2D canvas context
struct CanvasPresenter {
    context: CanvasRenderingContext2d,
    status: String,
}

impl CanvasPresenter {
    fn find(canvas_id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id `{}`", canvas_id)))?
            .dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        Ok(Self {
            context,
            status: String::new(),
        })
    }
}

impl Presenter for CanvasPresenter {
    type Error = JsValue;

    fn present(&mut self, raster: &Raster, status: &SceneStatus) -> Result<(), JsValue> {
        let bytes = raster.to_rgba8();
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&bytes),
            raster.width() as u32,
            raster.height() as u32,
        )?;
        self.context.put_image_data(&image, 0.0, 0.0)?;
        self.status = status.to_string();
        Ok(())
    }
}

fn to_js(err: view3d_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
