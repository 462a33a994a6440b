/// Terminal front-end for the wireframe viewer
use crossterm::{event, terminal};
use std::io::{self, stdout, Stdout};
use tracing::{debug, info};
use view3d_core::{Raster, Scene, SceneRenderer, ViewerConfig};

pub mod cli;
pub mod display;
pub mod input;
pub mod session;

pub use display::{BlockDisplay, Viewport};
pub use input::{handle_event, Action};
pub use session::TerminalSession;

/// Main application struct for terminal 3D viewing
pub struct TerminalApp {
    scene: Scene,
    raster: Raster,
    renderer: SceneRenderer,
    display: BlockDisplay<Stdout>,
}

impl TerminalApp {
    pub fn new(config: &ViewerConfig) -> anyhow::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let scene = Scene::new(config)?;
        let raster = config.raster()?;
        info!(size = config.raster_size, cols, rows, "viewer ready");

        Ok(Self {
            scene,
            raster,
            renderer: SceneRenderer::default(),
            display: BlockDisplay::new(stdout(), Viewport::fit(cols, rows)),
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut session = TerminalSession::enter(stdout())?;
        let result = self.main_loop();
        let restored = session.restore();

        result.and(restored)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.refresh()?;

        loop {
            let event = event::read()?;
            let viewport = self.display.viewport();
            match handle_event(&mut self.scene, &viewport, &self.raster, event) {
                Action::None => {}
                Action::Redraw => self.refresh()?,
                Action::Resize(cols, rows) => {
                    debug!(cols, rows, "terminal resized");
                    self.display.set_viewport(Viewport::fit(cols, rows))?;
                    self.refresh()?;
                }
                Action::Quit => {
                    info!(status = %self.scene.status(), "quit");
                    return Ok(());
                }
            }
        }
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.renderer
            .refresh(&self.scene, &mut self.raster, &mut self.display)
    }
}
