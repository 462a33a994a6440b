/// View3D Terminal Viewer - Interactive wireframe cube
///
/// Controls:
///   - Drag: Rotate (yaw and pitch)
///   - Middle drag / Ctrl+drag: Roll
///   - Scroll or +/-: Zoom
///   - Q/ESC: Quit

use clap::Parser;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use view3d_terminal::{cli::Args, TerminalApp};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // The terminal itself shows the raster, so logs only go to a file
    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let mut app = TerminalApp::new(&args.config())?;
    app.run()?;

    Ok(())
}
