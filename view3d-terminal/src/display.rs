/// Half-block display of a raster in the terminal
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::{self, Write};
use view3d_core::{Presenter, Raster, Rgb, SceneStatus};

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '▀';

/// Square region of the terminal the raster is scaled into.
///
/// Each cell shows two display pixels stacked vertically, so a viewport of
/// `side` display pixels spans `side` columns and `side / 2` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin_col: u16,
    pub origin_row: u16,
    pub side: u16,
    /// Row holding the status line
    pub status_row: u16,
}

impl Viewport {
    /// Fit the largest square viewport into a `cols` x `rows` terminal,
    /// keeping the bottom row free for the status line
    pub fn fit(cols: u16, rows: u16) -> Self {
        let usable_rows = rows.saturating_sub(1);
        let side = cols.min(usable_rows.saturating_mul(2)) & !1;

        Self {
            origin_col: (cols - side) / 2,
            origin_row: (usable_rows - side / 2) / 2,
            side,
            status_row: usable_rows,
        }
    }

    pub fn rows(&self) -> u16 {
        self.side / 2
    }

    /// Map a terminal cell to the raster pixel at the center of the block it
    /// shows. Cells outside the viewport map past the raster edges so drag
    /// deltas stay continuous.
    pub fn cell_to_pixel(&self, col: u16, row: u16, raster: &Raster) -> Point2<i32> {
        let side = self.side.max(1) as i64;
        let gx = (col as i64 - self.origin_col as i64) * 2 + 1;
        let gy = (row as i64 - self.origin_row as i64) * 4 + 2;

        Point2::new(
            (gx * raster.width() as i64 / (2 * side)) as i32,
            (gy * raster.height() as i64 / (2 * side)) as i32,
        )
    }

    /// Raster block `[x0, x1) x [y0, y1)` shown by display pixel `(gx, gy)`
    fn block(&self, gx: u16, gy: u16, raster: &Raster) -> (usize, usize, usize, usize) {
        let side = self.side.max(1) as usize;
        let (w, h) = (raster.width(), raster.height());
        let (gx, gy) = (gx as usize, gy as usize);

        let x0 = gx * w / side;
        let y0 = gy * h / side;
        // Always cover at least one pixel when the raster is smaller
        let x1 = ((gx + 1) * w / side).max(x0 + 1);
        let y1 = ((gy + 1) * h / side).max(y0 + 1);
        (x0, y0, x1, y1)
    }
}

/// Writes rasters to a terminal as colored half-block cells
pub struct BlockDisplay<W: Write> {
    out: W,
    viewport: Viewport,
    background: Rgb,
}

impl<W: Write> BlockDisplay<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        Self {
            out,
            viewport,
            background: Rgb::WHITE,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> io::Result<()> {
        self.viewport = viewport;
        self.out.queue(Clear(ClearType::All))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_raster(&mut self, raster: &Raster) -> io::Result<()> {
        let viewport = self.viewport;
        for row in 0..viewport.rows() {
            self.out
                .queue(cursor::MoveTo(viewport.origin_col, viewport.origin_row + row))?;
            for col in 0..viewport.side {
                let (x0, y0, x1, y1) = viewport.block(col, row * 2, raster);
                let top = raster.dominant_color(x0, y0, x1, y1, self.background);
                let (x0, y0, x1, y1) = viewport.block(col, row * 2 + 1, raster);
                let bottom = raster.dominant_color(x0, y0, x1, y1, self.background);

                self.out.queue(SetForegroundColor(to_color(top)))?;
                self.out.queue(SetBackgroundColor(to_color(bottom)))?;
                self.out.queue(Print(HALF_BLOCK))?;
            }
        }
        self.out.queue(ResetColor)?;
        Ok(())
    }
}

impl<W: Write> Presenter for BlockDisplay<W> {
    type Error = io::Error;

    fn present(&mut self, raster: &Raster, status: &SceneStatus) -> io::Result<()> {
        self.draw_raster(raster)?;
        self.out
            .queue(cursor::MoveTo(0, self.viewport.status_row))?
            .queue(Clear(ClearType::CurrentLine))?
            .queue(SetForegroundColor(Color::Yellow))?
            .queue(Print(format!(
                "{} | drag=rotate middle/ctrl+drag=roll scroll=zoom q=quit",
                status
            )))?
            .queue(ResetColor)?;
        self.out.flush()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
