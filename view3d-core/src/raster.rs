/// Fixed-size RGB pixel buffer with the primitives the scene renderer needs
use nalgebra::Point2;

use crate::error::{Error, Result};

/// Largest raster accepted, in pixels (8192 x 8192)
pub const MAX_RASTER_PIXELS: usize = 1 << 26;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row-major pixel buffer, origin at the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = Self::check_size(width, height)?;

        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::WHITE; len],
        })
    }

    pub fn square(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    /// Pixel count of a `width` x `height` raster, if it is within bounds
    pub fn check_size(width: usize, height: usize) -> Result<usize> {
        width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= MAX_RASTER_PIXELS)
            .ok_or(Error::InvalidRasterSize { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set one pixel. Writes outside the raster are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Draw a line between two unrounded pixel positions.
    ///
    /// The segment is clipped to the raster before it is rasterized, so the
    /// cost depends on the visible part only.
    pub fn draw_line(&mut self, from: Point2<f32>, to: Point2<f32>, color: Rgb) {
        let Some((from, to)) = self.clip(from, to) else {
            return;
        };
        let (max_x, max_y) = (self.width as i64 - 1, self.height as i64 - 1);
        let snap = |v: f64, max: i64| (v.round() as i64).clamp(0, max);

        let (mut x0, mut y0) = (snap(from.0, max_x), snap(from.1, max_y));
        let (x1, y1) = (snap(to.0, max_x), snap(to.1, max_y));

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.pixels[y0 as usize * self.width + x0 as usize] = color;

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Liang-Barsky clip of a segment to `[0, width - 1] x [0, height - 1]`.
    ///
    /// Runs in f64 so endpoints billions of pixels away still land on the
    /// right pixel after clipping.
    fn clip(&self, from: Point2<f32>, to: Point2<f32>) -> Option<((f64, f64), (f64, f64))> {
        if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
            return None;
        }

        let (x0, y0) = (from.x as f64, from.y as f64);
        let (x1, y1) = (to.x as f64, to.y as f64);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let (max_x, max_y) = ((self.width - 1) as f64, (self.height - 1) as f64);

        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;
        for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| (x0 + dx * t, y0 + dy * t);
        let start = if t0 == 0.0 { (x0, y0) } else { at(t0) };
        let end = if t1 == 1.0 { (x1, y1) } else { at(t1) };
        Some((start, end))
    }

    /// Draw connected segments through `points` in order
    pub fn draw_polyline(&mut self, points: &[Point2<f32>], color: Rgb) {
        for segment in points.windows(2) {
            self.draw_line(segment[0], segment[1], color);
        }
    }

    /// Fill a `size` x `size` square centered on `center`
    pub fn fill_dot(&mut self, center: Point2<i32>, size: u32, color: Rgb) {
        let half = (size / 2) as i32;
        let (start_x, start_y) = (center.x.saturating_sub(half), center.y.saturating_sub(half));
        for dy in 0..size as i32 {
            for dx in 0..size as i32 {
                self.set(start_x.saturating_add(dx), start_y.saturating_add(dy), color);
            }
        }
    }

    /// Most frequent non-`background` color in the block
    /// `[x0, x1) x [y0, y1)`, or `background` when the block is empty.
    ///
    /// Down-sampling displays use this so one-pixel lines stay visible.
    pub fn dominant_color(&self, x0: usize, y0: usize, x1: usize, y1: usize, background: Rgb) -> Rgb {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);

        let mut counts: Vec<(Rgb, usize)> = Vec::new();
        for y in y0..y1 {
            for &color in &self.pixels[y * self.width + x0.min(x1)..y * self.width + x1] {
                if color == background {
                    continue;
                }
                match counts.iter_mut().find(|(c, _)| *c == color) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((color, 1)),
                }
            }
        }

        // Earliest color wins ties
        let mut best: Option<(Rgb, usize)> = None;
        for (color, n) in counts {
            if best.map_or(true, |(_, m)| n > m) {
                best = Some((color, n));
            }
        }
        best.map_or(background, |(color, _)| color)
    }

    /// Pixels as tightly packed RGBA bytes, alpha always 255
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.r, p.g, p.b, 255]);
        }
        bytes
    }
}
