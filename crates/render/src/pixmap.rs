//! Software RGBA8 raster surface.
//!
//! Row-major, 4 bytes per pixel, non-premultiplied alpha with source-over
//! blending. Quality targets "translucent dots and hairlines behind page
//! content", so points are distance-tested filled circles and lines are
//! half-pixel-sampled stamps, both clipped silently at the edges.

use crate::surface::Surface;
use driftfield_core::{FieldError, Rgba, Viewport};
use glam::DVec2;

/// CPU raster surface backing the PNG snapshot path.
pub struct Pixmap {
    width: usize,
    height: usize,
    background: Rgba,
    data: Vec<u8>,
    presented: u64,
}

impl Pixmap {
    /// Creates a pixmap cleared to transparent black.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or the buffer size overflows.
    pub fn new(width: usize, height: usize) -> Result<Pixmap, FieldError> {
        Pixmap::with_background(width, height, Rgba::from_u8(0, 0, 0).with_alpha(0.0))
    }

    /// Creates a pixmap cleared to `background`.
    pub fn with_background(
        width: usize,
        height: usize,
        background: Rgba,
    ) -> Result<Pixmap, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FieldError::InvalidDimensions)?;
        let mut data = vec![0; len];
        fill(&mut data, background);
        Ok(Pixmap {
            width,
            height,
            background,
            data,
            presented: 0,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major RGBA8 buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGBA bytes at `(x, y)`, or `None` outside the pixmap.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Number of `present` calls since creation.
    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    /// Source-over blends `color` into the pixel at `(x, y)`; off-pixmap
    /// coordinates are clipped silently.
    fn blend(&mut self, x: isize, y: isize, color: Rgba) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let dst_a = self.data[idx + 3] as f64 / 255.0;
        let src_a = color.a.clamp(0.0, 1.0);
        let out_a = src_a + dst_a * (1.0 - src_a);
        let channel = |src: f64, dst: u8| {
            if out_a == 0.0 {
                return 0;
            }
            let dst = dst as f64 / 255.0;
            let out = (src * src_a + dst * dst_a * (1.0 - src_a)) / out_a;
            (out.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        self.data[idx] = channel(color.r, self.data[idx]);
        self.data[idx + 1] = channel(color.g, self.data[idx + 1]);
        self.data[idx + 2] = channel(color.b, self.data[idx + 2]);
        self.data[idx + 3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Fills an RGBA8 buffer with a single color.
fn fill(data: &mut [u8], color: Rgba) {
    let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    let px = [q(color.r), q(color.g), q(color.b), q(color.a)];
    for chunk in data.chunks_exact_mut(4) {
        chunk.copy_from_slice(&px);
    }
}

impl Surface for Pixmap {
    fn size(&self) -> Viewport {
        Viewport {
            width: self.width as f64,
            height: self.height as f64,
        }
    }

    fn clear(&mut self) -> Result<(), FieldError> {
        let background = self.background;
        fill(&mut self.data, background);
        Ok(())
    }

    fn draw_point(&mut self, center: DVec2, radius: f64, color: Rgba) -> Result<(), FieldError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Ok(());
        }
        let x0 = (center.x - radius).floor() as isize;
        let x1 = (center.x + radius).ceil() as isize;
        let y0 = (center.y - radius).floor() as isize;
        let y1 = (center.y + radius).ceil() as isize;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let sample = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                if sample.distance(center) <= radius {
                    self.blend(x, y, color);
                }
            }
        }
        Ok(())
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba) -> Result<(), FieldError> {
        let delta = to - from;
        let length = delta.length();
        if !length.is_finite() {
            return Ok(());
        }
        // Half-pixel sampling; consecutive duplicate stamps are skipped so a
        // translucent line does not double-blend within a pixel.
        let steps = (length * 2.0).ceil().max(1.0) as usize;
        let mut last: Option<(isize, isize)> = None;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let p = from + delta * t;
            let px = (p.x.floor() as isize, p.y.floor() as isize);
            if last != Some(px) {
                self.blend(px.0, px.1, color);
                last = Some(px);
            }
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), FieldError> {
        self.presented += 1;
        Ok(())
    }
}
