//! The framebuffer and its depth map.
//!
//! Pixel `(0, 0)` is the bottom-left corner. Larger z is closer to the
//! viewer, so a cleared depth map holds negative infinity everywhere.

use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};

/// Channels are kept exactly as the script gave them. They are only clamped
/// into `0..=255` when the picture is encoded.
pub type Color = (i32, i32, i32);

#[derive(Clone, Debug, PartialEq)]
pub struct Picture {
    pub xres: usize,
    pub yres: usize,
    pub data: Vec<Vec<Color>>,
    pub z_buffer: Vec<Vec<f32>>,
}

impl Picture {
    pub fn new(xres: usize, yres: usize, background: &Color) -> Self {
        Self {
            xres,
            yres,
            data: vec![vec![*background; xres]; yres],
            z_buffer: vec![vec![f32::NEG_INFINITY; xres]; yres],
        }
    }

    pub fn clear(&mut self, background: &Color) {
        for row in self.data.iter_mut() {
            row.fill(*background);
        }
        for row in self.z_buffer.iter_mut() {
            row.fill(f32::NEG_INFINITY);
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.data.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Writes `color` at `(x, y)` if the pixel is on screen and `z` is closer
    /// than what is already there.
    pub fn plot(&mut self, x: isize, y: isize, z: f32, color: &Color) {
        if x < 0 || y < 0 || x >= self.xres as isize || y >= self.yres as isize {
            return;
        }

        let (x, y) = (x as usize, y as usize);
        if z > self.z_buffer[y][x] {
            self.data[y][x] = *color;
            self.z_buffer[y][x] = z;
        }
    }

    /// Clips a segment to the pixel grid with Liang-Barsky, carrying z along.
    /// Returns `None` when nothing of the segment is on screen.
    fn clip_segment(&self, start: [f64; 3], end: [f64; 3]) -> Option<([f64; 3], [f64; 3])> {
        let dx = end[0] - start[0];
        let dy = end[1] - start[1];
        let x_max = self.xres as f64 - 1.0;
        let y_max = self.yres as f64 - 1.0;

        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;

        for (p, q) in [(-dx, start[0]), (dx, x_max - start[0]), (-dy, start[1]), (dy, y_max - start[1])] {
            if p == 0.0 {
                // parallel to this edge and outside it
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

        let at = |t: f64| {
            [
                (start[0] + t * dx).round(),
                (start[1] + t * dy).round(),
                start[2] + t * (end[2] - start[2]),
            ]
        };

        Some((at(t0), at(t1)))
    }

    /// Bresenham over the dominant axis, interpolating z linearly. Endpoints
    /// are truncated to pixels and the segment is clipped to the picture first,
    /// so the walk is never longer than the picture's diagonal.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line(&mut self, x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32, color: &Color) {
        if ![x0, y0, z0, x1, y1, z1].iter().all(|v| v.is_finite()) {
            return;
        }

        let start = [(x0 as f64).trunc(), (y0 as f64).trunc(), z0 as f64];
        let end = [(x1 as f64).trunc(), (y1 as f64).trunc(), z1 as f64];
        let Some((start, end)) = self.clip_segment(start, end) else {
            return;
        };

        let (x0, y0, z0) = (start[0] as isize, start[1] as isize, start[2] as f32);
        let (x1, y1, z1) = (end[0] as isize, end[1] as isize, end[2] as f32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };

        let distance = dx.max(-dy);
        let step_z = if distance == 0 { 0.0 } else { (z1 - z0) / distance as f32 };

        let (mut x, mut y, mut z) = (x0, y0, z0);
        let mut error = dx + dy;

        loop {
            self.plot(x, y, z, color);

            if x == x1 && y == y1 {
                return;
            }

            let e2 = 2 * error;
            if e2 >= dy {
                error += dy;
                x += step_x;
            }
            if e2 <= dx {
                error += dx;
                y += step_y;
            }
            z += step_z;
        }
    }

    pub fn to_image(&self) -> RgbImage {
        let channel = |value: i32| value.clamp(0, 255) as u8;

        RgbImage::from_fn(self.xres as u32, self.yres as u32, |column, row| {
            // image rows go top to bottom
            let (r, g, b) = self.data[self.yres - 1 - row as usize][column as usize];
            Rgb([channel(r), channel(g), channel(b)])
        })
    }

    /// Encodes the picture, picking the format from the file extension.
    pub fn save_as_file<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.to_image().save(path)
    }
}
