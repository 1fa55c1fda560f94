use super::{Color, Picture};

type Point = [f64; 3];

/// Fills a triangle with a single color, one horizontal scanline per row,
/// interpolating z along both the edges and each scanline.
///
/// Rows and columns outside the picture are skipped before any stepping, so
/// the work is bounded by the picture size however large the triangle is.
pub fn flat(picture: &mut Picture, polygon: &[[f32; 4]], color: &Color) {
    if polygon[..3].iter().flat_map(|p| &p[..3]).any(|v| !v.is_finite()) {
        return;
    }

    let point = |p: &[f32; 4]| -> Point { [p[0] as f64, p[1] as f64, p[2] as f64] };

    // sort three points by their y values so we have a bottom top and middle
    let mut b = point(&polygon[0]);
    let mut m = point(&polygon[1]);
    let mut t = point(&polygon[2]);

    if b[1] > m[1] {
        std::mem::swap(&mut b, &mut m);
    }
    if m[1] > t[1] {
        std::mem::swap(&mut m, &mut t);
    }
    if b[1] > m[1] {
        std::mem::swap(&mut b, &mut m);
    }

    let y_start = b[1].trunc();
    let y_mid = m[1].trunc();
    let y_end = t[1].trunc();

    // the long edge runs bottom to top, the short side bends at the middle
    let long = edge_slope(&b, &t, y_end - y_start + 1.0);
    let lower = edge_slope(&b, &m, y_mid - y_start + 1.0);
    let upper = edge_slope(&m, &t, y_end - y_mid + 1.0);

    let y_low = y_start.max(0.0);
    let y_high = y_end.min(picture.yres as f64 - 1.0);
    if y_low > y_high {
        return;
    }

    for y in y_low as isize..=y_high as isize {
        let row = y as f64;
        let (x0, z0) = along(&b, long, row - y_start);
        let (x1, z1) = if row < y_mid {
            along(&b, lower, row - y_start)
        } else {
            along(&m, upper, row - y_mid)
        };

        draw_scanline(picture, x0, x1, y, z0, z1, color);
    }
}

// change in (x, z) per row over `distance` rows
fn edge_slope(from: &Point, to: &Point, distance: f64) -> (f64, f64) {
    ((to[0] - from[0]) / distance, (to[2] - from[2]) / distance)
}

fn along(from: &Point, slope: (f64, f64), rows: f64) -> (f64, f64) {
    (from[0] + slope.0 * rows, from[2] + slope.1 * rows)
}

fn draw_scanline(picture: &mut Picture, x0: f64, x1: f64, y: isize, z0: f64, z1: f64, color: &Color) {
    let (mut left, mut right) = ((x0.trunc(), z0), (x1.trunc(), z1));
    if left.0 > right.0 {
        std::mem::swap(&mut left, &mut right);
    }

    let step_z = (right.1 - left.1) / (right.0 - left.0 + 1.0);
    let x_low = left.0.max(0.0);
    let x_high = right.0.min(picture.xres as f64 - 1.0);
    if x_low > x_high {
        return;
    }

    for x in x_low as isize..=x_high as isize {
        let z = left.1 + step_z * (x as f64 - left.0);
        picture.plot(x, y, z as f32, color);
    }
}
