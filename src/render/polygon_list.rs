type PolygonList = Vec<[f32; 4]>;

use std::f32::consts::{PI, TAU};

use crate::{
    constants::{CUBE, ENABLE_BACK_FACE_CULLING},
    matrix::add_point,
    vector::{Vector, surface_normal},
};
use super::{scan_line, Color, Picture};

#[allow(clippy::too_many_arguments)]
pub fn add_polygon(m: &mut PolygonList, x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) {
    add_point(m, x0, y0, z0, 1.0);
    add_point(m, x1, y1, z1, 1.0);
    add_point(m, x2, y2, z2, 1.0);
}

fn add_triangle(m: &mut PolygonList, p0: &Vector, p1: &Vector, p2: &Vector) {
    add_polygon(m,
        p0[0], p0[1], p0[2],
        p1[0], p1[1], p1[2],
        p2[0], p2[1], p2[2],
    );
}

pub fn render_polygons(m: &PolygonList, picture: &mut Picture, color: &Color) {
    for polygon in m.chunks_exact(3) {
        /*
            the viewer looks down the z axis from <0, 0, 1>
            so a polygon faces the viewer when the z component of its normal is (+)
        */
        let normal = surface_normal(&polygon[0], &polygon[1], &polygon[2]);

        if !ENABLE_BACK_FACE_CULLING || normal[2] > 0.0 {
            scan_line::flat(picture, polygon, color);
        }
    }
}

pub fn add_box(m: &mut PolygonList, x: f32, y: f32, z: f32, w: f32, h: f32, d: f32) {
    /*
        4 ---- 5
      / |    / |
    0 ---- 1   | h
    |   |  |   |
    |   7 -|-- 6
    | /    | /  d
    3 ---- 2
       w

    (x, y, z) is vertex 7, the corner with the smallest coordinates
    */

    let vertices = [
        [x, y + h, z + d],
        [x + w, y + h, z + d],
        [x + w, y, z + d],
        [x, y, z + d],
        [x, y + h, z],
        [x + w, y + h, z],
        [x + w, y, z],
        [x, y, z],
    ];

    for (a, b, c) in CUBE {
        add_triangle(m, &vertices[a], &vertices[b], &vertices[c]);
    }
}

/// Evaluates `f(s, t)` at `steps + 1` evenly spaced values of each parameter
/// over [0, 1] and returns a lookup by step index.
fn sample_grid(steps: usize, f: impl Fn(f32, f32) -> Vector) -> impl Fn(usize, usize) -> Vector {
    let n = steps as f32;
    let samples: Vec<Vector> = (0..=steps)
        .flat_map(|s| (0..=steps).map(move |t| (s, t)))
        .map(|(s, t)| f(s as f32 / n, t as f32 / n))
        .collect();

    move |s, t| samples[s * (steps + 1) + t]
}

pub fn add_sphere(m: &mut PolygonList, cx: f32, cy: f32, cz: f32, r: f32, steps: usize) {
    // half circles from the -x pole to the +x pole, swept a full turn about the x axis
    let at = sample_grid(steps, |turn, arc| {
        let (sin_arc, cos_arc) = (PI * arc).sin_cos();
        let (sin_turn, cos_turn) = (TAU * turn).sin_cos();
        [cx + r * cos_arc, cy + r * sin_arc * cos_turn, cz + r * sin_arc * sin_turn]
    });

    for turn in 0..steps {
        let next = turn + 1;

        // bands touching a pole close with one triangle instead of a quad
        add_triangle(m, &at(turn, 0), &at(turn, 1), &at(next, 1));

        for arc in 1..steps - 1 {
            add_triangle(m, &at(turn, arc), &at(turn, arc + 1), &at(next, arc + 1));
            add_triangle(m, &at(turn, arc), &at(next, arc + 1), &at(next, arc));
        }

        add_triangle(m, &at(turn, steps), &at(next, steps - 1), &at(turn, steps - 1));
    }
}

/// `r1` is the tube radius, `r2` the distance from the center to the middle of the tube.
pub fn add_torus(m: &mut PolygonList, cx: f32, cy: f32, cz: f32, r1: f32, r2: f32, steps: usize) {
    // a cross section in the xy plane, swept a full turn about the y axis
    let at = sample_grid(steps, |turn, arc| {
        let (sin_arc, cos_arc) = (TAU * arc).sin_cos();
        let (sin_turn, cos_turn) = (TAU * turn).sin_cos();
        let reach = r1 * cos_arc + r2;
        [cx + cos_turn * reach, cy + r1 * sin_arc, cz - sin_turn * reach]
    });

    for turn in 0..steps {
        for arc in 0..steps {
            let here = at(turn, arc);
            let diagonal = at(turn + 1, arc + 1);

            add_triangle(m, &here, &diagonal, &at(turn, arc + 1));
            add_triangle(m, &here, &at(turn + 1, arc), &diagonal);
        }
    }
}
