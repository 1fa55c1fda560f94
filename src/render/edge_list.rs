type EdgeList = Vec<[f32; 4]>;

use std::f32::consts::PI;

use crate::{
    constants::{BEZIER, HERMITE},
    matrix::{self, add_point},
};
use super::{Color, Picture};

pub fn add_edge(m: &mut EdgeList, x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) {
    add_point(m, x0, y0, z0, 1.0);
    add_point(m, x1, y1, z1, 1.0);
}

pub fn render_edges(m: &EdgeList, picture: &mut Picture, color: &Color) {
    for edge in m.chunks_exact(2) {
        picture.draw_line(
            edge[0][0], edge[0][1], edge[0][2],
            edge[1][0], edge[1][1], edge[1][2],
            color,
        );
    }
}

// samples (x(t), y(t)) at steps + 1 evenly spaced t in [0, 1] and joins consecutive samples
fn run_parametric<X, Y>(m: &mut EdgeList, z: f32, steps: usize, x: X, y: Y)
where
    X: Fn(f32) -> f32,
    Y: Fn(f32) -> f32,
{
    let mut previous = (x(0.0), y(0.0));

    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let current = (x(t), y(t));

        add_edge(m, previous.0, previous.1, z, current.0, current.1, z);
        previous = current;
    }
}

pub fn add_circle(m: &mut EdgeList, cx: f32, cy: f32, cz: f32, r: f32, steps: usize) {
    // x(t) = rcos(2 * pi * t) + cx
    // y(t) = rsin(2 * pi * t) + cy
    run_parametric(
        m,
        cz,
        steps,
        |t| r * (2.0 * PI * t).cos() + cx,
        |t| r * (2.0 * PI * t).sin() + cy,
    );
}

#[allow(clippy::too_many_arguments)]
pub fn add_hermite_curve(
    m: &mut EdgeList, x0: f32, y0: f32, x1: f32, y1: f32, rx0: f32, ry0: f32, rx1: f32, ry1: f32, steps: usize,
) {
    // each row is [p0, p1, r0, r1] for one axis and becomes the cubic's [a, b, c, d]
    let mut g = vec![[x0, x1, rx0, rx1], [y0, y1, ry0, ry1]];
    matrix::multiply(&HERMITE, &mut g);

    add_cubic(m, &g, steps);
}

#[allow(clippy::too_many_arguments)]
pub fn add_bezier_curve(
    m: &mut EdgeList, x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32, steps: usize,
) {
    let mut g = vec![[x0, x1, x2, x3], [y0, y1, y2, y3]];
    matrix::multiply(&BEZIER, &mut g);

    add_cubic(m, &g, steps);
}

fn add_cubic(m: &mut EdgeList, coefficients: &[[f32; 4]], steps: usize) {
    let plug = |c: &[f32; 4], t: f32| ((c[0] * t + c[1]) * t + c[2]) * t + c[3];
    let (cx, cy) = (coefficients[0], coefficients[1]);

    run_parametric(m, 0.0, steps, |t| plug(&cx, t), |t| plug(&cy, t));
}
