//! Column-major 4x4 transforms and homogeneous point lists.
//!
//! A point list is a `Vec<[f32; 4]>` where each entry is one `(x, y, z, 1)`
//! point. A transform is stored the same way: entry `j` is column `j`, so
//! `m[3]` holds the translation.

use std::f32::consts::PI;

pub type Matrix = Vec<[f32; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    X,
    Y,
    Z,
}

pub fn new() -> Matrix {
    vec![]
}

pub fn identity() -> Matrix {
    vec![
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

pub fn add_point(m: &mut Matrix, x: f32, y: f32, z: f32, w: f32) {
    m.push([x, y, z, w]);
}

/// Replaces every column of `m` with `a * column`, i.e. `m = a * m`.
pub fn multiply(a: &[[f32; 4]], m: &mut [[f32; 4]]) {
    for point in m.iter_mut() {
        let p = *point;
        for (row, value) in point.iter_mut().enumerate() {
            *value = a[0][row] * p[0] + a[1][row] * p[1] + a[2][row] * p[2] + a[3][row] * p[3];
        }
    }
}

pub fn translation(a: f32, b: f32, c: f32) -> Matrix {
    let mut m = identity();
    m[3] = [a, b, c, 1.0];
    m
}

pub fn dilation(a: f32, b: f32, c: f32) -> Matrix {
    let mut m = identity();
    m[0][0] = a;
    m[1][1] = b;
    m[2][2] = c;
    m
}

pub fn rotation(axis: Rotation, degrees: f32) -> Matrix {
    let radians = degrees * PI / 180.0;
    let (sin, cos) = radians.sin_cos();
    let mut m = identity();

    // (i, j) are the two axes that move; the third is fixed
    let (i, j) = match axis {
        Rotation::X => (1, 2),
        Rotation::Y => (2, 0),
        Rotation::Z => (0, 1),
    };

    m[i][i] = cos;
    m[i][j] = sin;
    m[j][i] = -sin;
    m[j][j] = cos;
    m
}
