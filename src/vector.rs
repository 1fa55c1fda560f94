pub type Vector = [f32; 3];

pub fn subtract_vectors(a: &Vector, b: &Vector) -> Vector {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

// normal = < aybz - azby, azbx - axbz, axby - aybx >
pub fn cross_product(a: &Vector, b: &Vector) -> Vector {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Normal of the triangle `p0 p1 p2` using the winding order of the points.
pub fn surface_normal(p0: &[f32; 4], p1: &[f32; 4], p2: &[f32; 4]) -> Vector {
    let origin = [p0[0], p0[1], p0[2]];
    let a = subtract_vectors(&[p1[0], p1[1], p1[2]], &origin);
    let b = subtract_vectors(&[p2[0], p2[1], p2[2]], &origin);

    cross_product(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_product_of_axes() {
        assert_eq!(cross_product(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross_product(&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn counter_clockwise_triangle_faces_viewer() {
        let normal = surface_normal(&[0.0, 0.0, 0.0, 1.0], &[1.0, 0.0, 0.0, 1.0], &[0.0, 1.0, 0.0, 1.0]);
        assert!(normal[2] > 0.0);
    }
}
