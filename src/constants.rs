use crate::picture::Color;

/* CONFIG */
pub const DEFAULT_PICTURE_DIMENSIONS: (usize, usize) = (500, 500);
pub const DEFAULT_BACKGROUND_COLOR: Color = BLACK;
pub const DEFAULT_FOREGROUND_COLOR: Color = WHITE;
pub const PARAMETRIC_STEPS: usize = 20;
// spheres and tori get a denser mesh than the curves
pub const SURFACE_STEPS: usize = PARAMETRIC_STEPS * 5;
pub const ENABLE_BACK_FACE_CULLING: bool = true;
pub const DISPLAY_FILE_PREFIX: &str = "display";
pub const DISPLAY_FILE_EXTENSION: &str = "png";

/* COLORS */
pub const WHITE: Color = (255, 255, 255);
pub const BLACK: Color = (0, 0, 0);

/* USEFUL MATH STUFF */
pub const HERMITE: [[f32; 4]; 4] = [
    [2.0, -3.0, 0.0, 1.0],
    [-2.0, 3.0, 0.0, 0.0],
    [1.0, -2.0, 1.0, 0.0],
    [1.0, -1.0, 0.0, 0.0],
];
pub const BEZIER: [[f32; 4]; 4] = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];
pub const CUBE: [(usize, usize, usize); 12] = [
    (0, 2, 1),
    (0, 3, 2),
    (4, 1, 5),
    (4, 0, 1),
    (7, 0, 4),
    (7, 3, 0),
    (6, 3, 7),
    (6, 2, 3),
    (5, 2, 6),
    (5, 1, 2),
    (7, 5, 6),
    (7, 4, 5),
];
