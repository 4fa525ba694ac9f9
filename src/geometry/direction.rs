//! Per-face cube directions for the horizontal-cross layout.

use glam::Vec3;

use super::face::CubeFace;

/// A point on the surface of the `[-1, 1]` cube, not normalized.
pub type Direction3 = Vec3;

/// Converts a pixel position in the horizontal-cross unwrapping to a point on the cube.
///
/// `i` and `j` are cross coordinates (column and row), so each face only sees
/// values inside its own `edge`-sized square, starting at [`CubeFace::origin`].
/// With `a = 2i / edge` and `b = 2j / edge`, every face is a fixed linear map of
/// `(a, b)`; the offsets place the face square on the right patch of the cube.
///
/// # Arguments
/// * `face` - The face being rendered
/// * `i` - Column in the cross
/// * `j` - Row in the cross
/// * `edge` - Face edge length in pixels
pub fn cube_direction(face: CubeFace, i: u32, j: u32, edge: f32) -> Direction3 {
    let a = 2.0 * i as f32 / edge;
    let b = 2.0 * j as f32 / edge;

    match face {
        CubeFace::Back => Vec3::new(-1.0, 1.0 - a, 3.0 - b),
        CubeFace::Left => Vec3::new(a - 3.0, -1.0, 3.0 - b),
        CubeFace::Front => Vec3::new(1.0, a - 5.0, 3.0 - b),
        CubeFace::Right => Vec3::new(7.0 - a, 1.0, 3.0 - b),
        CubeFace::Top => Vec3::new(b - 1.0, a - 5.0, 1.0),
        CubeFace::Bottom => Vec3::new(5.0 - b, a - 5.0, -1.0),
    }
}

/// Same as [`cube_direction`], for a pixel given in face-local coordinates.
pub fn face_pixel_direction(face: CubeFace, x: u32, y: u32, edge: u32) -> Direction3 {
    let (ox, oy) = face.origin(edge);
    cube_direction(face, ox + x, oy + y, edge as f32)
}
