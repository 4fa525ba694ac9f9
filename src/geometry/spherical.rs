//! Spherical angles and equirectangular source coordinates.

use std::f32::consts::{FRAC_PI_2, PI};

use super::direction::Direction3;

/// Returns `(theta, phi)` for a cube direction.
///
/// `theta` is the longitude in `(-pi, pi]`, measured from +X towards +Y.
/// `phi` is the latitude in `[-pi/2, pi/2]`, positive towards +Z.
#[inline]
pub fn spherical_angles(dir: Direction3) -> (f32, f32) {
    let theta = dir.y.atan2(dir.x);
    let r = (dir.x * dir.x + dir.y * dir.y).sqrt();
    let phi = dir.z.atan2(r);
    (theta, phi)
}

/// Maps spherical angles to fractional pixel coordinates in the source panorama.
///
/// The panorama is assumed to be `4 * edge` wide and `2 * edge` tall, so
/// `u` lands in `[0, 4 * edge]` and `v` in `[0, 2 * edge]`.
#[inline]
pub fn equirect_coords(theta: f32, phi: f32, edge: f32) -> (f32, f32) {
    let uf = 2.0 * edge * (theta + PI) / PI;
    let vf = 2.0 * edge * (FRAC_PI_2 - phi) / PI;
    (uf, vf)
}
