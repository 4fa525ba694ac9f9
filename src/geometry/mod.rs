//! Cube-map geometry module.
//!
//! Provides the face enumeration and the mapping from cube-face pixels to
//! directions, spherical angles and equirectangular source coordinates.

mod face;
mod direction;
mod spherical;

pub use face::CubeFace;
pub use direction::{Direction3, cube_direction, face_pixel_direction};
pub use spherical::{spherical_angles, equirect_coords};
