//! Per-face resampling of an equirectangular panorama.

use image::RgbImage;
use rayon::prelude::*;

use crate::geometry::{CubeFace, cube_direction, equirect_coords, spherical_angles};
use crate::sampling::EquirectSource;

/// Edge length of each cube face for a panorama `width` pixels wide.
///
/// This is `floor(width / 4)`; any remainder columns are still sampled
/// through the horizontal wrap but do not grow the faces.
pub const fn face_edge(width: u32) -> u32 {
    width / 4
}

/// Renders one cube face into a new `edge` x `edge` image.
pub fn render_face(face: CubeFace, source: &EquirectSource<'_>, edge: u32) -> RgbImage {
    let mut out = RgbImage::new(edge, edge);
    render_face_into(face, source, &mut out);
    out
}

/// Renders one cube face into `out`, writing every pixel exactly once.
///
/// The face edge is taken from `out.width()`. Rows are rendered in parallel
/// and never read back.
///
/// # Panics
/// Panics if `out` is not square.
pub fn render_face_into(face: CubeFace, source: &EquirectSource<'_>, out: &mut RgbImage) {
    assert_eq!(out.width(), out.height(), "cube faces are square");

    let edge = out.width();
    if edge == 0 {
        return;
    }
    let edge_f = edge as f32;
    let (ox, oy) = face.origin(edge);
    let row_len = edge as usize * 3;

    out.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let j = oy + y as u32;
            for (x, px) in row.chunks_exact_mut(3).enumerate() {
                let dir = cube_direction(face, ox + x as u32, j, edge_f);
                let (theta, phi) = spherical_angles(dir);
                let (uf, vf) = equirect_coords(theta, phi, edge_f);
                px.copy_from_slice(&source.sample_bilinear(uf, vf).0);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_panorama(width: u32, height: u32, seed: u64) -> RgbImage {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        RgbImage::from_fn(width, height, |_, _| {
            Rgb([rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()])
        })
    }

    /// 4x2 panorama with a distinct flat color per source pixel.
    fn tiny_panorama() -> RgbImage {
        let mut img = RgbImage::new(4, 2);
        img.put_pixel(0, 0, Rgb([10, 60, 110]));
        img.put_pixel(1, 0, Rgb([40, 0, 80]));
        img.put_pixel(2, 0, Rgb([100, 20, 0]));
        img.put_pixel(3, 0, Rgb([70, 140, 210]));
        img.put_pixel(0, 1, Rgb([190, 30, 90]));
        img.put_pixel(1, 1, Rgb([160, 250, 10]));
        img.put_pixel(2, 1, Rgb([220, 120, 60]));
        img.put_pixel(3, 1, Rgb([0, 90, 180]));
        img
    }

    /// Rows of a distinct color each, constant along every row.
    fn row_bands(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |_, y| Rgb([(y * 5) as u8, 255 - (y * 5) as u8, 7]))
    }

    #[test]
    fn test_face_edge() {
        assert_eq!(face_edge(400), 100);
        assert_eq!(face_edge(401), 100);
        assert_eq!(face_edge(403), 100);
        assert_eq!(face_edge(404), 101);
        assert_eq!(face_edge(3), 0);
        assert_eq!(face_edge(4096), 1024);
    }

    #[test]
    fn test_solid_color_faces() {
        let color = Rgb([90, 180, 33]);
        let img = RgbImage::from_pixel(64, 32, color);
        let src = EquirectSource::new(&img).unwrap();

        for face in CubeFace::all() {
            let out = render_face(face, &src, face_edge(64));
            assert_eq!(out.dimensions(), (16, 16));
            assert!(
                out.pixels().all(|p| *p == color),
                "Face {:?} should be uniformly {:?}",
                face,
                color
            );
        }
    }

    #[test]
    fn test_every_pixel_written() {
        // Source channels stay below 200, so any 255 left behind is unwritten
        let sentinel = Rgb([255, 0, 255]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let img = RgbImage::from_fn(48, 24, |_, _| {
            Rgb([rng.random_range(0..200), rng.random_range(0..200), rng.random_range(0..200)])
        });
        let src = EquirectSource::new(&img).unwrap();

        for face in CubeFace::all() {
            let mut out = RgbImage::from_pixel(12, 12, sentinel);
            render_face_into(face, &src, &mut out);
            for (x, y, p) in out.enumerate_pixels() {
                assert!(p[0] < 255, "Face {:?} pixel ({}, {}) not written", face, x, y);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let img = random_panorama(80, 40, 42);
        let src = EquirectSource::new(&img).unwrap();
        for face in CubeFace::all() {
            let first = render_face(face, &src, 20);
            let second = render_face(face, &src, 20);
            assert_eq!(first.as_raw(), second.as_raw(), "Face {:?} differs between runs", face);
        }
    }

    #[test]
    fn test_tiny_panorama_single_pixel_faces() {
        let img = tiny_panorama();
        let src = EquirectSource::new(&img).unwrap();
        let edge = face_edge(img.width());
        assert_eq!(edge, 1);

        // Each 1x1 face samples the upper-left corner direction of its square.
        // Side faces look up at 35.26 degrees, i.e. vf = 0.6082 between rows 0 and 1,
        // and land halfway between two columns. Every expected channel is at
        // least 0.04 away from a rounding boundary.
        let expected = [
            // (-1, 1, 1): u = 3.5, blends column 3 with column 0 across the seam
            (CubeFace::Back, Rgb([73, 76, 145])),
            // (-1, -1, 1): u = 0.5
            (CubeFace::Left, Rgb([116, 97, 68])),
            // (1, -1, 1): u = 1.5
            (CubeFace::Front, Rgb([143, 116, 37])),
            // (1, 1, 1): u = 2.5
            (CubeFace::Right, Rgb([100, 95, 114])),
            // (-1, -1, 1): same direction as Left
            (CubeFace::Top, Rgb([116, 97, 68])),
            // (1, -1, -1): vf = 1.39, the row below clamps to row 1
            (CubeFace::Bottom, Rgb([190, 185, 35])),
        ];

        for (face, color) in expected {
            let out = render_face(face, &src, edge);
            assert_eq!(out.dimensions(), (1, 1));
            assert_eq!(*out.get_pixel(0, 0), color, "Face {:?}", face);
        }
    }

    #[test]
    fn test_front_center_samples_panorama_center() {
        // A narrow vertical stripe at the panorama center shows up in the middle of Front
        let stripe = Rgb([250, 250, 250]);
        let img = RgbImage::from_fn(64, 32, |x, _| {
            if (31..=33).contains(&x) { stripe } else { Rgb([0, 0, 0]) }
        });
        let src = EquirectSource::new(&img).unwrap();
        let out = render_face(CubeFace::Front, &src, 16);
        assert_eq!(*out.get_pixel(8, 8), stripe);
        assert_eq!(*out.get_pixel(0, 8), Rgb([0, 0, 0]));

        // Back sits on the seam, so the stripe never reaches it
        let back = render_face(CubeFace::Back, &src, 16);
        assert!(back.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_short_source_clamps_to_last_row() {
        // 64x20: the poles sit at v = 0 and v = 2 * edge = 32, past the last row
        let img = row_bands(64, 20);
        let src = EquirectSource::new(&img).unwrap();
        let bottom = render_face(CubeFace::Bottom, &src, 16);
        assert_eq!(*bottom.get_pixel(8, 8), *img.get_pixel(0, 19));
        let top = render_face(CubeFace::Top, &src, 16);
        assert_eq!(*top.get_pixel(8, 8), *img.get_pixel(0, 0));
    }

    #[test]
    fn test_tall_source_scales_by_edge() {
        // 64x50: vertical scale still follows the edge, so the pole is row 32
        let img = row_bands(64, 50);
        let src = EquirectSource::new(&img).unwrap();
        let bottom = render_face(CubeFace::Bottom, &src, 16);
        assert_eq!(*bottom.get_pixel(8, 8), *img.get_pixel(0, 32));
        let front = render_face(CubeFace::Front, &src, 16);
        assert_eq!(*front.get_pixel(8, 8), *img.get_pixel(0, 16));
    }

    #[test]
    #[should_panic(expected = "cube faces are square")]
    fn test_non_square_target_panics() {
        let img = row_bands(64, 32);
        let src = EquirectSource::new(&img).unwrap();
        let mut out = RgbImage::new(16, 20);
        render_face_into(CubeFace::Front, &src, &mut out);
    }

    #[test]
    fn test_zero_edge_is_empty() {
        let img = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        let src = EquirectSource::new(&img).unwrap();
        let out = render_face(CubeFace::Front, &src, face_edge(3));
        assert_eq!(out.dimensions(), (0, 0));
    }

    #[test]
    fn test_width_not_divisible_by_four() {
        let img = random_panorama(66, 33, 3);
        let src = EquirectSource::new(&img).unwrap();
        let edge = face_edge(66);
        for face in CubeFace::all() {
            assert_eq!(render_face(face, &src, edge).dimensions(), (16, 16));
        }
    }
}
