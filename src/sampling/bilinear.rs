//! Bilinear sampling of an equirectangular panorama.

use image::{Rgb, RgbImage};

/// Read-only view of an equirectangular source image.
///
/// Horizontal lookups wrap around (the panorama is seamless in longitude),
/// vertical lookups clamp to the first and last rows (no wrap over the poles).
#[derive(Debug, Clone, Copy)]
pub struct EquirectSource<'a> {
    image: &'a RgbImage,
}

impl<'a> EquirectSource<'a> {
    /// Wraps an image, or returns `None` if it has no pixels to sample.
    pub fn new(image: &'a RgbImage) -> Option<Self> {
        if image.width() == 0 || image.height() == 0 {
            return None;
        }
        Some(Self { image })
    }

    /// Source width in pixels; horizontal lookups wrap modulo this.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Source height in pixels; vertical lookups clamp to `height - 1`.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the pixel at `(u mod W, clamp(v, 0, H - 1))`.
    #[inline]
    pub fn fetch(&self, u: i64, v: i64) -> Rgb<u8> {
        let x = u.rem_euclid(self.width() as i64) as u32;
        let y = v.clamp(0, self.height() as i64 - 1) as u32;
        *self.image.get_pixel(x, y)
    }

    /// Blends the four pixels around `(uf, vf)` by their fractional distance.
    ///
    /// Each channel is rounded half-to-even and saturated to `u8`.
    pub fn sample_bilinear(&self, uf: f32, vf: f32) -> Rgb<u8> {
        let ui = uf.floor();
        let vi = vf.floor();
        let mu = uf - ui;
        let nu = vf - vi;

        let (u1, v1) = (ui as i64, vi as i64);
        let (u2, v2) = (u1 + 1, v1 + 1);

        let a = self.fetch(u1, v1);
        let b = self.fetch(u2, v1);
        let c = self.fetch(u1, v2);
        let d = self.fetch(u2, v2);

        let mut out = [0u8; 3];
        for (ch, value) in out.iter_mut().enumerate() {
            let blended = a[ch] as f32 * (1.0 - mu) * (1.0 - nu)
                + b[ch] as f32 * mu * (1.0 - nu)
                + c[ch] as f32 * (1.0 - mu) * nu
                + d[ch] as f32 * mu * nu;
            *value = blended.round_ties_even() as u8;
        }
        Rgb(out)
    }
}
