//! Loading equirectangular panoramas from disk.

use std::path::Path;

use image::RgbImage;

/// Decodes an image file and converts it to 8-bit RGB.
///
/// The format is guessed from the file extension; alpha and extra bit depth
/// are discarded.
pub fn load_equirect(path: &Path) -> Result<RgbImage, image::ImageError> {
    let image = image::open(path)?.into_rgb8();
    log::debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}
