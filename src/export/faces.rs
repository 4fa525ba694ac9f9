//! JPEG and PNG export of rendered cube faces.

use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, RgbImage};
use thiserror::Error;

use crate::geometry::CubeFace;
use crate::projection::FaceSink;

/// Errors that can occur during face export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid JPEG quality: {0} (expected 1-100)")]
    InvalidQuality(u8),
}

/// File format for exported faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceFormat {
    /// Baseline JPEG, the usual skybox format.
    #[default]
    Jpeg,
    /// Lossless 8-bit RGB PNG.
    Png,
}

impl FaceFormat {
    /// File extension without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            FaceFormat::Jpeg => "jpg",
            FaceFormat::Png => "png",
        }
    }
}

/// Options for face export.
#[derive(Debug, Clone)]
pub struct FaceExportOptions {
    /// Output file format.
    pub format: FaceFormat,
    /// JPEG quality (1-100).
    pub jpeg_quality: u8,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for FaceExportOptions {
    fn default() -> Self {
        Self {
            format: FaceFormat::Jpeg,
            jpeg_quality: 75,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl FaceExportOptions {
    /// Lossless PNG output with default compression.
    pub fn png() -> Self {
        Self {
            format: FaceFormat::Png,
            ..Default::default()
        }
    }
}

/// Exports a single face image to `path` in the configured format.
///
/// The image is encoded in memory first, so a failed encode never leaves a
/// file behind.
///
/// # Arguments
/// * `image` - The rendered face
/// * `path` - Output file path
/// * `options` - Format and encoder settings
///
/// # Returns
/// `Ok(())` on success, or an error if encoding or writing fails
pub fn export_face(image: &RgbImage, path: &Path, options: &FaceExportOptions) -> Result<(), ExportError> {
    if options.format == FaceFormat::Jpeg && !(1..=100).contains(&options.jpeg_quality) {
        return Err(ExportError::InvalidQuality(options.jpeg_quality));
    }

    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();

    match options.format {
        FaceFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut bytes, options.jpeg_quality);
            encoder.write_image(image.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;
        }
        FaceFormat::Png => {
            let encoder = PngEncoder::new_with_quality(&mut bytes, options.compression, options.filter);
            encoder.write_image(image.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;
        }
    }

    std::fs::write(path, bytes)?;
    Ok(())
}

/// Writes each face as `<DisplayName>.<ext>` into an output directory.
#[derive(Debug)]
pub struct FaceDirectoryWriter {
    dir: PathBuf,
    options: FaceExportOptions,
    written: Vec<PathBuf>,
}

impl FaceDirectoryWriter {
    /// Creates the writer, creating `dir` if it does not exist yet.
    pub fn new(dir: &Path, options: FaceExportOptions) -> Result<Self, ExportError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            options,
            written: Vec::new(),
        })
    }

    /// Output path for a face, e.g. `out/Front.jpg`.
    pub fn path_for(&self, face: CubeFace) -> PathBuf {
        self.dir
            .join(format!("{}.{}", face.display_name(), self.options.format.extension()))
    }

    /// Paths written so far, in the order faces arrived.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl FaceSink for FaceDirectoryWriter {
    fn accept(&mut self, face: CubeFace, image: RgbImage) -> Result<(), ExportError> {
        let path = self.path_for(face);
        export_face(&image, &path, &self.options)?;
        log::debug!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
