//! Six-face conversion orchestration.

use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbImage;
use rayon::prelude::*;
use thiserror::Error;

use crate::export::{ExportError, FaceDirectoryWriter, FaceExportOptions, load_equirect};
use crate::geometry::CubeFace;
use crate::sampling::EquirectSource;

use super::render::{face_edge, render_face};

/// Errors that can occur while converting a panorama.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid source dimensions: {0}x{1} (need at least 4x1 pixels)")]
    InvalidDimensions(u32, u32),
    #[error("Failed to load source image: {0}")]
    Load(#[from] image::ImageError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Receives finished faces in Back, Left, Front, Right, Top, Bottom order.
///
/// A face is only handed over once every pixel has been rendered.
pub trait FaceSink {
    fn accept(&mut self, face: CubeFace, image: RgbImage) -> Result<(), ExportError>;
}

/// Options for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Render the six faces concurrently. When false, faces are rendered
    /// one after another and streamed to the sink as they finish.
    pub parallel: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// The six rendered faces of a cube map.
#[derive(Debug, Clone)]
pub struct CubeMap {
    edge: u32,
    faces: Vec<RgbImage>,
}

impl CubeMap {
    /// Face edge length in pixels.
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Returns the image for a specific face.
    pub fn face(&self, face: CubeFace) -> &RgbImage {
        &self.faces[face.index()]
    }

    /// Iterates over faces in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &RgbImage)> {
        CubeFace::all().into_iter().zip(self.faces.iter())
    }

    /// Hands every face to `sink`, stopping at the first error.
    pub fn write_to<S: FaceSink>(self, sink: &mut S) -> Result<(), ExportError> {
        for (face, image) in CubeFace::all().into_iter().zip(self.faces) {
            sink.accept(face, image)?;
        }
        Ok(())
    }
}

/// Converts equirectangular panoramas into cube maps.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Creates a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Returns the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Renders all six faces into memory.
    pub fn convert(&self, source: &RgbImage) -> Result<CubeMap, ConvertError> {
        self.convert_with_callbacks(source, |_, _, _| {}, |_, _, _| {})
    }

    /// Renders all six faces with progress callbacks.
    ///
    /// # Arguments
    /// * `source` - The equirectangular panorama
    /// * `on_face_start` - Called as `(face, index, total)` when a face begins
    /// * `on_face_complete` - Called the same way when a face is finished
    ///
    /// With `parallel` enabled the callbacks may fire from worker threads and
    /// in any order.
    pub fn convert_with_callbacks<F1, F2>(
        &self,
        source: &RgbImage,
        on_face_start: F1,
        on_face_complete: F2,
    ) -> Result<CubeMap, ConvertError>
    where
        F1: Fn(CubeFace, usize, usize) + Sync,
        F2: Fn(CubeFace, usize, usize) + Sync,
    {
        let (src, edge) = prepare(source)?;
        let start = Instant::now();

        let render = |face: CubeFace| {
            on_face_start(face, face.index(), CubeFace::all().len());
            let image = render_logged(face, &src, edge);
            on_face_complete(face, face.index(), CubeFace::all().len());
            image
        };

        let faces: Vec<RgbImage> = if self.options.parallel {
            CubeFace::all().into_par_iter().map(render).collect()
        } else {
            CubeFace::all().into_iter().map(render).collect()
        };

        log::info!("Rendered six {}x{} faces in {:.2?}", edge, edge, start.elapsed());
        Ok(CubeMap { edge, faces })
    }

    /// Renders all six faces and hands them to `sink` in ordinal order.
    pub fn convert_into<S: FaceSink>(&self, source: &RgbImage, sink: &mut S) -> Result<(), ConvertError> {
        self.convert_into_with_callbacks(source, sink, |_, _, _| {}, |_, _, _| {})
    }

    /// Same as [`Converter::convert_into`], with progress callbacks.
    ///
    /// In sequential mode each face reaches the sink before the next one is
    /// rendered, so a sink failure stops the run early.
    pub fn convert_into_with_callbacks<S, F1, F2>(
        &self,
        source: &RgbImage,
        sink: &mut S,
        on_face_start: F1,
        on_face_complete: F2,
    ) -> Result<(), ConvertError>
    where
        S: FaceSink,
        F1: Fn(CubeFace, usize, usize) + Sync,
        F2: Fn(CubeFace, usize, usize) + Sync,
    {
        if self.options.parallel {
            let cube_map = self.convert_with_callbacks(source, on_face_start, on_face_complete)?;
            cube_map.write_to(sink)?;
            return Ok(());
        }

        let (src, edge) = prepare(source)?;
        let total = CubeFace::all().len();
        for face in CubeFace::all() {
            on_face_start(face, face.index(), total);
            let image = render_logged(face, &src, edge);
            sink.accept(face, image)?;
            on_face_complete(face, face.index(), total);
        }

        Ok(())
    }
}

/// Loads `input`, converts it and writes `<Face>.<ext>` files into `output_dir`.
///
/// Returns the paths written, in face order.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    export: &FaceExportOptions,
) -> Result<Vec<PathBuf>, ConvertError> {
    let source = load_equirect(input)?;
    let mut writer = FaceDirectoryWriter::new(output_dir, export.clone())?;
    Converter::new(options.clone()).convert_into(&source, &mut writer)?;
    Ok(writer.into_written())
}

fn prepare(source: &RgbImage) -> Result<(EquirectSource<'_>, u32), ConvertError> {
    let (width, height) = source.dimensions();
    let edge = face_edge(width);
    let src = match EquirectSource::new(source) {
        Some(src) if edge > 0 => src,
        _ => return Err(ConvertError::InvalidDimensions(width, height)),
    };
    if height != width / 2 {
        log::debug!("Source is {}x{}, not 2:1; faces will be stretched", width, height);
    }
    Ok((src, edge))
}

fn render_logged(face: CubeFace, src: &EquirectSource<'_>, edge: u32) -> RgbImage {
    let start = Instant::now();
    log::debug!("Rendering {} face ({}x{})", face, edge, edge);
    let image = render_face(face, src, edge);
    log::debug!("Rendered {} face in {:.2?}", face, start.elapsed());
    image
}
