//! Equirectangular panorama to cube-map conversion.
//!
//! This crate turns a single 360x180 degree panorama into six square faces
//! (Back, Left, Front, Right, Top, Bottom) for skybox and environment-map
//! rendering, resampling each face pixel from the panorama with bilinear
//! interpolation.

pub mod geometry;
pub mod sampling;
pub mod projection;
pub mod export;

pub use geometry::CubeFace;
pub use sampling::EquirectSource;
pub use projection::{ConvertError, ConvertOptions, Converter, CubeMap, FaceSink, convert_file, face_edge, render_face};
pub use export::{ExportError, FaceDirectoryWriter, FaceExportOptions, FaceFormat, load_equirect};
