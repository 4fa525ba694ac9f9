//! Export module for loading panoramas and saving cube faces.
//!
//! Faces are written as JPEG (the usual skybox format) or lossless PNG,
//! one file per face named after the face.

mod faces;
mod source;

pub use faces::{
    export_face,
    ExportError,
    FaceDirectoryWriter,
    FaceExportOptions,
    FaceFormat,
};
pub use source::load_equirect;
