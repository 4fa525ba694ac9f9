//! Projection module: renders cube faces from an equirectangular panorama.
//!
//! `render` holds the per-face resampling loop; `convert` drives all six
//! faces and hands them to a [`FaceSink`].

mod render;
mod convert;

pub use render::{face_edge, render_face, render_face_into};
pub use convert::{
    ConvertError, ConvertOptions, Converter, CubeMap, FaceSink, convert_file,
};
