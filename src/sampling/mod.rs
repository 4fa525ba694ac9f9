//! Source image sampling with longitude wrap and latitude clamp.

mod bilinear;

pub use bilinear::EquirectSource;
