//! Sliding-window blur and unsharp-mask sharpening for in-memory `u8` rasters.
//!
//! The blur runs in O(1) per sample regardless of radius, using either a
//! triangular (Gaussian-like) or a flat box kernel, as a horizontal pass
//! followed by a vertical pass. The unsharp mask sharpens RGBA buffers in place
//! from a blurred luma copy.

pub mod consts;
pub mod error;
pub mod filters;
pub mod frame;
pub mod pipeline;

pub use error::{BlurError, Result};
pub use filters::fastblur::{
    blur_interleaved, fastblur, fastblur_array, fastblur_with, BlurKernel, BlurParams,
};
pub use filters::greyscale::greyscale;
pub use filters::unsharp_mask::{unsharp, unsharp_frame, unsharp_with, UnsharpParams};
pub use frame::Frame;
