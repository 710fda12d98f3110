//! Sliding-window blurs and the unsharp mask built on them.
//!
//! Buffers are flat, row-major `u8` samples. The blur works on one sample per
//! pixel (luma or a single plane); [`fastblur::blur_interleaved`] handles
//! multi-channel buffers plane by plane. The unsharp mask expects RGBA.

mod box_blur;
mod convolve;
mod mapping;
mod window;

pub mod fastblur;
pub mod greyscale;
pub mod unsharp_mask;
