use crate::consts::{LUMA_B_FIXED, LUMA_G_FIXED, LUMA_R_FIXED, LUMA_SHIFT, RGBA_CHANNELS};
use crate::error::{check_buffer, Result};

/// Luma of one RGB triple using 16.16 fixed-point BT.601 weights
/// (0.299, 0.587, 0.114). The result is rounded down.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * LUMA_R_FIXED + u32::from(g) * LUMA_G_FIXED + u32::from(b) * LUMA_B_FIXED)
        >> LUMA_SHIFT) as u8
}

/// Reduce an RGBA buffer to a single-channel luma buffer of `width * height`
/// bytes. Alpha is ignored.
pub fn greyscale(src: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    check_buffer(src.len(), width, height, RGBA_CHANNELS)?;

    Ok(src
        .chunks_exact(RGBA_CHANNELS)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect())
}
