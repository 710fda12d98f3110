use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_UNSHARP_AMOUNT, DEFAULT_UNSHARP_RADIUS, DEFAULT_UNSHARP_THRESHOLD, RGBA_CHANNELS,
    UNSHARP_AMOUNT_DIVISOR, UNSHARP_BLUR_RADIUS, UNSHARP_BLUR_STEPS,
};
use crate::error::{BlurError, Result};
use crate::frame::Frame;

use super::fastblur::fastblur;
use super::greyscale::greyscale;

/// Parameters of the unsharp mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsharpParams {
    /// Strength; a luma difference `d` adds `d * amount / 250` to R, G and B.
    pub amount: f32,
    /// Accepted for API compatibility; the mask is always built at a fixed radius.
    pub radius: f32,
    /// Luma difference that must be exceeded before a pixel is corrected.
    pub threshold: f32,
}

impl Default for UnsharpParams {
    fn default() -> Self {
        Self {
            amount: DEFAULT_UNSHARP_AMOUNT,
            radius: DEFAULT_UNSHARP_RADIUS,
            threshold: DEFAULT_UNSHARP_THRESHOLD,
        }
    }
}

/// Apply an unsharp mask to an RGBA buffer in place.
///
/// The mask is the difference between the image luma and a triangular blur of
/// it. Where that difference exceeds `threshold` in absolute value, R, G and B
/// are shifted by `diff * amount / 250`, truncated and clamped to 0..=255.
/// Alpha is left untouched. Working on luma keeps the correction the same for
/// all three colour channels, so hues do not drift.
///
/// Known limitation: `radius` is ignored. The mask is always blurred with
/// radius 3 over 3 passes; changing that would alter output for existing
/// callers.
///
/// `amount` and `threshold` are used as given, without range checks.
pub fn unsharp(
    src: &mut [u8],
    width: usize,
    height: usize,
    amount: f32,
    radius: f32,
    threshold: f32,
) -> Result<()> {
    let gs = greyscale(src, width, height)?;
    let blurred = fastblur(&gs, width, height, UNSHARP_BLUR_RADIUS, UNSHARP_BLUR_STEPS)?;

    let amount_norm = f64::from(amount) / UNSHARP_AMOUNT_DIVISOR;
    let limit = f64::from(threshold);
    let mut corrected = 0usize;

    for ((pixel, &grey), &blur) in src.chunks_exact_mut(RGBA_CHANNELS).zip(&gs).zip(&blurred) {
        let diff = i32::from(grey) - i32::from(blur);
        if f64::from(diff.abs()) <= limit {
            continue;
        }

        let corr = f64::from(diff) * amount_norm;
        for channel in &mut pixel[..3] {
            *channel = (f64::from(*channel) + corr).trunc().clamp(0.0, 255.0) as u8;
        }
        corrected += 1;
    }

    debug!(
        width,
        height,
        amount,
        radius,
        threshold,
        corrected,
        "Unsharp mask applied"
    );
    Ok(())
}

/// [`unsharp`] with bundled parameters.
pub fn unsharp_with(src: &mut [u8], width: usize, height: usize, params: &UnsharpParams) -> Result<()> {
    unsharp(
        src,
        width,
        height,
        params.amount,
        params.radius,
        params.threshold,
    )
}

/// Sharpen an RGBA frame in place.
pub fn unsharp_frame(frame: &mut Frame, params: &UnsharpParams) -> Result<()> {
    if frame.channels() != RGBA_CHANNELS {
        return Err(BlurError::UnsupportedChannels {
            channels: frame.channels(),
            expected: RGBA_CHANNELS,
        });
    }
    let (width, height) = (frame.width(), frame.height());
    unsharp_with(frame.as_bytes_mut(), width, height, params)
}
