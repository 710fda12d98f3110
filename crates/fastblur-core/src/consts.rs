/// Minimum sample count (h*w) to use line-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Bytes per pixel of an interleaved RGBA buffer.
pub const RGBA_CHANNELS: usize = 4;

/// BT.601 luma weight for red, scaled to 2^16.
pub const LUMA_R_FIXED: u32 = 19_595;

/// BT.601 luma weight for green, scaled to 2^16.
pub const LUMA_G_FIXED: u32 = 38_470;

/// BT.601 luma weight for blue, scaled to 2^16.
pub const LUMA_B_FIXED: u32 = 7_471;

/// Fractional bits of the fixed-point luma weights.
pub const LUMA_SHIFT: u32 = 16;

/// Blur radius used to build the unsharp mask, regardless of the requested radius.
pub const UNSHARP_BLUR_RADIUS: usize = 3;

/// Blur pass count used to build the unsharp mask.
pub const UNSHARP_BLUR_STEPS: usize = 3;

/// Divisor turning an unsharp `amount` into a correction multiplier.
pub const UNSHARP_AMOUNT_DIVISOR: f64 = 250.0;

/// Default blur radius in pixels.
pub const DEFAULT_BLUR_RADIUS: usize = 1;

/// Default number of horizontal+vertical pass pairs.
pub const DEFAULT_BLUR_STEPS: usize = 1;

/// Default unsharp strength.
pub const DEFAULT_UNSHARP_AMOUNT: f32 = 80.0;

/// Default unsharp radius (accepted but not used by the mask, see `unsharp`).
pub const DEFAULT_UNSHARP_RADIUS: f32 = 1.0;

/// Default luma difference an unsharp correction must exceed.
pub const DEFAULT_UNSHARP_THRESHOLD: f32 = 2.0;
