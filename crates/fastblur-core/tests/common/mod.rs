#![allow(dead_code)]

/// Single-channel buffer filled with `value`.
pub fn flat(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// RGBA buffer where every pixel is `pixel`.
pub fn flat_rgba(width: usize, height: usize, pixel: [u8; 4]) -> Vec<u8> {
    pixel.repeat(width * height)
}

/// Deterministic pseudo-random single-channel buffer.
pub fn noise(width: usize, height: usize) -> Vec<u8> {
    let mut state = 0x2545_f491u32;
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

/// RGBA buffer of grey pixels, opaque, with the given grey level per pixel.
pub fn grey_rgba(levels: &[u8]) -> Vec<u8> {
    levels.iter().flat_map(|&v| [v, v, v, 255]).collect()
}

/// True if every adjacent pair is non-decreasing.
pub fn is_non_decreasing(values: &[u8]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
