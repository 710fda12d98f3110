/// Offsets of the samples entering a sliding window along one line.
///
/// `mapping[i] = min(i + radius_plus1, size - 1) * step`: after the output at
/// scan position `i` is emitted, the window pulls in the sample `radius + 1`
/// positions ahead, clamped to the last sample of the line. `step` is the
/// distance between neighbouring samples of the line (1 for rows, the image
/// width for columns).
pub(crate) fn generate_mapping(size: usize, radius_plus1: usize, step: usize) -> Vec<usize> {
    let last = size.saturating_sub(1);
    (0..size)
        .map(|i| (i + radius_plus1).min(last) * step)
        .collect()
}
