/// One row or column of a flat sample buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Line {
    /// Buffer offset of the first sample.
    pub start: usize,
    /// Distance between consecutive samples of the line.
    pub step: usize,
    /// Number of samples in the line (at least 1).
    pub len: usize,
}

impl Line {
    /// A contiguous line of `len` samples starting at offset 0.
    pub fn row(len: usize) -> Self {
        Self {
            start: 0,
            step: 1,
            len,
        }
    }

    /// Buffer offset of the sample at `position`, clamped to the line.
    #[inline]
    pub fn clamped(&self, position: usize) -> usize {
        self.start + position.min(self.len - 1) * self.step
    }
}

/// Running sums of a triangular window.
///
/// `out_sum` covers the centre sample and everything to its left, `in_sum` the
/// samples to the right of the centre. `weighted_sum` is the window weighted by
/// `radius + 1 - |offset|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct WindowSums {
    pub in_sum: u64,
    pub out_sum: u64,
    pub weighted_sum: u64,
}

/// Fill `stack` with the clamped neighbourhood of the first sample of `line`
/// and return the sums of that first window position.
///
/// `stack` must hold exactly `2 * radius + 1` slots. Offsets before the line
/// start repeat the first sample; offsets past its end repeat the last one.
pub(crate) fn init_window(buffer: &[u8], line: Line, radius: usize, stack: &mut [u8]) -> WindowSums {
    let mut sums = WindowSums::default();

    for (slot, value) in stack.iter_mut().enumerate() {
        // slot k sits at offset k - radius from the window centre
        let sample = buffer[line.clamped(slot.saturating_sub(radius))];
        *value = sample;

        let distance = slot.abs_diff(radius);
        let weight = (radius + 1 - distance) as u64;
        sums.weighted_sum += u64::from(sample) * weight;

        if slot > radius {
            sums.in_sum += u64::from(sample);
        } else {
            sums.out_sum += u64::from(sample);
        }
    }

    sums
}
