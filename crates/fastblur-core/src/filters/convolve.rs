use super::window::{Line, WindowSums};

/// Slide a triangular window along `line`, writing one blurred sample per
/// position back into `buffer`.
///
/// `stack` is the circular store filled by [`init_window`](super::window::init_window)
/// and `sums` the sums it returned. `mapping` holds, per position, the
/// line-relative offset of the sample entering the window (see
/// [`generate_mapping`](super::mapping::generate_mapping)).
///
/// Reading and writing the same buffer is fine: the store keeps the original
/// samples that are still inside the window, and every incoming sample lies
/// ahead of the write position.
pub(crate) fn convolve_line(
    buffer: &mut [u8],
    line: Line,
    radius: usize,
    mapping: &[usize],
    stack: &mut [u8],
    sums: WindowSums,
) {
    let diameter = 2 * radius + 1;
    let divisor = ((radius + 1) * (radius + 1)) as u64;

    let WindowSums {
        mut in_sum,
        mut out_sum,
        mut weighted_sum,
    } = sums;
    let mut stack_pointer = radius;
    let mut location = line.start;

    for &incoming in &mapping[..line.len] {
        buffer[location] = (weighted_sum / divisor) as u8;

        // drop the left half, the oldest sample leaves the window
        weighted_sum -= out_sum;
        let slot = (stack_pointer + diameter - radius) % diameter;
        out_sum -= u64::from(stack[slot]);

        let sample = buffer[line.start + incoming];
        stack[slot] = sample;
        in_sum += u64::from(sample);
        weighted_sum += in_sum;

        // the sample right of the centre becomes the new centre
        stack_pointer = (stack_pointer + 1) % diameter;
        let centre = u64::from(stack[stack_pointer]);
        out_sum += centre;
        in_sum -= centre;

        location += line.step;
    }
}
