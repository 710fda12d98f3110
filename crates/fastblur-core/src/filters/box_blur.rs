use super::window::Line;

/// Slide a flat window of `2 * radius + 1` samples along `line`, writing the
/// window mean (rounded down) back into `buffer`.
///
/// One running sum is kept. `stack` must hold `2 * radius + 1` slots and
/// stores the original samples currently inside the window, oldest first at
/// the circular pointer. Samples outside the line repeat the nearest edge.
pub(crate) fn box_line(buffer: &mut [u8], line: Line, radius: usize, stack: &mut [u8]) {
    let diameter = stack.len();
    debug_assert_eq!(diameter, 2 * radius + 1);

    let mut sum = 0u64;
    for (slot, value) in stack.iter_mut().enumerate() {
        let sample = buffer[line.clamped(slot.saturating_sub(radius))];
        *value = sample;
        sum += u64::from(sample);
    }

    let divisor = diameter as u64;
    let mut oldest = 0;
    let mut location = line.start;

    for position in 0..line.len {
        buffer[location] = (sum / divisor) as u8;

        let sample = buffer[line.clamped(position + radius + 1)];
        sum += u64::from(sample);
        sum -= u64::from(stack[oldest]);
        stack[oldest] = sample;
        oldest = (oldest + 1) % diameter;

        location += line.step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_row(row: &[u8], radius: usize) -> Vec<u8> {
        let mut buffer = row.to_vec();
        let mut stack = vec![0u8; 2 * radius + 1];
        box_line(&mut buffer, Line::row(row.len()), radius, &mut stack);
        buffer
    }

    #[test]
    fn test_step_edge_radius_1() {
        assert_eq!(box_row(&[0, 0, 0, 255, 255, 255], 1), vec![0, 0, 85, 170, 255, 255]);
    }

    #[test]
    fn test_edges_repeat_border_sample() {
        // window at 0: 90, 90, 0 -> 60; at 2: 0, 0, 0
        assert_eq!(box_row(&[90, 0, 0, 0], 1), vec![60, 30, 0, 0]);
    }

    #[test]
    fn test_column_with_stride() {
        // 2x3 image; blur only column 0 (1, 3, 5)
        let mut buffer = vec![1u8, 2, 3, 4, 5, 6];
        let line = Line {
            start: 0,
            step: 2,
            len: 3,
        };
        let mut stack = [0u8; 3];
        box_line(&mut buffer, line, 1, &mut stack);
        // (1+1+3)/3 = 1, (1+3+5)/3 = 3, (3+5+5)/3 = 4
        assert_eq!(buffer, vec![1, 2, 3, 4, 4, 6]);
    }
}
