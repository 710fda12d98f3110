use std::fmt;

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_BLUR_RADIUS, DEFAULT_BLUR_STEPS, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{check_buffer, BlurError, Result};

use super::box_blur::box_line;
use super::convolve::convolve_line;
use super::mapping::generate_mapping;
use super::window::{init_window, Line};

/// Window weighting used by the sliding-window blur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlurKernel {
    /// Ramped 1, 2, .., r+1, .., 2, 1 weights; approximates a Gaussian.
    #[default]
    Triangular,
    /// Flat weights over `2 * radius + 1` samples.
    Box,
}

impl fmt::Display for BlurKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Triangular => write!(f, "Triangular"),
            Self::Box => write!(f, "Box"),
        }
    }
}

impl BlurKernel {
    /// Incoming-sample offsets for one line, if this kernel uses them.
    fn mapping(self, len: usize, radius: usize, step: usize) -> Vec<usize> {
        match self {
            Self::Triangular => generate_mapping(len, radius + 1, step),
            Self::Box => Vec::new(),
        }
    }

    fn blur_line(self, buffer: &mut [u8], line: Line, radius: usize, mapping: &[usize], stack: &mut [u8]) {
        match self {
            Self::Triangular => {
                let sums = init_window(buffer, line, radius, stack);
                convolve_line(buffer, line, radius, mapping, stack, sums);
            }
            Self::Box => box_line(buffer, line, radius, stack),
        }
    }
}

/// Parameters of a separable sliding-window blur.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurParams {
    /// Window radius in samples. 0 leaves the buffer untouched.
    pub radius: usize,
    /// Number of horizontal+vertical pass pairs. 0 is treated as 1.
    pub steps: usize,
    pub kernel: BlurKernel,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_BLUR_RADIUS,
            steps: DEFAULT_BLUR_STEPS,
            kernel: BlurKernel::default(),
        }
    }
}

/// Direction a pass walks the buffer in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn line_len(self, width: usize, height: usize) -> usize {
        match self {
            Self::Horizontal => width,
            Self::Vertical => height,
        }
    }

    fn line_count(self, width: usize, height: usize) -> usize {
        match self {
            Self::Horizontal => height,
            Self::Vertical => width,
        }
    }

    fn line(self, index: usize, width: usize, height: usize) -> Line {
        match self {
            Self::Horizontal => Line {
                start: index * width,
                step: 1,
                len: width,
            },
            Self::Vertical => Line {
                start: index,
                step: width,
                len: height,
            },
        }
    }
}

/// Working state of one blur call: dimensions, kernel and the circular
/// window store shared by every line of every serial pass.
struct BlurState {
    width: usize,
    height: usize,
    radius: usize,
    kernel: BlurKernel,
    stack: Vec<u8>,
}

impl BlurState {
    fn new(width: usize, height: usize, radius: usize, kernel: BlurKernel) -> Self {
        Self {
            width,
            height,
            radius,
            kernel,
            stack: vec![0; 2 * radius + 1],
        }
    }

    fn serial_pass(&mut self, buffer: &mut [u8], axis: Axis) {
        let len = axis.line_len(self.width, self.height);
        let step = match axis {
            Axis::Horizontal => 1,
            Axis::Vertical => self.width,
        };
        let mapping = self.kernel.mapping(len, self.radius, step);

        for index in 0..axis.line_count(self.width, self.height) {
            let line = axis.line(index, self.width, self.height);
            self.kernel
                .blur_line(buffer, line, self.radius, &mapping, &mut self.stack);
        }
    }

    fn parallel_pass(&self, buffer: &mut [u8], axis: Axis) -> Result<()> {
        match axis {
            Axis::Horizontal => {
                self.parallel_rows(buffer, self.width);
            }
            Axis::Vertical => {
                // columns become rows of the transposed buffer
                let mut transposed = transpose(buffer, self.width, self.height)?;
                self.parallel_rows(&mut transposed, self.height);
                let restored = transpose(&transposed, self.height, self.width)?;
                buffer.copy_from_slice(&restored);
            }
        }
        Ok(())
    }

    fn parallel_rows(&self, buffer: &mut [u8], row_len: usize) {
        let mapping = self.kernel.mapping(row_len, self.radius, 1);
        let diameter = self.stack.len();
        let (kernel, radius) = (self.kernel, self.radius);

        buffer.par_chunks_mut(row_len).for_each_init(
            || vec![0u8; diameter],
            |stack, row| kernel.blur_line(row, Line::row(row_len), radius, &mapping, stack),
        );
    }
}

/// Transpose a row-major `height x width` buffer.
fn transpose(buffer: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let view = ArrayView2::from_shape((height, width), buffer)?;
    Ok(view.t().iter().copied().collect())
}

/// Run `steps` horizontal+vertical pass pairs over `buffer` in place.
fn blur_passes(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    params: &BlurParams,
    parallel: bool,
) -> Result<()> {
    let mut state = BlurState::new(width, height, params.radius, params.kernel);

    for _ in 0..params.steps.max(1) {
        if parallel {
            state.parallel_pass(buffer, Axis::Horizontal)?;
            state.parallel_pass(buffer, Axis::Vertical)?;
        } else {
            state.serial_pass(buffer, Axis::Horizontal);
            state.serial_pass(buffer, Axis::Vertical);
        }
    }
    Ok(())
}

/// Blur a single-channel buffer with the triangular kernel.
///
/// Returns a new `width * height` buffer; `source` is not modified. A radius
/// of 0 returns an exact copy. Each of the `steps` iterations runs one
/// horizontal and one vertical pass, so repeated steps converge towards a
/// Gaussian. Samples beyond the image repeat the nearest edge sample.
pub fn fastblur(
    source: &[u8],
    width: usize,
    height: usize,
    radius: usize,
    steps: usize,
) -> Result<Vec<u8>> {
    let params = BlurParams {
        radius,
        steps,
        kernel: BlurKernel::Triangular,
    };
    fastblur_with(source, width, height, &params)
}

/// Blur a single-channel buffer with the kernel selected in `params`.
///
/// Same contract as [`fastblur`]. Buffers of at least
/// [`PARALLEL_PIXEL_THRESHOLD`] samples are processed with one Rayon task per
/// row/column; the result is identical to the serial path.
pub fn fastblur_with(
    source: &[u8],
    width: usize,
    height: usize,
    params: &BlurParams,
) -> Result<Vec<u8>> {
    check_buffer(source.len(), width, height, 1)?;

    let mut buffer = source.to_vec();
    if params.radius < 1 {
        return Ok(buffer);
    }

    let parallel = source.len() >= PARALLEL_PIXEL_THRESHOLD;
    debug!(
        width,
        height,
        radius = params.radius,
        steps = params.steps.max(1),
        kernel = %params.kernel,
        parallel,
        "Blurring buffer"
    );

    blur_passes(&mut buffer, width, height, params, parallel)?;
    Ok(buffer)
}

/// Blur a `(height, width)` array.
pub fn fastblur_array(data: &Array2<u8>, params: &BlurParams) -> Result<Array2<u8>> {
    let (height, width) = data.dim();
    let source: Vec<u8> = data.iter().copied().collect();
    let blurred = fastblur_with(&source, width, height, params)?;
    Ok(Array2::from_shape_vec((height, width), blurred)?)
}

/// Blur each channel of an interleaved buffer independently.
///
/// `source` holds `width * height` pixels of `channels` bytes each.
pub fn blur_interleaved(
    source: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    params: &BlurParams,
) -> Result<Vec<u8>> {
    if channels == 0 {
        return Err(BlurError::UnsupportedChannels {
            channels,
            expected: 1,
        });
    }
    check_buffer(source.len(), width, height, channels)?;

    let mut output = vec![0u8; source.len()];
    for channel in 0..channels {
        let plane: Vec<u8> = source.iter().skip(channel).step_by(channels).copied().collect();
        let blurred = fastblur_with(&plane, width, height, params)?;
        for (dst, value) in output
            .iter_mut()
            .skip(channel)
            .step_by(channels)
            .zip(blurred)
        {
            *dst = value;
        }
    }
    Ok(output)
}
