use tracing::{debug, info};

use crate::error::Result;
use crate::filters::fastblur::blur_interleaved;
use crate::filters::unsharp_mask::unsharp_frame;
use crate::frame::Frame;

use super::config::FilterStep;

/// Apply a single filter step to a frame in place.
pub fn apply_filter_step(frame: &mut Frame, step: &FilterStep) -> Result<()> {
    debug!(step = %step, "Applying filter");
    match step {
        FilterStep::Blur(params) => {
            let blurred = blur_interleaved(
                frame.as_bytes(),
                frame.width(),
                frame.height(),
                frame.channels(),
                params,
            )?;
            frame.as_bytes_mut().copy_from_slice(&blurred);
        }
        FilterStep::Unsharp(params) => unsharp_frame(frame, params)?,
    }
    Ok(())
}

/// Apply every step in order. Stops at the first failing step.
pub fn apply_filters(frame: &mut Frame, steps: &[FilterStep]) -> Result<()> {
    for step in steps {
        apply_filter_step(frame, step)?;
    }
    info!(
        count = steps.len(),
        width = frame.width(),
        height = frame.height(),
        "Filters applied"
    );
    Ok(())
}
