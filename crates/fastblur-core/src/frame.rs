use crate::consts::RGBA_CHANNELS;
use crate::error::{check_buffer, BlurError, Result};

/// An owned raster: `width * height` pixels of `channels` interleaved bytes,
/// row-major. The buffer length always matches the dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: usize, height: usize, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(BlurError::UnsupportedChannels {
                channels,
                expected: 1,
            });
        }
        check_buffer(data.len(), width, height, channels)?;
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Single-channel frame.
    pub fn luma(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, 1)
    }

    /// Four-channel RGBA frame.
    pub fn rgba(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, RGBA_CHANNELS)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
