use crate::core::data::pixel::{BYTES_PER_PIXEL, Pixel};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FrameBufferError {
    #[error("frame of {width}x{height} needs {requested} pixels but capacity is {capacity}")]
    CapacityExceeded {
        width: u32,
        height: u32,
        requested: usize,
        capacity: usize,
    },
    #[error("frame dimensions {width}x{height} exceed the largest addressable buffer")]
    DimensionsOverflow { width: u32, height: u32 },
    #[error("could not allocate {requested} pixels for a {width}x{height} frame")]
    AllocationFailed {
        width: u32,
        height: u32,
        requested: usize,
    },
}

/// Pixel count of a `width` x `height` frame, provided its byte size fits
/// in `isize::MAX` (the largest allocation a `Vec` may hold).
fn pixel_count(width: u32, height: u32) -> Result<usize, FrameBufferError> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&count| {
            count
                .checked_mul(BYTES_PER_PIXEL)
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(FrameBufferError::DimensionsOverflow { width, height })
}

/// Row-major grid of [`Pixel`]s sized exactly to the current frame.
///
/// The allocation is reused across resizes when it is large enough. An optional
/// capacity limit turns oversized requests into [`FrameBufferError::CapacityExceeded`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
    capacity_limit: Option<usize>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferError> {
        let mut buffer = Self::default();
        buffer.resize(width, height)?;
        Ok(buffer)
    }

    #[must_use]
    pub fn with_capacity_limit(capacity_limit: usize) -> Self {
        Self {
            capacity_limit: Some(capacity_limit),
            ..Self::default()
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FrameBufferError> {
        let requested = pixel_count(width, height)?;

        if let Some(capacity) = self.capacity_limit
            && requested > capacity
        {
            return Err(FrameBufferError::CapacityExceeded {
                width,
                height,
                requested,
                capacity,
            });
        }

        self.pixels
            .try_reserve_exact(requested.saturating_sub(self.pixels.len()))
            .map_err(|_| FrameBufferError::AllocationFailed {
                width,
                height,
                requested,
            })?;

        self.pixels.resize(requested, Pixel::BLACK);
        self.width = width;
        self.height = height;

        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Iterates rows top to bottom. Yields nothing for an empty frame.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// The frame as raw bytes: row-major, 4 bytes per pixel (r, g, b, reserved).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
