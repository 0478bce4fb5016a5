use crate::core::actions::cancellation::Cancelled;
use crate::core::data::frame_buffer::FrameBufferError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::gradient::GradientError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("frame buffer: {0}")]
    FrameBuffer(#[from] FrameBufferError),
    #[error("gradient: {0}")]
    Gradient(#[from] GradientError),
    #[error("mandelbrot: {0}")]
    Mandelbrot(#[from] MandelbrotError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl RenderError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
