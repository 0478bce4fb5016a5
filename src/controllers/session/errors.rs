use crate::core::actions::render_frame::errors::RenderError;
use crate::core::data::frame_buffer::FrameBufferError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::gradient::GradientError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("invalid viewport configuration: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid gradient configuration: {0}")]
    Gradient(#[from] GradientError),
    #[error("invalid mandelbrot configuration: {0}")]
    Mandelbrot(#[from] MandelbrotError),
    #[error("frame buffer: {0}")]
    FrameBuffer(#[from] FrameBufferError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}
