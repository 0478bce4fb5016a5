use std::sync::Arc;

use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::gradient::GradientTable;

/// Immutable snapshot of the parameters for one frame.
///
/// `PartialEq` lets the input side skip submitting an unchanged view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub gradient: Arc<GradientTable>,
    pub width: u32,
    pub height: u32,
    /// Largest frame the worker may allocate, in pixels.
    pub max_pixels: Option<usize>,
}
