use crate::core::data::viewport::{Viewport, ViewportError};

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_SCALE: f64 = 0.005;
pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Startup settings for a render session. Hosts override fields before
/// building a [`crate::RenderSession`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    pub scale: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: u32,
    pub height: u32,
    /// Largest frame, in pixels, the session may allocate. `None` is unbounded.
    pub max_pixels: Option<usize>,
    /// Composite frames on the rayon pool instead of the calling thread.
    pub parallel: bool,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            scale: DEFAULT_SCALE,
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_pixels: None,
            parallel: true,
        }
    }
}

impl MandelbrotConfig {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(self.scale, self.center_x, self.center_y)
    }
}
