mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::pixel_format::{copy_pixels_to_rgba, pixels_to_rgb};
pub use controllers::cli::options::{CliOptions, DEFAULT_OUTPUT_PATH};
pub use controllers::cli::render_to_file::RenderToFileController;
pub use controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, RenderEvent,
    RenderFailure, RenderRequest,
};
pub use controllers::ports::frame_publisher::FramePublisher;
pub use controllers::session::errors::SessionError;
pub use controllers::session::render_session::RenderSession;
pub use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::navigate::navigation_command::{
    NavigationCommand, NavigationParseError, apply_navigation_command,
};
pub use crate::core::actions::render_frame::errors::RenderError;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::render_frame::{render_frame, render_frame_into};
pub use crate::core::actions::render_frame::render_frame_parallel_rayon::{
    render_frame_parallel_rayon, render_frame_parallel_rayon_cancelable,
};
pub use crate::core::actions::render_frame::render_gradient_preview::render_gradient_preview;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::pixel::{BYTES_PER_PIXEL, Pixel};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{ESCAPE_RADIUS_SQUARED, MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::gradient::{GradientError, GradientTable};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use presenters::file::ppm::{PpmError, PpmFilePresenter, write_ppm};

#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use input::gui::run_gui;
