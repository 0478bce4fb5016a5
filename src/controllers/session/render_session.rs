use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::controllers::interactive::types::RenderRequest;
use crate::controllers::ports::frame_publisher::FramePublisher;
use crate::controllers::session::errors::SessionError;
use crate::core::actions::navigate::navigation_command::{
    NavigationCommand, apply_navigation_command,
};
use crate::core::actions::render_frame::render_frame::render_frame_into;
use crate::core::actions::render_frame::render_frame_parallel_rayon::render_frame_parallel_rayon;
use crate::core::actions::render_frame::render_gradient_preview::render_gradient_preview;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::gradient::GradientTable;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

fn frame_buffer_for(config: &MandelbrotConfig) -> FrameBuffer {
    match config.max_pixels {
        Some(limit) => FrameBuffer::with_capacity_limit(limit),
        None => FrameBuffer::default(),
    }
}

/// All mutable render state of one explorer: the viewport, the gradient and a
/// front/back pair of frame buffers.
///
/// Frames are composed into the back buffer and swapped to the front only when
/// complete, so [`RenderSession::front`] never exposes a partial frame.
#[derive(Debug)]
pub struct RenderSession {
    config: MandelbrotConfig,
    viewport: Viewport,
    gradient: Arc<GradientTable>,
    algorithm: MandelbrotAlgorithm,
    width: u32,
    height: u32,
    front: FrameBuffer,
    back: FrameBuffer,
    frames_rendered: u64,
}

impl RenderSession {
    pub fn new(config: MandelbrotConfig) -> Result<Self, SessionError> {
        let viewport = config.viewport()?;
        let gradient = Arc::new(GradientTable::new(config.max_iterations)?);
        let algorithm = MandelbrotAlgorithm::new(config.max_iterations)?;
        let mut back = frame_buffer_for(&config);
        back.resize(config.width, config.height)?;

        Ok(Self {
            config,
            viewport,
            gradient,
            algorithm,
            width: config.width,
            height: config.height,
            front: frame_buffer_for(&config),
            back,
            frames_rendered: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), SessionError> {
        viewport.validate()?;
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn gradient(&self) -> &GradientTable {
        &self.gradient
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Changes the pixel size of future frames. The viewport is left alone, so
    /// the view stays centered on the same world point.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SessionError> {
        self.back.resize(width, height)?;
        self.width = width;
        self.height = height;

        debug!(width, height, "session resized");
        Ok(())
    }

    pub fn navigate(&mut self, command: NavigationCommand) -> Viewport {
        self.viewport = apply_navigation_command(self.viewport, command);

        info!(
            %command,
            scale = self.viewport.scale(),
            center_x = self.viewport.center_x(),
            center_y = self.viewport.center_y(),
            "viewport changed"
        );

        self.viewport
    }

    /// Rebuilds the gradient table for a new iteration limit.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), SessionError> {
        let gradient = GradientTable::new(max_iterations)?;
        let algorithm = MandelbrotAlgorithm::new(max_iterations)?;

        self.gradient = Arc::new(gradient);
        self.algorithm = algorithm;
        self.config.max_iterations = max_iterations;

        Ok(())
    }

    /// Composites the current viewport and makes it the front frame.
    ///
    /// On failure the previous front frame stays in place.
    pub fn render(&mut self) -> Result<&FrameBuffer, SessionError> {
        let start = Instant::now();
        let (width, height) = (self.width, self.height);

        if self.config.parallel {
            render_frame_parallel_rayon(
                &mut self.back,
                &self.viewport,
                &self.algorithm,
                self.gradient.as_ref(),
                width,
                height,
            )?;
        } else {
            render_frame_into(
                &mut self.back,
                &self.viewport,
                &self.algorithm,
                self.gradient.as_ref(),
                width,
                height,
            )?;
        }

        self.swap_buffers();

        debug!(
            width,
            height,
            parallel = self.config.parallel,
            elapsed = ?start.elapsed(),
            "frame rendered"
        );

        Ok(&self.front)
    }

    /// Renders the gradient strip instead of the fractal.
    pub fn render_gradient_preview(&mut self) -> Result<&FrameBuffer, SessionError> {
        render_gradient_preview(&mut self.back, &self.gradient, self.width, self.height)?;
        self.swap_buffers();

        Ok(&self.front)
    }

    fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
        self.frames_rendered += 1;
    }

    /// The last completed frame. Empty until the first render.
    #[must_use]
    pub fn front(&self) -> &FrameBuffer {
        &self.front
    }

    pub fn publish<P: FramePublisher>(&self, publisher: &mut P) -> Result<(), P::Error> {
        publisher.publish_frame(&self.front)
    }

    /// Snapshot of everything a background renderer needs for the next frame.
    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            viewport: self.viewport,
            gradient: Arc::clone(&self.gradient),
            width: self.width,
            height: self.height,
            max_pixels: self.config.max_pixels,
        }
    }
}
