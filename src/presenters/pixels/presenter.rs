use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, warn};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::copy_pixels_to_rgba;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Shows worker frames on a `pixels` surface the size of the window.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
        })
    }

    pub fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    /// Copies the newest worker frame into the surface. Returns true when
    /// the surface changed and the window needs a redraw.
    pub fn maybe_draw_frame(&mut self) -> bool {
        let Some(event) = self.adapter.take_render_event() else {
            return false;
        };

        match event {
            RenderEvent::Frame(frame) => {
                let buffer = &frame.frame_buffer;

                if frame.generation > self.last_presented_generation
                    && buffer.width() == self.width
                    && buffer.height() == self.height
                {
                    self.copy_frame_into_surface(&frame);
                    self.has_frame = true;
                    self.last_presented_generation = frame.generation;

                    debug!(
                        generation = frame.generation,
                        elapsed = ?frame.render_duration,
                        "frame presented"
                    );
                    return true;
                }

                false
            }
            RenderEvent::Error(failure) => {
                warn!(generation = failure.generation, error = %failure.error, "render failed");
                false
            }
        }
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.has_frame = false;

        Ok(())
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn copy_frame_into_surface(&mut self, frame: &FrameData) {
        copy_pixels_to_rgba(frame.frame_buffer.pixels(), self.pixels.frame_mut());
    }
}
