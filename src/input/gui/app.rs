use std::sync::Arc;

use tracing::{error, info, warn};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::InteractiveController;
use crate::controllers::session::render_session::RenderSession;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::keymap::navigation_for_key;
use crate::presenters::pixels::presenter::PixelsPresenter;

const WINDOW_TITLE: &str = "The Mandelbrot Set - move with arrow keys, zoom with +/- keys";

struct GuiApp {
    presenter: PixelsPresenter,
    controller: InteractiveController,
    session: RenderSession,
}

impl GuiApp {
    fn submit_render_request(&mut self) {
        let (width, height) = self.session.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        let request = Arc::new(self.session.render_request());
        self.controller.submit_request(request);
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        if let Some(command) = navigation_for_key(event.physical_key, &event.logical_key) {
            self.session.navigate(command);
            self.submit_render_request();
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(e) = self.presenter.resize(width, height) {
            error!(error = %e, width, height, "failed to resize surface");
            return;
        }

        match self.session.resize(width, height) {
            Ok(()) => self.submit_render_request(),
            Err(e) => warn!(error = %e, width, height, "resize rejected"),
        }
    }
}

/// Opens the explorer window and blocks until it is closed.
pub fn run_gui(mut config: MandelbrotConfig) -> Result<(), GuiError> {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
    let event_loop_proxy = event_loop.create_proxy();

    // pixels borrows the window for the surface's lifetime
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    config.width = size.width;
    config.height = size.height;

    let presenter = PixelsPresenter::new(window, event_loop_proxy)?;
    let controller = InteractiveController::new(presenter.share_adapter())?;
    let session = RenderSession::new(config)?;

    let mut app = GuiApp {
        presenter,
        controller,
        session,
    };

    info!(width = size.width, height = size.height, "window opened");
    app.submit_render_request();

    event_loop.run(move |event, elwt| match event {
        Event::UserEvent(GuiEvent::Wake) => {
            if app.presenter.maybe_draw_frame() {
                window.request_redraw();
            }
        }
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                app.controller.shutdown();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = app.presenter.render() {
                    error!(error = %e, "render failed");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                app.resize(size.width, size.height);
                window.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => app.handle_key(&event),
            _ => {}
        },
        _ => {}
    })?;

    Ok(())
}
