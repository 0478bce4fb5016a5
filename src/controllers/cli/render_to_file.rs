use tracing::{info, warn};

use crate::controllers::cli::options::CliOptions;
use crate::controllers::ports::frame_publisher::FramePublisher;
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::render_session::RenderSession;
use crate::core::data::frame_buffer::FrameBuffer;

/// Headless rendering: applies the requested navigation to a fresh session,
/// renders one frame and hands it to a publisher.
pub struct RenderToFileController<P: FramePublisher> {
    publisher: P,
    session: RenderSession,
    options: CliOptions,
}

impl<P: FramePublisher> RenderToFileController<P> {
    pub fn new(options: CliOptions, publisher: P) -> Result<Self, SessionError> {
        let mut session = RenderSession::new(options.config())?;

        for &command in &options.navigation {
            session.navigate(command);
        }

        Ok(Self {
            publisher,
            session,
            options,
        })
    }

    #[must_use]
    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    pub fn generate(&mut self) -> Result<&FrameBuffer, SessionError> {
        let config = self.session.config();
        info!(
            width = config.width,
            height = config.height,
            max_iterations = config.max_iterations,
            gradient_preview = self.options.gradient_preview,
            "rendering"
        );

        if self.options.gradient_preview {
            self.session.render_gradient_preview()
        } else {
            self.session.render()
        }
    }

    /// Publishes the last generated frame. A zero-sized frame is still
    /// published, as a header-only image.
    pub fn write(&mut self) -> Result<(), P::Error> {
        if self.session.frames_rendered() == 0 {
            warn!("write called before generate; nothing to publish");
            return Ok(());
        }

        let (width, height) = self.session.dimensions();
        info!(width, height, "publishing frame");
        self.session.publish(&mut self.publisher)
    }

    pub fn into_publisher(self) -> P {
        self.publisher
    }
}
