use crate::core::data::frame_buffer::FrameBuffer;

/// Consumer of completed frames: a window surface, a file, a test recorder.
///
/// Implementations only borrow the frame for the duration of the call.
pub trait FramePublisher {
    type Error: std::error::Error + Send + Sync + 'static;

    fn publish_frame(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}
