use thiserror::Error;

use crate::controllers::session::errors::SessionError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to create event loop")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixels surface")]
    Surface(#[from] pixels::Error),
    #[error("failed to start render worker")]
    Worker(#[from] std::io::Error),
    #[error("invalid render session")]
    Session(#[from] SessionError),
}
