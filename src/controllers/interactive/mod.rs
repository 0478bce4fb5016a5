//! Background rendering for interactive exploration.
//!
//! The input side submits [`RenderRequest`] snapshots; a worker thread renders
//! the most recent one and hands finished frames to an
//! [`InteractiveControllerPresenterPort`]. Superseded requests are cancelled
//! mid-frame and never presented.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod types;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::render::RenderFailure;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
pub use types::RenderRequest;
