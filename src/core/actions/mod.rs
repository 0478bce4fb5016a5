pub mod cancellation;
pub mod navigate;
pub mod render_frame;
