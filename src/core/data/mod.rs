pub mod complex;
pub mod frame_buffer;
pub mod pixel;
pub mod viewport;
