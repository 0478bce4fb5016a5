pub mod frame_publisher;
