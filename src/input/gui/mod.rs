//! Windowed explorer: winit for the window and keyboard, pixels for the
//! framebuffer, the interactive controller for rendering.

mod app;
pub mod errors;
pub mod events;
pub mod keymap;

pub use app::run_gui;
