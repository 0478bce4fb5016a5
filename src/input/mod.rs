//! Input adapters: translate user input into navigation and render requests.

pub mod gui;
