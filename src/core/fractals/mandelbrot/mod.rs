pub mod algorithm;
pub mod errors;
pub mod gradient;
pub mod mandelbrot_config;
