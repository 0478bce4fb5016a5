//! Command line of the headless renderer.

use std::path::PathBuf;

use clap::Parser;

use crate::core::actions::navigate::navigation_command::NavigationCommand;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_SCALE,
    DEFAULT_WIDTH, MandelbrotConfig,
};

pub const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

/// Render the Mandelbrot set to a binary PPM file
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "mandelbrot_explorer", version, about)]
pub struct CliOptions {
    /// Frame width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Iteration limit, also the gradient size
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// World units per pixel
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Real coordinate of the view center
    #[arg(long, default_value_t = DEFAULT_CENTER_X, allow_negative_numbers = true)]
    pub center_x: f64,

    /// Imaginary coordinate of the view center
    #[arg(long, default_value_t = DEFAULT_CENTER_Y, allow_negative_numbers = true)]
    pub center_y: f64,

    /// Navigation applied before rendering: up, down, left, right, in/+, out/-
    #[arg(long = "nav", value_delimiter = ',')]
    pub navigation: Vec<NavigationCommand>,

    /// Where to write the frame
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Render the gradient as a strip instead of the fractal
    #[arg(long)]
    pub gradient_preview: bool,

    /// Composite on the calling thread instead of the rayon pool
    #[arg(long)]
    pub serial: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            scale: DEFAULT_SCALE,
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            navigation: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            gradient_preview: false,
            serial: false,
        }
    }
}

impl CliOptions {
    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            max_iterations: self.max_iterations,
            scale: self.scale,
            center_x: self.center_x,
            center_y: self.center_y,
            width: self.width,
            height: self.height,
            parallel: !self.serial,
            ..MandelbrotConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<CliOptions, clap::Error> {
        CliOptions::try_parse_from(std::iter::once("mandelbrot_explorer").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let options = parse(&[]).unwrap();

        assert_eq!(options, CliOptions::default());
        assert_eq!(options.config(), MandelbrotConfig::default());
        assert_eq!(options.output, PathBuf::from("output/mandelbrot.ppm"));
    }

    #[test]
    fn test_all_value_options() {
        let options = parse(&[
            "--width", "320", "--height=240", "--max-iterations", "64", "--scale", "0.01",
            "--center-x", "-1.25", "--center-y=0.5", "--output", "out/frame.ppm",
        ])
        .unwrap();

        let config = options.config();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert_eq!(config.max_iterations, 64);
        assert_eq!(config.scale, 0.01);
        assert_eq!(config.center_x, -1.25);
        assert_eq!(config.center_y, 0.5);
        assert_eq!(options.output, PathBuf::from("out/frame.ppm"));
    }

    #[test]
    fn test_flags() {
        let options = parse(&["--serial", "--gradient-preview"]).unwrap();

        assert!(!options.config().parallel);
        assert!(options.gradient_preview);
    }

    #[test]
    fn test_navigation_list_accumulates() {
        let options = parse(&["--nav", "in, in,left", "--nav=+,down"]).unwrap();

        assert_eq!(
            options.navigation,
            vec![
                NavigationCommand::ZoomIn,
                NavigationCommand::ZoomIn,
                NavigationCommand::PanLeft,
                NavigationCommand::ZoomIn,
                NavigationCommand::PanDown,
            ]
        );
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = parse(&["--colour", "red"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let err = parse(&["--width"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        let err = parse(&["--width", "wide"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_bad_navigation_command_is_rejected() {
        let err = parse(&["--nav", "up,sideways"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_huge_dimensions_parse_and_are_left_to_the_session() {
        let options = parse(&["--width", "4294967295", "--height", "4294967295"]).unwrap();

        assert_eq!((options.config().width, options.config().height), (u32::MAX, u32::MAX));
    }
}
