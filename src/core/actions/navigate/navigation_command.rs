use std::fmt;
use std::str::FromStr;

use crate::core::data::viewport::Viewport;
use thiserror::Error;

/// Screen pixels covered by one pan step at any zoom level.
pub const PAN_STEP_PIXELS: f64 = 100.0;
pub const ZOOM_IN_FACTOR: f64 = 0.5;
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown navigation command {0:?} (expected up, down, left, right, in or out)")]
pub struct NavigationParseError(pub String);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NavigationCommand {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
}

impl NavigationCommand {
    pub const ALL: &'static [Self] = &[
        Self::PanUp,
        Self::PanDown,
        Self::PanLeft,
        Self::PanRight,
        Self::ZoomIn,
        Self::ZoomOut,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PanUp => "up",
            Self::PanDown => "down",
            Self::PanLeft => "left",
            Self::PanRight => "right",
            Self::ZoomIn => "in",
            Self::ZoomOut => "out",
        }
    }
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NavigationCommand {
    type Err = NavigationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::PanUp),
            "down" => Ok(Self::PanDown),
            "left" => Ok(Self::PanLeft),
            "right" => Ok(Self::PanRight),
            "in" | "+" => Ok(Self::ZoomIn),
            "out" | "-" => Ok(Self::ZoomOut),
            _ => Err(NavigationParseError(s.to_string())),
        }
    }
}

/// Returns the viewport after `command`. Pans move by a fixed number of screen
/// pixels, so their world distance shrinks as the view zooms in. Neither scale
/// nor center is bounded.
#[must_use]
pub fn apply_navigation_command(viewport: Viewport, command: NavigationCommand) -> Viewport {
    let scale = viewport.scale();
    let step = scale * PAN_STEP_PIXELS;
    let (center_x, center_y) = (viewport.center_x(), viewport.center_y());

    match command {
        NavigationCommand::PanUp => Viewport::new_unchecked(scale, center_x, center_y - step),
        NavigationCommand::PanDown => Viewport::new_unchecked(scale, center_x, center_y + step),
        NavigationCommand::PanLeft => Viewport::new_unchecked(scale, center_x - step, center_y),
        NavigationCommand::PanRight => Viewport::new_unchecked(scale, center_x + step, center_y),
        NavigationCommand::ZoomIn => Viewport::new_unchecked(scale * ZOOM_IN_FACTOR, center_x, center_y),
        NavigationCommand::ZoomOut => Viewport::new_unchecked(scale * ZOOM_OUT_FACTOR, center_x, center_y),
    }
}
