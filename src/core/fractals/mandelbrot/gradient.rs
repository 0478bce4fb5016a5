use std::f64::consts::{PI, TAU};

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::pixel::Pixel;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    #[error("gradient table needs at least one entry")]
    ZeroMaxIterations,
}

fn clamp8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Colour for iteration `index` of `max_iterations`: a hue cycle whose
/// brightness falls off towards both ends of the iteration range.
fn gradient_pixel(index: u32, max_iterations: u32) -> Pixel {
    let j = f64::from(index) / f64::from(max_iterations);
    let k = (j + 1.5) * (1.0 - j) * 127.0;
    let angle = (1.0 - j) * TAU;

    Pixel::rgb(
        clamp8((1.0 + angle.sin()) * k),
        clamp8((1.0 + angle.cos()) * k),
        clamp8((1.0 + (angle + PI).sin()) * k),
    )
}

/// Precomputed iteration-count to colour lookup, built once per `max_iterations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientTable {
    entries: Vec<Pixel>,
}

impl GradientTable {
    pub fn new(max_iterations: u32) -> Result<Self, GradientError> {
        if max_iterations == 0 {
            return Err(GradientError::ZeroMaxIterations);
        }

        let entries = (0..max_iterations)
            .map(|index| gradient_pixel(index, max_iterations))
            .collect();

        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.entries.len() as u32
    }

    #[must_use]
    pub fn entries(&self) -> &[Pixel] {
        &self.entries
    }

    /// Looks up the colour for an escape count. Counts of `max_iterations` and
    /// above (points in the set) take the last entry.
    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> Pixel {
        let last = self.entries.len() - 1;
        self.entries[(iterations as usize).min(last)]
    }
}

impl ColourMap for GradientTable {
    #[inline]
    fn map(&self, iterations: u32) -> Pixel {
        self.colour_for(iterations)
    }
}
