use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport scale must be a positive finite number, got {scale}")]
    InvalidScale { scale: f64 },
    #[error("viewport center must be finite, got ({center_x}, {center_y})")]
    NonFiniteCenter { center_x: f64, center_y: f64 },
}

/// The region of the complex plane mapped onto the frame buffer.
///
/// `scale` is world units per pixel and `(center_x, center_y)` is the world
/// point that sits in the middle of the buffer, whatever its pixel size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    center_x: f64,
    center_y: f64,
}

impl Viewport {
    pub fn new(scale: f64, center_x: f64, center_y: f64) -> Result<Self, ViewportError> {
        let viewport = Self {
            scale,
            center_x,
            center_y,
        };

        viewport.validate()?;
        Ok(viewport)
    }

    /// Builds a viewport without checking it. Navigation uses this since it
    /// never bounds the scale; renderers call [`Viewport::validate`] before use.
    #[must_use]
    pub(crate) const fn new_unchecked(scale: f64, center_x: f64, center_y: f64) -> Self {
        Self {
            scale,
            center_x,
            center_y,
        }
    }

    pub fn validate(&self) -> Result<(), ViewportError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ViewportError::InvalidScale { scale: self.scale });
        }

        if !(self.center_x.is_finite() && self.center_y.is_finite()) {
            return Err(ViewportError::NonFiniteCenter {
                center_x: self.center_x,
                center_y: self.center_y,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_x, self.center_y)
    }

    /// World coordinate of pixel `(0, 0)` for a buffer of the given size.
    #[must_use]
    pub fn origin(&self, width: u32, height: u32) -> Complex {
        Complex {
            real: self.center_x - (f64::from(width) * self.scale / 2.0),
            imag: self.center_y - (f64::from(height) * self.scale / 2.0),
        }
    }

    #[must_use]
    pub fn world_coordinate_of(&self, pixel_x: u32, pixel_y: u32, width: u32, height: u32) -> Complex {
        let origin = self.origin(width, height);

        Complex {
            real: origin.real + f64::from(pixel_x) * self.scale,
            imag: origin.imag + f64::from(pixel_y) * self.scale,
        }
    }
}
