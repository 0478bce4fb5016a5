use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Squared magnitude at which an orbit is considered to have escaped.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z = z² + c` from `z = 0` and returns how many steps ran before
/// `|z|² >= 4` or `max_iterations` was reached.
///
/// A result of `max_iterations` means the point is assumed to be in the set.
/// Every point is iterated, however far it lies from the set.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::default();
    let mut iteration = 0;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z * z + c;
        iteration += 1;
    }

    iteration
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn compute(&self, point: Complex) -> u32 {
        escape_time(point, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        assert_eq!(
            MandelbrotAlgorithm::new(0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_origin_is_in_the_set() {
        for max_iterations in [1, 2, 10, 1000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), max_iterations), max_iterations);
        }
    }

    #[test]
    fn test_far_point_escapes_after_first_iteration() {
        // z1 = 3 + 3i, |z1|² = 18
        assert_eq!(escape_time(Complex::new(3.0, 3.0), 1000), 1);
    }

    #[test]
    fn test_boundary_of_escape_radius_counts_as_escaped() {
        // z1 = -2, |z1|² = 4 is not < 4
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 1000), 1);
        // z1 = 2, |z1|² = 4
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 1000), 1);
    }

    #[test]
    fn test_known_escape_counts() {
        // z1 = 1, z2 = 2
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 10), 2);
        // z1 = -1-i, z2 = -1+i, z3 = -1-3i
        assert_eq!(escape_time(Complex::new(-1.0, -1.0), 10), 3);
        assert_eq!(escape_time(Complex::new(0.5, 0.5), 1000), 5);
    }

    #[test]
    fn test_period_two_orbit_is_in_the_set() {
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 500), 500);
        assert_eq!(escape_time(Complex::new(-0.5, 0.0), 1000), 1000);
    }

    #[test]
    fn test_result_never_exceeds_max_iterations() {
        for i in -20..=20 {
            for j in -20..=20 {
                let c = Complex::new(f64::from(i) * 0.1, f64::from(j) * 0.1);
                assert!(escape_time(c, 50) <= 50);
            }
        }
    }

    #[test]
    fn test_algorithm_delegates_to_escape_time() {
        let algorithm = MandelbrotAlgorithm::new(64).unwrap();
        let c = Complex::new(-0.75, 0.1);

        assert_eq!(algorithm.compute(c), escape_time(c, 64));
        assert_eq!(algorithm.max_iterations(), 64);
    }
}
