use crate::core::data::complex::Complex;

/// Escape-time style evaluator driven by the compositor for every pixel.
pub trait FractalAlgorithm: Sync {
    /// Iteration count for `point`, in `0..=self.max_iterations()`.
    fn compute(&self, point: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
