use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::pixel::Pixel;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::gradient::GradientTable;

/// Fills a run of pixels in row `pixel_y` starting at column `first_x`.
/// `origin` and `scale` come from the frame's viewport snapshot, so
/// `x = origin.real + px * scale` matches [`Viewport::world_coordinate_of`]
/// bit for bit.
#[inline]
pub(crate) fn fill_row<Alg, CMap>(
    row: &mut [Pixel],
    first_x: u32,
    pixel_y: u32,
    origin: Complex,
    scale: f64,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    let imag = origin.imag + f64::from(pixel_y) * scale;

    for (pixel_x, pixel) in (first_x..).zip(row.iter_mut()) {
        let point = Complex {
            real: origin.real + f64::from(pixel_x) * scale,
            imag,
        };

        *pixel = colour_map.map(algorithm.compute(point));
    }
}

/// Renders the Mandelbrot set for `viewport` into a new frame on the calling thread.
pub fn render_frame(
    viewport: &Viewport,
    gradient: &GradientTable,
    width: u32,
    height: u32,
) -> Result<FrameBuffer, RenderError> {
    let algorithm = MandelbrotAlgorithm::new(gradient.max_iterations())?;
    let mut frame = FrameBuffer::default();

    render_frame_into(&mut frame, viewport, &algorithm, gradient, width, height)?;

    Ok(frame)
}

/// Resizes `target` to `width` x `height` and fills every pixel, row by row.
///
/// A zero width or height leaves an empty frame. On error the contents of
/// `target` are unspecified.
pub fn render_frame_into<Alg, CMap>(
    target: &mut FrameBuffer,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    width: u32,
    height: u32,
) -> Result<(), RenderError>
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    viewport.validate()?;
    target.resize(width, height)?;

    if target.is_empty() {
        return Ok(());
    }

    let origin = viewport.origin(width, height);
    let scale = viewport.scale();

    for (pixel_y, row) in target
        .pixels_mut()
        .chunks_exact_mut(width as usize)
        .enumerate()
    {
        fill_row(row, 0, pixel_y as u32, origin, scale, algorithm, colour_map);
    }

    Ok(())
}
