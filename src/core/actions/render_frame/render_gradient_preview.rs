use crate::core::actions::render_frame::errors::RenderError;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::fractals::mandelbrot::gradient::GradientTable;

/// Paints the whole gradient left to right across the frame, ignoring the
/// fractal. Column `px` shows entry `px * len / width`; every row is identical.
pub fn render_gradient_preview(
    target: &mut FrameBuffer,
    gradient: &GradientTable,
    width: u32,
    height: u32,
) -> Result<(), RenderError> {
    target.resize(width, height)?;

    if target.is_empty() {
        return Ok(());
    }

    let entries = gradient.len() as u64;

    for row in target.pixels_mut().chunks_exact_mut(width as usize) {
        for (pixel_x, pixel) in (0u64..).zip(row.iter_mut()) {
            let index = pixel_x * entries / u64::from(width);
            *pixel = gradient.colour_for(index as u32);
        }
    }

    Ok(())
}
