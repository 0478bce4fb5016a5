use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame::fill_row;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;

/// Renders a frame with rows partitioned across rayon's work-stealing pool.
///
/// Produces exactly the same pixels as
/// [`render_frame_into`](crate::core::actions::render_frame::render_frame::render_frame_into).
/// For cancel-aware rendering, use [`render_frame_parallel_rayon_cancelable`].
pub fn render_frame_parallel_rayon<Alg, CMap>(
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
    render_frame_parallel_rayon_cancelable(
        target,
        viewport,
        algorithm,
        colour_map,
        width,
        height,
        &NeverCancel,
    )
}

/// Like [`render_frame_parallel_rayon`], but polls `cancel` at the start of
/// every row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// Returns [`RenderError::Cancelled`] once the token fires. The rows already
/// written stay in `target`, so callers must not publish it after a cancel.
pub fn render_frame_parallel_rayon_cancelable<Alg, CMap, C>(
    target: &mut FrameBuffer,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    width: u32,
    height: u32,
    cancel: &C,
) -> Result<(), RenderError>
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
    C: CancelToken,
{
    viewport.validate()?;
    target.resize(width, height)?;

    if target.is_empty() {
        return Ok(());
    }

    let origin = viewport.origin(width, height);
    let scale = viewport.scale();
    let row_width = width as usize;

    target
        .pixels_mut()
        .par_chunks_mut(row_width)
        .enumerate()
        .try_for_each(|(pixel_y, row)| {
            let runs = row.chunks_mut(CANCEL_CHECK_INTERVAL_PIXELS);

            for (first_x, run) in (0u32..).step_by(CANCEL_CHECK_INTERVAL_PIXELS).zip(runs) {
                if cancel.is_cancelled() {
                    return Err(RenderError::Cancelled(Cancelled));
                }

                fill_row(run, first_x, pixel_y as u32, origin, scale, algorithm, colour_map);
            }

            Ok(())
        })
}
