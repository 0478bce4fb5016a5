//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel::{BYTES_PER_PIXEL, Pixel};

/// Copies frame pixels into an RGBA surface, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not exactly `src.len() * 4`.
pub fn copy_pixels_to_rgba(src: &[Pixel], dst: &mut [u8]) {
    let expected_dst_len = src.len() * BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    // Pixel is four u8 fields, so the surface can be viewed as pixels directly.
    let dst_pixels: &mut [Pixel] = bytemuck::cast_slice_mut(dst);
    dst_pixels.copy_from_slice(src);

    for pixel in dst_pixels {
        pixel.reserved = 255;
    }
}

/// Packs frame pixels as tightly packed RGB triples, dropping the reserved byte.
#[must_use]
pub fn pixels_to_rgb(src: &[Pixel]) -> Vec<u8> {
    src.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_pixels_to_rgba_known_values() {
        let src = [
            Pixel::rgb(255, 0, 0),
            Pixel::rgb(0, 255, 0),
            Pixel::rgb(0, 0, 255),
            Pixel::rgb(255, 255, 255),
        ];
        let mut dst = vec![0; src.len() * 4];

        copy_pixels_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_pixels_to_rgba_overwrites_reserved_byte() {
        let src = [Pixel { r: 128, g: 64, b: 32, reserved: 7 }];
        let mut dst = vec![0; 4];

        copy_pixels_to_rgba(&src, &mut dst);

        assert_eq!(dst, vec![128, 64, 32, 255]);
    }

    #[test]
    fn test_copy_pixels_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_pixels_to_rgba(&[], &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_pixels_to_rgba_rejects_mismatched_lengths() {
        let mut dst = vec![0; 7];

        copy_pixels_to_rgba(&[Pixel::BLACK, Pixel::BLACK], &mut dst);
    }

    #[test]
    fn test_pixels_to_rgb_drops_reserved_byte() {
        let src = [Pixel::rgb(10, 20, 30), Pixel { r: 40, g: 50, b: 60, reserved: 1 }];

        assert_eq!(pixels_to_rgb(&src), vec![10, 20, 30, 40, 50, 60]);
    }
}
