use bytemuck::{Pod, Zeroable};

/// Bytes per pixel in a published frame: red, green, blue and one reserved byte.
pub const BYTES_PER_PIXEL: usize = 4;

/// One frame buffer cell. The layout is fixed so a frame can be handed to a
/// raster consumer as raw bytes; `reserved` carries no alpha and is always 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub reserved: u8,
}

impl Pixel {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, reserved: 0 }
    }
}
