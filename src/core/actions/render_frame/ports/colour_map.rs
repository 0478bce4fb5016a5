use crate::core::data::pixel::Pixel;

pub trait ColourMap: Sync {
    fn map(&self, iterations: u32) -> Pixel;
}
