use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::divergence_matrix::DivergenceMatrix;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Colours every matrix cell, keeping the matrix layout: pixel (x, y) is cell (row y, col x).
///
/// Consumes the matrix; it has no further use once rasterised.
#[must_use]
pub fn generate_pixel_buffer<CMap>(matrix: DivergenceMatrix, mapper: &CMap) -> PixelBuffer
where
    CMap: ColourMap<i32>,
{
    let mut pixels = PixelBuffer::new(matrix.cols(), matrix.rows());

    for (pixel, &value) in pixels.buffer_mut().chunks_exact_mut(3).zip(matrix.values()) {
        let colour = mapper.map(value);
        pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
    }

    pixels
}
