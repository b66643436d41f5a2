use image::ImageResult;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes a finished pixel buffer into the bytes of an image file.
pub trait FilePresenterPort: Send + Sync {
    /// File extension of the encoded format, without the dot.
    fn extension(&self) -> &str;

    fn encode(&self, buffer: &PixelBuffer) -> ImageResult<Vec<u8>>;
}
