use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageError, ImageResult};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Lossless RGB8 PNG output.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFilePresenter;

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn dimension(value: usize) -> ImageResult<u32> {
    u32::try_from(value).map_err(|_| {
        ImageError::Parameter(image::error::ParameterError::from_kind(
            image::error::ParameterErrorKind::DimensionMismatch,
        ))
    })
}

impl FilePresenterPort for PngFilePresenter {
    fn extension(&self) -> &str {
        "png"
    }

    fn encode(&self, buffer: &PixelBuffer) -> ImageResult<Vec<u8>> {
        let mut bytes = Vec::new();

        PngEncoder::new(&mut bytes).write_image(
            buffer.buffer(),
            dimension(buffer.width())?,
            dimension(buffer.height())?,
            ColorType::Rgb8,
        )?;

        Ok(bytes)
    }
}
