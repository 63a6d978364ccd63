use crate::errors::BifError;
use image::DynamicImage;

/// Turns the raw bytes of one embedded thumbnail into an image.
#[cfg_attr(test, mockall::automock(type Image = u32;))]
pub trait ImageDecoder {
    type Image;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, BifError>;
}

/// Decoder backed by the `image` crate; format is guessed from the bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    type Image = DynamicImage;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, BifError> {
        image::load_from_memory(bytes).map_err(|e| BifError::ImageDecode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageOutputFormat, RgbImage};

    #[test]
    fn test_decodes_jpeg() {
        let mut buffer = Vec::new();
        RgbImage::new(8, 4)
            .write_to(&mut std::io::Cursor::new(&mut buffer), ImageOutputFormat::Jpeg(85))
            .unwrap();

        let decoded = ImageCrateDecoder.decode(&buffer).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 4);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = ImageCrateDecoder.decode(&[0xde, 0xad, 0xbe, 0xef]);
        assert!(matches!(result, Err(BifError::ImageDecode(_))));
    }
}
