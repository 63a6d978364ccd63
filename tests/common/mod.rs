use image::{ImageOutputFormat, Rgb, RgbImage};
use trickplay::bif::BIF_MAGIC_NUMBERS;

/// Small solid-colour JPEG.
fn jpeg_bytes(width: u32, height: u32, shade: u8) -> Vec<u8> {
    let mut buffer = Vec::new();
    RgbImage::from_pixel(width, height, Rgb([shade, shade, shade]))
        .write_to(&mut std::io::Cursor::new(&mut buffer), ImageOutputFormat::Jpeg(85))
        .expect("encode test jpeg");
    buffer
}

/// BIF file with one JPEG per timestamp.
pub fn bif_file(multiplier: u32, timestamps: &[u32]) -> Vec<u8> {
    let payloads: Vec<Vec<u8>> = timestamps
        .iter()
        .map(|t| jpeg_bytes(32, 18, (*t * 40) as u8))
        .collect();

    let mut out = Vec::new();
    out.extend_from_slice(&BIF_MAGIC_NUMBERS);
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(timestamps.len() as u32).to_le_bytes());
    out.extend_from_slice(&multiplier.to_le_bytes());
    out.resize(64, 0);

    let mut offset = (64 + timestamps.len() * 8) as u32;
    for (timestamp, payload) in timestamps.iter().zip(&payloads) {
        out.extend_from_slice(&timestamp.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());
        offset += payload.len() as u32;
    }
    for payload in &payloads {
        out.extend_from_slice(payload);
    }
    out
}
