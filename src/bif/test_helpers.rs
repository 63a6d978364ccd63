use super::types::{BIF_MAGIC_NUMBERS, INDEX_ENTRY_SIZE, INDEX_OFFSET};
use image::{ImageOutputFormat, Rgb, RgbImage};

/// Small solid-colour JPEG.
pub fn jpeg_bytes(width: u32, height: u32, shade: u8) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([shade, shade, shade]));
    let mut buffer = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut buffer), ImageOutputFormat::Jpeg(85))
        .expect("encode test jpeg");
    buffer
}

/// Build a BIF file laid out the way servers emit it: header, index, payloads.
pub fn build_bif(version: u32, multiplier: u32, entries: &[(u32, Vec<u8>)]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&BIF_MAGIC_NUMBERS);
    out.extend_from_slice(&version.to_le_bytes());
    out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
    out.extend_from_slice(&multiplier.to_le_bytes());
    out.resize(INDEX_OFFSET, 0);

    let mut offset = (INDEX_OFFSET + entries.len() * INDEX_ENTRY_SIZE) as u32;
    for (timestamp, payload) in entries {
        out.extend_from_slice(&timestamp.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());
        offset += payload.len() as u32;
    }
    for (_, payload) in entries {
        out.extend_from_slice(payload);
    }
    out
}
