use super::decoder::{ImageCrateDecoder, ImageDecoder};
use super::types::{
    BifData, BifHeader, BifIndexEntry, BIF_MAGIC_NUMBERS, DEFAULT_TIMESTAMP_MULTIPLIER,
    INDEX_ENTRY_SIZE, RESERVED_HEADER_BYTES, SUPPORTED_BIF_VERSION,
};
use crate::bits::ByteCursor;
use crate::errors::{BifError, HeaderFault, TrickplayResult};
use log::debug;
use std::collections::HashMap;

/// Decode a BIF file with the default image decoder.
///
/// Every failure is logged and turned into `None`: missing trickplay data only
/// disables scrubbing previews.
pub fn decode_bif(bytes: &[u8], thumbnail_width: u32) -> Option<BifData> {
    match parse_bif(bytes, thumbnail_width, &ImageCrateDecoder) {
        Ok(data) => Some(data),
        Err(e) => {
            debug!("Trickplay unavailable: {}", e);
            None
        }
    }
}

/// Parse the header and the index table.
pub fn parse_bif_header(bytes: &[u8]) -> TrickplayResult<(BifHeader, Vec<BifIndexEntry>)> {
    let mut cursor = ByteCursor::new(bytes);
    debug!("BIF file size: {}", cursor.len());

    let header = read_header(&mut cursor)?;
    let index = read_index(&mut cursor, header.image_count)?;
    Ok((header, index))
}

/// Parse a BIF file, decoding each embedded image with `decoder`.
///
/// Header faults and truncation abort the parse. An image that fails to decode
/// is left out of `BifData::images`.
pub fn parse_bif<D: ImageDecoder>(
    bytes: &[u8],
    thumbnail_width: u32,
    decoder: &D,
) -> TrickplayResult<BifData<D::Image>> {
    let (header, index) = parse_bif_header(bytes)?;

    let mut images = HashMap::with_capacity(index.len());
    for (i, entry) in index.iter().enumerate() {
        let next_offset = index
            .get(i + 1)
            .map(|next| next.offset as usize)
            .unwrap_or(bytes.len());

        let Some(image_bytes) = bytes.get(entry.offset as usize..next_offset) else {
            debug!(
                "BIF image {} has invalid range {}..{} (file size {})",
                i,
                entry.offset,
                next_offset,
                bytes.len()
            );
            continue;
        };

        match decoder.decode(image_bytes) {
            Ok(image) => {
                images.insert(entry.timestamp, image);
            }
            Err(e) => debug!("Skipping BIF image {}: {}", i, e),
        }
    }

    debug!(
        "Decoded {} of {} BIF images",
        images.len(),
        header.image_count
    );

    Ok(BifData {
        version: header.version,
        timestamp_multiplier: header.timestamp_multiplier,
        image_count: header.image_count,
        images,
        image_width: thumbnail_width,
    })
}

fn read_header(cursor: &mut ByteCursor<'_>) -> TrickplayResult<BifHeader> {
    for expected in BIF_MAGIC_NUMBERS {
        if cursor.read_u8()? != expected {
            debug!("Attempted to read invalid bif file.");
            return Err(HeaderFault::BadMagic.into());
        }
    }

    let version = cursor.read_u32()?;
    if version != SUPPORTED_BIF_VERSION {
        debug!(
            "Client only supports BIF v{} but file is v{}",
            SUPPORTED_BIF_VERSION, version
        );
        return Err(HeaderFault::UnsupportedVersion(version).into());
    }
    debug!("BIF version: {}", version);

    // The count is signed on the wire.
    let image_count = cursor.read_u32()?;
    if image_count as i32 <= 0 {
        debug!("BIF file contains no images.");
        return Err(HeaderFault::NoImages(image_count).into());
    }
    debug!("BIF image count: {}", image_count);

    let timestamp_multiplier = match cursor.read_u32()? {
        0 => DEFAULT_TIMESTAMP_MULTIPLIER,
        m => m,
    };

    cursor.skip(RESERVED_HEADER_BYTES)?;

    Ok(BifHeader {
        version,
        image_count,
        timestamp_multiplier,
    })
}

fn read_index(
    cursor: &mut ByteCursor<'_>,
    image_count: u32,
) -> Result<Vec<BifIndexEntry>, BifError> {
    // Never trust the count for the allocation size.
    let capacity = (image_count as usize).min(cursor.remaining() / INDEX_ENTRY_SIZE);
    let mut index = Vec::with_capacity(capacity);
    for _ in 0..image_count {
        let timestamp = cursor.read_u32()?;
        let offset = cursor.read_u32()?;
        index.push(BifIndexEntry { timestamp, offset });
    }
    Ok(index)
}
