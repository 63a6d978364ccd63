use image::DynamicImage;
use std::collections::HashMap;

/// Signature every BIF file starts with.
pub const BIF_MAGIC_NUMBERS: [u8; 8] = [0x89, 0x42, 0x49, 0x46, 0x0D, 0x0A, 0x1A, 0x0A];
pub const SUPPORTED_BIF_VERSION: u32 = 0;
/// Multiplier used when the header stores 0.
pub const DEFAULT_TIMESTAMP_MULTIPLIER: u32 = 1000;
/// Size of the reserved region between the multiplier and the index table.
pub const RESERVED_HEADER_BYTES: usize = 44;
/// Offset of the first index entry.
pub const INDEX_OFFSET: usize = 64;
pub const INDEX_ENTRY_SIZE: usize = 8;

/// One entry of the BIF index table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BifIndexEntry {
    /// Frame id; multiply by the timestamp multiplier to get player time.
    pub timestamp: u32,
    /// Absolute byte offset of the image in the file.
    pub offset: u32,
}

/// Fixed-size BIF header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BifHeader {
    pub version: u32,
    pub image_count: u32,
    /// Already defaulted, never 0.
    pub timestamp_multiplier: u32,
}

/// Fully decoded BIF file
///
/// Built once per trickplay resource and never mutated afterwards, so it can be
/// shared across threads for lookups.
#[derive(Debug, Clone)]
pub struct BifData<I = DynamicImage> {
    pub version: u32,
    pub timestamp_multiplier: u32,
    pub image_count: u32,
    /// Decoded images keyed by the index entry's timestamp field. Entries whose
    /// bytes failed to decode are absent.
    pub images: HashMap<u32, I>,
    /// Requested thumbnail width, a display parameter.
    pub image_width: u32,
}

impl<I> BifData<I> {
    /// Thumbnail shown at `player_timestamp`, if one exists for that exact frame.
    pub fn frame_at(&self, player_timestamp: u64) -> Option<&I> {
        super::lookup::frame_at(player_timestamp, self)
    }

    /// Number of images that decoded successfully.
    pub fn decoded_count(&self) -> usize {
        self.images.len()
    }
}
