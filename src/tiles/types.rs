use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Server description of a tile-sheet trickplay set at one width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrickplayInfo {
    /// Thumbnail width in pixels.
    pub width: u32,
    /// Thumbnail height in pixels.
    pub height: u32,
    /// Thumbnails per sheet row.
    pub tile_width: u32,
    /// Thumbnails per sheet column.
    pub tile_height: u32,
    pub thumbnail_count: u32,
    /// Milliseconds between two thumbnails.
    pub interval: u64,
    #[serde(default)]
    pub bandwidth: u32,
}

impl TrickplayInfo {
    /// `None` when the grid size does not fit a `u32`.
    pub fn thumbnails_per_sheet(&self) -> Option<u32> {
        self.tile_width.checked_mul(self.tile_height)
    }

    /// Number of sheets needed to hold `thumbnail_count` thumbnails.
    ///
    /// Zero for an empty or overflowing grid.
    pub fn sheet_count(&self) -> u32 {
        match self.thumbnails_per_sheet() {
            Some(per_sheet) if per_sheet > 0 => self.thumbnail_count.div_ceil(per_sheet),
            _ => 0,
        }
    }
}

/// Thumbnails split out of tile sheets, in playback order
#[derive(Debug, Clone)]
pub struct Trickplay<I = RgbaImage> {
    pub interval: u64,
    pub images: Vec<I>,
}

impl<I> Trickplay<I> {
    /// Thumbnail shown at `position` milliseconds.
    pub fn frame_at(&self, position: u64) -> Option<&I> {
        if self.interval == 0 {
            return None;
        }
        let index = usize::try_from(position / self.interval).ok()?;
        self.images.get(index)
    }
}
