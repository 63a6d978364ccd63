use crate::errors::TrickplayResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Widths a server has generated BIF files for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickplayManifest {
    #[serde(rename = "WidthResolutions", default)]
    pub width_resolutions: Vec<u32>,
}

impl TrickplayManifest {
    /// Largest available width.
    pub fn best_width(&self) -> Option<u32> {
        self.width_resolutions.iter().copied().max()
    }

    /// `preferred` when the server has it, otherwise the largest width.
    pub fn select_width(&self, preferred: Option<u32>) -> Option<u32> {
        match preferred {
            Some(width) if self.width_resolutions.contains(&width) => Some(width),
            _ => self.best_width(),
        }
    }
}

/// Where trickplay resources for an item come from
#[async_trait]
pub trait TrickplaySource: Send + Sync {
    async fn fetch_manifest(&self, item_id: &str) -> TrickplayResult<TrickplayManifest>;

    /// Raw BIF bytes for `item_id` at `width`.
    async fn fetch_bif(&self, item_id: &str, width: u32) -> TrickplayResult<Vec<u8>>;

    /// Raw bytes of tile sheet `index` for `item_id` at `width`.
    async fn fetch_tile_sheet(
        &self,
        item_id: &str,
        width: u32,
        index: u32,
    ) -> TrickplayResult<Vec<u8>>;

    fn print_stats(&self) {}
    fn http_request_count(&self) -> u64 {
        0
    }
    fn http_request_bytes_read(&self) -> u64 {
        0
    }
}
