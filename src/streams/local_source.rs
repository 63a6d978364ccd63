use super::trickplay_source::{TrickplayManifest, TrickplaySource};
use crate::errors::{StreamError, TrickplayResult};
use async_trait::async_trait;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Offline trickplay storage
///
/// Layout under `directory`:
/// - `<item_id>.bif` for a downloaded BIF file,
/// - `<item_id>/<index>` for downloaded tile sheets.
///
/// Offline data is stored at one width only, the one recorded at construction.
#[derive(Debug, Clone)]
pub struct LocalTrickplaySource {
    directory: PathBuf,
    width: u32,
}

impl LocalTrickplaySource {
    pub fn new<P: AsRef<Path>>(directory: P, width: u32) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            width,
        }
    }

    pub fn bif_path(&self, item_id: &str) -> PathBuf {
        self.directory.join(format!("{}.bif", item_id))
    }

    pub fn tile_sheet_path(&self, item_id: &str, index: u32) -> PathBuf {
        self.directory.join(item_id).join(index.to_string())
    }

    /// Save downloaded BIF bytes for offline playback.
    pub fn store_bif(&self, item_id: &str, bytes: &[u8]) -> TrickplayResult<()> {
        fs::create_dir_all(&self.directory)?;
        fs::write(self.bif_path(item_id), bytes)?;
        Ok(())
    }

    /// Save downloaded tile sheets for offline playback, numbered from 0.
    pub fn store_tile_sheets(&self, item_id: &str, sheets: &[Vec<u8>]) -> TrickplayResult<()> {
        fs::create_dir_all(self.directory.join(item_id))?;
        for (i, sheet) in sheets.iter().enumerate() {
            fs::write(self.tile_sheet_path(item_id, i as u32), sheet)?;
        }
        Ok(())
    }

    /// Remove everything stored for `item_id`. Missing files are not an error.
    pub fn remove(&self, item_id: &str) -> TrickplayResult<()> {
        let bif = self.bif_path(item_id);
        if bif.exists() {
            fs::remove_file(bif)?;
        }
        let tiles = self.directory.join(item_id);
        if tiles.exists() {
            fs::remove_dir_all(tiles)?;
        }
        Ok(())
    }

    fn check_width(&self, width: u32) -> TrickplayResult<()> {
        if width != self.width {
            return Err(StreamError::new(format!(
                "Offline trickplay stored at width {}, requested {}",
                self.width, width
            ))
            .into());
        }
        Ok(())
    }
}

fn read_file(path: &Path) -> TrickplayResult<Vec<u8>> {
    debug!("Reading offline trickplay data from {}", path.display());
    fs::read(path).map_err(|e| {
        StreamError::new(format!("Failed to read {}: {}", path.display(), e)).into()
    })
}

#[async_trait]
impl TrickplaySource for LocalTrickplaySource {
    async fn fetch_manifest(&self, item_id: &str) -> TrickplayResult<TrickplayManifest> {
        let width_resolutions = if self.bif_path(item_id).is_file() {
            vec![self.width]
        } else {
            Vec::new()
        };
        Ok(TrickplayManifest { width_resolutions })
    }

    async fn fetch_bif(&self, item_id: &str, width: u32) -> TrickplayResult<Vec<u8>> {
        self.check_width(width)?;
        read_file(&self.bif_path(item_id))
    }

    async fn fetch_tile_sheet(
        &self,
        item_id: &str,
        width: u32,
        index: u32,
    ) -> TrickplayResult<Vec<u8>> {
        self.check_width(width)?;
        read_file(&self.tile_sheet_path(item_id, index))
    }
}
