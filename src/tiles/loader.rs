use super::splitter::build_trickplay;
use super::types::{Trickplay, TrickplayInfo};
use crate::bif::{ImageCrateDecoder, ImageDecoder};
use crate::streams::TrickplaySource;
use log::{info, warn};

/// Fetch, decode and split every tile sheet of `item_id`.
///
/// A sheet that cannot be fetched or decoded is skipped; `None` when nothing
/// usable came back.
pub async fn load_tile_trickplay<S: TrickplaySource + ?Sized>(
    source: &S,
    item_id: &str,
    trickplay_info: &TrickplayInfo,
) -> Option<Trickplay> {
    info!(
        "Trickplay resolution: {} ({} sheets)",
        trickplay_info.width,
        trickplay_info.sheet_count()
    );

    let mut sheets = Vec::new();
    for index in 0..trickplay_info.sheet_count() {
        let bytes = match source
            .fetch_tile_sheet(item_id, trickplay_info.width, index)
            .await
        {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to fetch trickplay sheet {}: {}", index, e);
                continue;
            }
        };
        match ImageCrateDecoder.decode(&bytes) {
            Ok(sheet) => sheets.push(sheet.to_rgba8()),
            Err(e) => warn!("Failed to decode trickplay sheet {}: {}", index, e),
        }
    }

    let trickplay = build_trickplay(&sheets, trickplay_info);
    if trickplay.images.is_empty() {
        return None;
    }
    Some(trickplay)
}
