pub mod bits;
pub use bits::ByteCursor;

pub mod bif;
pub use bif::{
    decode_bif, frame_at, parse_bif, parse_bif_header, BifData, BifHeader, BifIndexEntry,
    ImageCrateDecoder, ImageDecoder,
};

pub mod streams;
pub use streams::{
    fetch_url, HttpTrickplaySource, LocalTrickplaySource, TrickplayManifest, TrickplaySource,
};

pub mod tiles;
pub use tiles::{load_tile_trickplay, Trickplay, TrickplayInfo};

pub mod config;
pub use config::TrickplayConfig;

pub mod errors;
pub use errors::{
    BifError, ConfigError, HeaderFault, StreamError, TrickplayError, TrickplayResult,
};

use log::debug;

async fn read_source(source: &str, config: &TrickplayConfig) -> TrickplayResult<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source, config).await
    } else {
        Ok(std::fs::read(source)?)
    }
}

/// Load and decode a BIF file from a local path or an `http(s)://` URL.
///
/// `None` means trickplay is unavailable for this session; the reason is logged.
pub async fn load_bif(source: String, width: u32) -> Option<BifData> {
    let bytes = match read_source(&source, &TrickplayConfig::default()).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Failed to read BIF from {}: {}", source, e);
            return None;
        }
    };
    decode_bif(&bytes, width)
}

/// Resolve the width through the item's manifest, then fetch and decode its BIF.
pub async fn load_item_bif<S: TrickplaySource + ?Sized>(
    source: &S,
    item_id: &str,
    config: &TrickplayConfig,
) -> Option<BifData> {
    if !config.enabled {
        return None;
    }

    let manifest = match source.fetch_manifest(item_id).await {
        Ok(manifest) => manifest,
        Err(e) => {
            debug!("No trickplay manifest for {}: {}", item_id, e);
            return None;
        }
    };
    let Some(width) = manifest.select_width(config.preferred_width) else {
        debug!("Trickplay manifest for {} lists no widths", item_id);
        return None;
    };

    match source.fetch_bif(item_id, width).await {
        Ok(bytes) => decode_bif(&bytes, width),
        Err(e) => {
            debug!("Failed to fetch BIF for {} at width {}: {}", item_id, width, e);
            None
        }
    }
}
