mod decoder;
mod lookup;
mod parser;
mod types;

pub use decoder::{ImageCrateDecoder, ImageDecoder};
pub use lookup::frame_at;
pub use parser::{decode_bif, parse_bif, parse_bif_header};
pub use types::{
    BifData, BifHeader, BifIndexEntry, BIF_MAGIC_NUMBERS, DEFAULT_TIMESTAMP_MULTIPLIER,
    INDEX_ENTRY_SIZE, INDEX_OFFSET, RESERVED_HEADER_BYTES, SUPPORTED_BIF_VERSION,
};

#[cfg(test)]
pub(crate) mod test_helpers;
