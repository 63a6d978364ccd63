mod loader;
mod splitter;
mod types;

pub use loader::load_tile_trickplay;
pub use splitter::{build_trickplay, split_tile_sheet};
pub use types::{Trickplay, TrickplayInfo};
