pub mod http_source;
pub mod local_source;
pub mod trickplay_source;

pub use http_source::{fetch_url, HttpTrickplaySource};
pub use local_source::LocalTrickplaySource;
pub use trickplay_source::{TrickplayManifest, TrickplaySource};
