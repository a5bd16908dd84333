use std::path::PathBuf;

use panview_core::{SourceImage, ViewerConfig};

/// Results sent from dialog/loader threads back to the UI thread.
pub enum AppMessage {
    /// An image file was decoded.
    ImageLoaded { path: PathBuf, image: SourceImage },

    /// A TOML viewer config was read from disk.
    ConfigImported { path: PathBuf, config: ViewerConfig },

    Error { message: String },
}
