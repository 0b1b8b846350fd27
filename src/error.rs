use std::path::PathBuf;

/// Failures that stop a run before any output is touched.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Logo file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The decoder's own message is kept as the error source.
    #[error("Error loading image {}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}
