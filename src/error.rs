use std::path::PathBuf;

/// Errors from the host-facing surface. The filter itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum CrtError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
    #[error("image {} has no pixels", path.display())]
    EmptyImage { path: PathBuf },
}

pub type CrtResult<T> = Result<T, CrtError>;
