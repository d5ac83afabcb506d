use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse route file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Core(#[from] splatmap_core::CoreError),

    #[error(transparent)]
    Render(#[from] splatmap_render::RenderError),
}

pub type Result<T> = std::result::Result<T, AppError>;
