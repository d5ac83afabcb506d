use thiserror::Error;

/// Errors originating from compositing and export.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid image dimensions: {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error(transparent)]
    Core(#[from] splatmap_core::CoreError),
}
