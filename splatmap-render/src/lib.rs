pub mod buffer;
pub mod error;
pub mod export;
pub mod renderer;
pub mod style;

pub use buffer::{Rgb, RgbBuffer};
pub use error::RenderError;
pub use export::{export_png, ExportMetadata};
pub use renderer::{render, render_base, render_block_preview};
pub use style::OverlayStyle;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
