//! PNG export with embedded metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use splatmap_core::RouteSession;

use crate::buffer::RgbBuffer;
use crate::error::RenderError;

/// Metadata to embed in an exported PNG as tEXt chunks.
#[derive(Debug, Clone, Default)]
pub struct ExportMetadata {
    pub row_divider: u32,
    pub col_divider: u32,
    /// Selected block indices, ascending.
    pub selected: Vec<usize>,
    pub visited_cells: usize,
}

impl ExportMetadata {
    /// Describe the session's schedule and current selection.
    pub fn from_session(session: &RouteSession) -> Self {
        let schedule = session.grid().schedule();
        Self {
            row_divider: schedule.row_divider,
            col_divider: schedule.col_divider,
            selected: session.selection().sorted(),
            visited_cells: session.visited().visited_count(),
        }
    }
}

/// Write an RGB buffer as an 8-bit PNG, optionally with selection metadata.
///
/// Uses the `png` crate directly to inject custom tEXt chunks readable by
/// exiftool and most image viewers.
pub fn export_png(
    buffer: &RgbBuffer,
    path: &Path,
    metadata: Option<&ExportMetadata>,
) -> crate::Result<()> {
    if buffer.width == 0
        || buffer.height == 0
        || buffer.pixels.len() != buffer.width as usize * buffer.height as usize * 3
    {
        return Err(RenderError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "splatmap".to_string())?;
    if let Some(meta) = metadata {
        encoder.add_text_chunk("Description".to_string(), build_description(meta))?;
        for (key, value) in build_metadata_pairs(meta, buffer) {
            encoder.add_text_chunk(key, value)?;
        }
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.pixels)?;
    png_writer.finish()?;

    debug!(
        "Exported PNG {}x{} to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}

fn build_description(meta: &ExportMetadata) -> String {
    format!(
        "Route plan, {}x{} blocks, {} selected, {} visited cells",
        meta.row_divider,
        meta.col_divider,
        meta.selected.len(),
        meta.visited_cells,
    )
}

fn build_metadata_pairs(meta: &ExportMetadata, buffer: &RgbBuffer) -> Vec<(String, String)> {
    let selected = meta
        .selected
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",");
    vec![
        ("Splatmap.RowDivider".into(), meta.row_divider.to_string()),
        ("Splatmap.ColDivider".into(), meta.col_divider.to_string()),
        ("Splatmap.Selected".into(), selected),
        ("Splatmap.VisitedCells".into(), meta.visited_cells.to_string()),
        (
            "Splatmap.Resolution".into(),
            format!("{}x{}", buffer.width, buffer.height),
        ),
    ]
}
