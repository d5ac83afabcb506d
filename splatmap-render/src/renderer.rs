use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use splatmap_core::{BlockRect, RouteSession, VisitedMap};

use crate::buffer::RgbBuffer;
use crate::style::{OverlayStyle, UNVISITED, VISITED};

// ---------------------------------------------------------------------------
// Base layer
// ---------------------------------------------------------------------------

/// Grey map of the plan: visited cells dark, everything else light.
pub fn render_base(visited: &VisitedMap) -> RgbBuffer {
    let canvas = visited.canvas();
    let mut buffer = RgbBuffer::filled(canvas.width, canvas.height, [UNVISITED; 3]);
    let stride = buffer.stride();

    buffer
        .pixels
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(row, out)| {
            let Some(flags) = visited.row(row as u32) else {
                return;
            };
            for (px, &hit) in out.chunks_exact_mut(3).zip(flags) {
                if hit {
                    px.fill(VISITED);
                }
            }
        });
    buffer
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// Stain every pixel of `rect`, then draw its outline on top.
fn highlight_block(buffer: &mut RgbBuffer, rect: &BlockRect, style: &OverlayStyle) {
    buffer.map_rect(rect, |c| style.stain_rgb(c));
    buffer.outline_rect(rect, style.border);
}

/// Render the visited map with every selected block highlighted.
///
/// Always starts from a fresh base layer, so repeated calls give identical
/// images. Selected blocks never overlap, so their order does not matter.
pub fn render(session: &RouteSession, style: &OverlayStyle) -> crate::Result<RgbBuffer> {
    let start = Instant::now();
    let mut buffer = render_base(session.visited());

    for &index in session.members() {
        let rect = session.grid().bounding_box_of(index)?;
        highlight_block(&mut buffer, &rect, style);
    }

    debug!(
        "Rendered {}×{} with {} selected blocks in {:.2?}",
        buffer.width,
        buffer.height,
        session.members().len(),
        start.elapsed()
    );
    Ok(buffer)
}

/// Render the visited map with only block `index` highlighted, ignoring the
/// current selection.
pub fn render_block_preview(
    session: &RouteSession,
    index: usize,
    style: &OverlayStyle,
) -> crate::Result<RgbBuffer> {
    let rect = session.grid().bounding_box_of(index)?;
    let mut buffer = render_base(session.visited());
    highlight_block(&mut buffer, &rect, style);
    Ok(buffer)
}
