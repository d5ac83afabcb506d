use tracing::debug;

use crate::canvas::{Canvas, Schedule};
use crate::error::CoreError;

/// Half-open pixel rectangle `[top, bottom) × [left, right)` covered by one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockRect {
    pub top: u32,
    pub left: u32,
    /// One past the last row.
    pub bottom: u32,
    /// One past the last column.
    pub right: u32,
}

impl BlockRect {
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Number of pixels in this block.
    pub fn pixel_count(&self) -> usize {
        self.height() as usize * self.width() as usize
    }

    #[inline]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.top..self.bottom).contains(&row) && (self.left..self.right).contains(&col)
    }

    /// Whether `(row, col)` sits on the outermost ring of the rectangle.
    #[inline]
    pub fn is_edge(&self, row: u32, col: u32) -> bool {
        self.contains(row, col)
            && (row == self.top || row + 1 == self.bottom || col == self.left || col + 1 == self.right)
    }
}

/// Splits a canvas into `row_divider × col_divider` blocks, indexed row-major.
///
/// Block size is the floor of canvas size over divider count; the last block
/// row and the last block column absorb any remainder, so the blocks tile the
/// canvas exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    canvas: Canvas,
    schedule: Schedule,
    block_height: u32,
    block_width: u32,
}

impl BlockGrid {
    pub fn new(canvas: Canvas, schedule: Schedule) -> crate::Result<Self> {
        // Re-validate: a schedule built for a larger canvas may not fit this one.
        let schedule = Schedule::new(schedule.row_divider, schedule.col_divider, canvas)?;
        let grid = Self {
            canvas,
            schedule,
            block_height: canvas.height / schedule.row_divider,
            block_width: canvas.width / schedule.col_divider,
        };
        debug!(
            "Block grid {}×{} over {}×{} canvas, nominal block {}×{}",
            schedule.row_divider,
            schedule.col_divider,
            canvas.height,
            canvas.width,
            grid.block_height,
            grid.block_width,
        );
        Ok(grid)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn block_count(&self) -> usize {
        self.schedule.block_count()
    }

    /// Index of the block containing pixel `(row, col)`.
    pub fn block_index_of(&self, row: i64, col: i64) -> crate::Result<usize> {
        // Bounds first; the offset itself is unused.
        self.canvas.offset(row, col)?;
        let block_row = (row as u32 / self.block_height).min(self.schedule.row_divider - 1);
        let block_col = (col as u32 / self.block_width).min(self.schedule.col_divider - 1);
        Ok(block_row as usize * self.schedule.col_divider as usize + block_col as usize)
    }

    /// Pixel rectangle covered by block `index`.
    pub fn bounding_box_of(&self, index: usize) -> crate::Result<BlockRect> {
        self.check_index(index)?;
        Ok(self.rect_at(index))
    }

    /// Rectangle of an index already known to be in range.
    fn rect_at(&self, index: usize) -> BlockRect {
        let cols = self.schedule.col_divider as usize;
        let block_row = (index / cols) as u32;
        let block_col = (index % cols) as u32;

        let top = block_row * self.block_height;
        let bottom = if block_row + 1 == self.schedule.row_divider {
            self.canvas.height
        } else {
            top + self.block_height
        };
        let left = block_col * self.block_width;
        let right = if block_col + 1 == self.schedule.col_divider {
            self.canvas.width
        } else {
            left + self.block_width
        };

        BlockRect {
            top,
            left,
            bottom,
            right,
        }
    }

    /// `InvalidIndex` unless `index` names a block of this grid.
    pub fn check_index(&self, index: usize) -> crate::Result<()> {
        let count = self.block_count();
        if index >= count {
            return Err(CoreError::InvalidIndex { index, count });
        }
        Ok(())
    }

    /// Every block with its rectangle, in index order.
    pub fn blocks(&self) -> impl Iterator<Item = (usize, BlockRect)> + '_ {
        (0..self.block_count()).map(move |i| (i, self.rect_at(i)))
    }
}
