use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Fixed pixel grid a route plan is drawn on.
///
/// Coordinates are `(row, col)` with `(0, 0)` at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// Number of pixel rows.
    pub height: u32,
    /// Number of pixel columns.
    pub width: u32,
}

impl Canvas {
    /// The 120×320 post canvas every route plan targets.
    pub const POST: Canvas = Canvas {
        height: 120,
        width: 320,
    };

    pub fn new(height: u32, width: u32) -> crate::Result<Self> {
        if height == 0 || width == 0 {
            return Err(CoreError::InvalidCanvas { height, width });
        }
        Ok(Self { height, width })
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Whether `(row, col)` lies on the canvas.
    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        (0..self.height as i64).contains(&row) && (0..self.width as i64).contains(&col)
    }

    /// Row-major offset of an in-bounds pixel, or `OutOfBounds`.
    pub fn offset(&self, row: i64, col: i64) -> crate::Result<usize> {
        if !self.contains(row, col) {
            return Err(CoreError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row as usize * self.width as usize + col as usize)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::POST
    }
}

/// How many bands the canvas is cut into along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of horizontal bands (block rows).
    pub row_divider: u32,
    /// Number of vertical bands (block columns).
    pub col_divider: u32,
}

impl Schedule {
    /// Validate a schedule against the canvas it will partition.
    ///
    /// Each divider must be at least 1 and no larger than the matching
    /// canvas dimension, so that every block spans at least one pixel.
    pub fn new(row_divider: u32, col_divider: u32, canvas: Canvas) -> crate::Result<Self> {
        if row_divider == 0 || col_divider == 0 {
            return Err(CoreError::InvalidSchedule {
                reason: format!("dividers must be >= 1, got {row_divider}×{col_divider}"),
            });
        }
        if row_divider > canvas.height {
            return Err(CoreError::InvalidSchedule {
                reason: format!(
                    "row divider {row_divider} exceeds canvas height {}",
                    canvas.height
                ),
            });
        }
        if col_divider > canvas.width {
            return Err(CoreError::InvalidSchedule {
                reason: format!(
                    "column divider {col_divider} exceeds canvas width {}",
                    canvas.width
                ),
            });
        }
        Ok(Self {
            row_divider,
            col_divider,
        })
    }

    /// Number of blocks the schedule produces.
    pub fn block_count(&self) -> usize {
        self.row_divider as usize * self.col_divider as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_canvas_dimensions() {
        assert_eq!(Canvas::POST.height, 120);
        assert_eq!(Canvas::POST.width, 320);
        assert_eq!(Canvas::POST.pixel_count(), 38_400);
        assert_eq!(Canvas::default(), Canvas::POST);
    }

    #[test]
    fn canvas_rejects_zero_dimensions() {
        assert!(Canvas::new(0, 10).is_err());
        assert!(Canvas::new(10, 0).is_err());
        assert!(Canvas::new(1, 1).is_ok());
    }

    #[test]
    fn offset_checks_bounds() {
        let canvas = Canvas::POST;
        assert_eq!(canvas.offset(0, 0), Ok(0));
        assert_eq!(canvas.offset(1, 2), Ok(322));
        assert_eq!(canvas.offset(119, 319), Ok(38_399));
        assert!(matches!(
            canvas.offset(-1, 0),
            Err(CoreError::OutOfBounds { row: -1, .. })
        ));
        assert!(canvas.offset(120, 0).is_err());
        assert!(canvas.offset(0, 320).is_err());
    }

    #[test]
    fn schedule_validation() {
        let canvas = Canvas::POST;
        assert!(Schedule::new(0, 1, canvas).is_err());
        assert!(Schedule::new(1, 0, canvas).is_err());
        assert!(Schedule::new(121, 1, canvas).is_err());
        assert!(Schedule::new(1, 321, canvas).is_err());
        let s = Schedule::new(120, 320, canvas).unwrap();
        assert_eq!(s.block_count(), 38_400);
    }
}
