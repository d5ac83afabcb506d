use thiserror::Error;

use crate::canvas::Canvas;

/// Errors originating from the partitioning and selection engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("pixel ({row}, {col}) is outside the {height}×{width} canvas")]
    OutOfBounds {
        row: i64,
        col: i64,
        height: u32,
        width: u32,
    },

    #[error("invalid block index {index} (schedule has {count} blocks)")]
    InvalidIndex { index: usize, count: usize },

    #[error("malformed coordinate {token:?}: {reason}")]
    Parse { token: String, reason: String },

    #[error("invalid divide schedule: {reason}")]
    InvalidSchedule { reason: String },

    #[error("invalid canvas dimensions: {height}×{width} (must be > 0)")]
    InvalidCanvas { height: u32, width: u32 },

    #[error("canvas mismatch: grid is {grid:?}, visited map is {visited:?}")]
    CanvasMismatch { grid: Canvas, visited: Canvas },
}
