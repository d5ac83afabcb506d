use std::collections::HashSet;

use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::error::CoreError;
use crate::grid::{BlockGrid, BlockRect};
use crate::plan::RoutePlan;
use crate::selection::Selection;
use crate::visited::VisitedMap;

/// A loaded route plan plus the caller's current block selection.
///
/// The grid and visited map are fixed once loaded; only the selection
/// changes, and only through the methods below.
#[derive(Debug, Clone)]
pub struct RouteSession {
    grid: BlockGrid,
    visited: VisitedMap,
    selection: Selection,
}

impl RouteSession {
    /// Build a session for a plan on the standard post canvas.
    pub fn from_plan(plan: &RoutePlan) -> crate::Result<Self> {
        Self::with_canvas(plan, Canvas::POST)
    }

    pub fn with_canvas(plan: &RoutePlan, canvas: Canvas) -> crate::Result<Self> {
        let grid = BlockGrid::new(canvas, plan.schedule(canvas)?)?;
        let visited = VisitedMap::from_plan(plan, canvas)?;
        info!(
            "Loaded route plan: {} named blocks, {} points, {} grid blocks",
            plan.block_count(),
            plan.total_points(),
            grid.block_count()
        );
        Self::from_parts(grid, visited)
    }

    /// Assemble a session from an existing grid and visited map.
    ///
    /// Both must cover the same canvas.
    pub fn from_parts(grid: BlockGrid, visited: VisitedMap) -> crate::Result<Self> {
        if grid.canvas() != visited.canvas() {
            return Err(CoreError::CanvasMismatch {
                grid: grid.canvas(),
                visited: visited.canvas(),
            });
        }
        Ok(Self {
            selection: Selection::new(grid.block_count()),
            grid,
            visited,
        })
    }

    /// Select the block under `(row, col)`, returning its index.
    pub fn select_by_pixel(&mut self, row: i64, col: i64) -> crate::Result<usize> {
        let index = self.grid.block_index_of(row, col)?;
        self.selection.select(index)?;
        debug!("Selected block {index} at ({row}, {col})");
        Ok(index)
    }

    /// Deselect the block under `(row, col)`, returning its index.
    pub fn deselect_by_pixel(&mut self, row: i64, col: i64) -> crate::Result<usize> {
        let index = self.grid.block_index_of(row, col)?;
        self.selection.deselect(index);
        debug!("Deselected block {index} at ({row}, {col})");
        Ok(index)
    }

    /// Flip the block under `(row, col)`. Returns its index and new state.
    pub fn toggle_by_pixel(&mut self, row: i64, col: i64) -> crate::Result<(usize, bool)> {
        let index = self.grid.block_index_of(row, col)?;
        let selected = self.selection.toggle(index)?;
        Ok((index, selected))
    }

    pub fn select_all(&mut self) {
        self.selection.select_all();
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn members(&self) -> &HashSet<usize> {
        self.selection.members()
    }

    pub fn is_visited(&self, row: i64, col: i64) -> bool {
        self.visited.is_visited(row, col)
    }

    /// Rectangles of every selected block, ascending by index.
    pub fn selected_rects(&self) -> crate::Result<Vec<(usize, BlockRect)>> {
        self.selection
            .sorted()
            .into_iter()
            .map(|i| Ok((i, self.grid.bounding_box_of(i)?)))
            .collect()
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn visited(&self) -> &VisitedMap {
        &self.visited
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
