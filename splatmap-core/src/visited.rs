use tracing::debug;

use crate::canvas::Canvas;
use crate::coord::parse_coordinate;
use crate::plan::RoutePlan;

/// Per-pixel flag marking every cell some route visits.
///
/// Built once from a plan and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMap {
    canvas: Canvas,
    cells: Vec<bool>,
}

impl VisitedMap {
    /// Mark each coordinate of every route. The first malformed or
    /// off-canvas token aborts the build.
    pub fn from_plan(plan: &RoutePlan, canvas: Canvas) -> crate::Result<Self> {
        Self::from_tokens(plan.tokens(), canvas)
    }

    pub fn from_tokens<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
        canvas: Canvas,
    ) -> crate::Result<Self> {
        let mut cells = vec![false; canvas.pixel_count()];
        for token in tokens {
            let (row, col) = parse_coordinate(token)?;
            let offset = canvas.offset(row as i64, col as i64)?;
            cells[offset] = true;
        }
        let map = Self { canvas, cells };
        debug!(
            "Visited map built: {} of {} cells visited",
            map.visited_count(),
            canvas.pixel_count()
        );
        Ok(map)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Whether `(row, col)` is visited. Off-canvas pixels never are.
    pub fn is_visited(&self, row: i64, col: i64) -> bool {
        self.canvas
            .offset(row, col)
            .map(|i| self.cells[i])
            .unwrap_or(false)
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    /// One canvas row of flags, or `None` past the last row.
    pub fn row(&self, row: u32) -> Option<&[bool]> {
        if row >= self.canvas.height {
            return None;
        }
        let w = self.canvas.width as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn single_point_marks_only_that_cell() {
        let map = VisitedMap::from_tokens(["5,10"], Canvas::POST).unwrap();
        assert!(map.is_visited(5, 10));
        assert_eq!(map.visited_count(), 1);
        for r in 0..120 {
            for c in 0..320 {
                if (r, c) != (5, 10) {
                    assert!(!map.is_visited(r, c));
                }
            }
        }
    }

    #[test]
    fn duplicates_are_harmless() {
        let map = VisitedMap::from_tokens(["1,1", "1,1", "(1, 1)"], Canvas::POST).unwrap();
        assert_eq!(map.visited_count(), 1);
    }

    #[test]
    fn malformed_token_propagates() {
        let err = VisitedMap::from_tokens(["1,1", "oops"], Canvas::POST).unwrap_err();
        assert!(matches!(err, CoreError::Parse { .. }));
    }

    #[test]
    fn off_canvas_token_is_out_of_bounds() {
        let err = VisitedMap::from_tokens(["120,0"], Canvas::POST).unwrap_err();
        assert!(matches!(err, CoreError::OutOfBounds { row: 120, .. }));
    }

    #[test]
    fn off_canvas_query_is_unvisited() {
        let map = VisitedMap::from_tokens(["0,0"], Canvas::POST).unwrap();
        assert!(!map.is_visited(-1, 0));
        assert!(!map.is_visited(0, 320));
    }

    #[test]
    fn row_slice_matches_queries() {
        let map = VisitedMap::from_tokens(["3,0", "3,319"], Canvas::POST).unwrap();
        let row = map.row(3).unwrap();
        assert_eq!(row.len(), 320);
        assert!(row[0] && row[319]);
        assert!(!row[1]);
    }

    #[test]
    fn row_past_canvas_is_none() {
        let map = VisitedMap::from_tokens(std::iter::empty::<&str>(), Canvas::new(10, 10).unwrap()).unwrap();
        assert_eq!(map.row(9).map(<[bool]>::len), Some(10));
        assert!(map.row(10).is_none());
        assert!(map.row(u32::MAX).is_none());
    }
}
