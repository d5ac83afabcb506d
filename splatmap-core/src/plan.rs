use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Schedule};

/// How the route file cuts the canvas into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivideSchedule {
    /// Number of horizontal bands, i.e. block rows.
    pub horizontal_divider: u32,
    /// Number of vertical bands, i.e. block columns.
    pub vertical_divider: u32,
}

/// One named entry of a route file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanBlock {
    /// Coordinate tokens in the order they are plotted.
    #[serde(default)]
    pub visit_route: Vec<String>,
}

/// In-memory route plan as produced by the route planner.
///
/// The file is trusted: no cross-checking between block names, routes and the
/// divide schedule is done here. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub divide_schedule: DivideSchedule,
    #[serde(default)]
    pub blocks: BTreeMap<String, PlanBlock>,
}

impl RoutePlan {
    /// Validate the divide schedule against `canvas`.
    pub fn schedule(&self, canvas: Canvas) -> crate::Result<Schedule> {
        Schedule::new(
            self.divide_schedule.horizontal_divider,
            self.divide_schedule.vertical_divider,
            canvas,
        )
    }

    /// Number of named blocks in the file (unrelated to the grid block count).
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total coordinate tokens across every route.
    pub fn total_points(&self) -> usize {
        self.blocks.values().map(|b| b.visit_route.len()).sum()
    }

    /// Every coordinate token, block by block in name order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .values()
            .flat_map(|b| b.visit_route.iter().map(String::as_str))
    }
}
