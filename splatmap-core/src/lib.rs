pub mod canvas;
pub mod coord;
pub mod error;
pub mod grid;
pub mod plan;
pub mod selection;
pub mod session;
pub mod visited;

// Re-export primary types for convenience.
pub use canvas::{Canvas, Schedule};
pub use coord::{format_coordinate, parse_coordinate, parse_pixel};
pub use error::CoreError;
pub use grid::{BlockGrid, BlockRect};
pub use plan::{DivideSchedule, PlanBlock, RoutePlan};
pub use selection::Selection;
pub use session::RouteSession;
pub use visited::VisitedMap;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
