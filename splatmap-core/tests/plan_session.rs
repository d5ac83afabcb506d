use splatmap_core::{
    format_coordinate, BlockGrid, Canvas, CoreError, RoutePlan, RouteSession, Schedule,
};

/// A small route file in the planner's JSON layout.
fn sample_plan_json() -> String {
    let route_a: Vec<String> = (0..10).map(|c| format_coordinate(0, c)).collect();
    let route_b: Vec<String> = (0..5).map(|r| format_coordinate(60 + r, 200)).collect();
    serde_json::json!({
        "divide_schedule": { "horizontal_divider": 2, "vertical_divider": 4 },
        "blocks": {
            "0": { "visit_route": route_a, "key_sequence": "" },
            "6": { "visit_route": route_b }
        }
    })
    .to_string()
}

#[test]
fn loads_plan_and_marks_routes() {
    let plan: RoutePlan = serde_json::from_str(&sample_plan_json()).unwrap();
    let session = RouteSession::from_plan(&plan).unwrap();

    assert_eq!(session.grid().block_count(), 8);
    assert_eq!(session.visited().visited_count(), 15);
    assert!(session.is_visited(0, 9));
    assert!(session.is_visited(64, 200));
    assert!(!session.is_visited(65, 200));
    assert!(session.members().is_empty());
}

#[test]
fn block_names_do_not_drive_selection() {
    let plan: RoutePlan = serde_json::from_str(&sample_plan_json()).unwrap();
    let mut session = RouteSession::from_plan(&plan).unwrap();

    // Pixel (60, 200) lies in grid block 1 * 4 + 2 = 6 regardless of route names.
    assert_eq!(session.select_by_pixel(60, 200).unwrap(), 6);
    assert_eq!(session.select_by_pixel(0, 0).unwrap(), 0);
    assert_eq!(session.selection().sorted(), vec![0, 6]);
}

#[test]
fn partition_is_bijective_for_many_schedules() {
    let canvas = Canvas::POST;
    for rows in [1, 2, 3, 7, 11, 60, 120] {
        for cols in [1, 3, 9, 17, 100, 320] {
            let grid = BlockGrid::new(canvas, Schedule::new(rows, cols, canvas).unwrap()).unwrap();
            let mut area = 0usize;
            for (idx, rect) in grid.blocks() {
                area += rect.pixel_count();
                // Corners are enough to pin the rectangle to its index.
                for (r, c) in [
                    (rect.top, rect.left),
                    (rect.bottom - 1, rect.right - 1),
                    (rect.top, rect.right - 1),
                    (rect.bottom - 1, rect.left),
                ] {
                    assert_eq!(grid.block_index_of(r as i64, c as i64).unwrap(), idx);
                }
            }
            assert_eq!(area, canvas.pixel_count(), "{rows}×{cols} must tile the canvas");
        }
    }
}

#[test]
fn smaller_canvas_is_supported() {
    let canvas = Canvas::new(10, 12).unwrap();
    let plan: RoutePlan = serde_json::from_str(
        r#"{ "divide_schedule": { "horizontal_divider": 3, "vertical_divider": 5 },
             "blocks": { "x": { "visit_route": ["9,11"] } } }"#,
    )
    .unwrap();
    let mut session = RouteSession::with_canvas(&plan, canvas).unwrap();
    assert!(session.is_visited(9, 11));
    assert_eq!(session.select_by_pixel(9, 11).unwrap(), 14);
    assert!(matches!(
        session.select_by_pixel(10, 0),
        Err(CoreError::OutOfBounds { height: 10, width: 12, .. })
    ));
}
