//! Viewport engine tests against the reference geometry: 150x110 canvas,
//! 10px cells, center cell (10, 10).

use tui_life::grid::{RecordingAdapter, RenderCommand, ViewportEngine};
use tui_life::types::{GridError, PanDirection};

fn reference() -> ViewportEngine<RecordingAdapter> {
    ViewportEngine::initialize(RecordingAdapter::new(), 150, 110, 10.0).unwrap()
}

#[test]
fn test_initialize_draws_clear_and_gridlines() {
    let vp = reference();
    let adapter = vp.adapter();

    assert_eq!(adapter.commands()[0], RenderCommand::ClearAll);
    // 11 horizontal + 15 vertical gridlines.
    assert_eq!(adapter.count_lines(), 26);
    assert_eq!(adapter.count_fills(), 0);
}

#[test]
fn test_initialize_computes_reference_window() {
    let vp = reference();
    let g = vp.grid();

    assert_eq!(
        (g.top_row, g.bottom_row, g.left_col, g.right_col),
        (5, 16, 3, 18)
    );
    assert_eq!(g.row_count(), 12);
    assert_eq!(g.col_count(), 16);
    for edge in [
        g.top_row_height_px,
        g.bottom_row_height_px,
        g.left_col_width_px,
        g.right_col_width_px,
    ] {
        assert_eq!(edge, 5.0);
    }
}

#[test]
fn test_edge_sums_reconstruct_dimensions() {
    for &(w, h, cell) in &[
        (150u32, 110u32, 10.0f64),
        (800, 600, 35.0),
        (101, 77, 7.0),
        (64, 64, 16.0),
        (333, 217, 12.5),
    ] {
        let vp = ViewportEngine::initialize(RecordingAdapter::new(), w, h, cell).unwrap();
        let g = vp.grid();

        for edge in [
            g.top_row_height_px,
            g.bottom_row_height_px,
            g.left_col_width_px,
            g.right_col_width_px,
        ] {
            assert!(edge > 0.0 && edge <= cell, "edge {edge} not in (0, {cell}]");
        }

        let rows_between = (g.row_count() - 2) as f64;
        let height_sum = g.top_row_height_px + rows_between * cell + g.bottom_row_height_px;
        assert!((height_sum - f64::from(h)).abs() < 1e-9);

        let cols_between = (g.col_count() - 2) as f64;
        let width_sum = g.left_col_width_px + cols_between * cell + g.right_col_width_px;
        assert!((width_sum - f64::from(w)).abs() < 1e-9);
    }
}

#[test]
fn test_cell_to_pixel_rect_absent_outside_window() {
    let vp = reference();
    assert!(vp.cell_to_pixel_rect(4, 0).is_none());
    assert!(vp.cell_to_pixel_rect(4, 10).is_none());
    assert!(vp.cell_to_pixel_rect(17, 10).is_none());
    assert!(vp.cell_to_pixel_rect(10, 2).is_none());
    assert!(vp.cell_to_pixel_rect(10, 19).is_none());
    assert!(vp.cell_to_pixel_rect(10, 10).is_some());
    assert!(vp.cell_to_pixel_rect(5, 3).is_some());
    assert!(vp.cell_to_pixel_rect(16, 18).is_some());
}

#[test]
fn test_adjacent_rects_are_contiguous() {
    let vp = reference();
    let g = vp.grid();

    for row in g.top_row..g.bottom_row {
        let here = vp.cell_to_pixel_rect(row, 10).unwrap();
        let below = vp.cell_to_pixel_rect(row + 1, 10).unwrap();
        assert!(
            (here.y + here.height - below.y).abs() < 1e-9,
            "gap/overlap between rows {row} and {}",
            row + 1
        );
    }
    for col in g.left_col..g.right_col {
        let here = vp.cell_to_pixel_rect(10, col).unwrap();
        let right = vp.cell_to_pixel_rect(10, col + 1).unwrap();
        assert!((here.x + here.width - right.x).abs() < 1e-9);
    }

    // First and last rects sit flush against the canvas borders.
    let first = vp.cell_to_pixel_rect(g.top_row, g.left_col).unwrap();
    assert_eq!((first.x, first.y), (0.0, 0.0));
    let last = vp.cell_to_pixel_rect(g.bottom_row, g.right_col).unwrap();
    assert!((last.x + last.width - 150.0).abs() < 1e-9);
    assert!((last.y + last.height - 110.0).abs() < 1e-9);
}

#[test]
fn test_fill_cell_applies_margin() {
    // Expectations straight from the reference scenario: rect plus a 1px
    // inset on x/y, minus 1px on width/height.
    let cases = [
        (10i64, 10i64, 66.0, 46.0, 9.0, 9.0), // interior
        (5, 10, 66.0, 1.0, 9.0, 4.0),         // partial top row
        (6, 3, 1.0, 6.0, 4.0, 9.0),           // partial left column
        (16, 4, 6.0, 106.0, 9.0, 4.0),        // partial bottom row
        (15, 18, 146.0, 96.0, 4.0, 9.0),      // partial right column
    ];

    for (row, col, x, y, width, height) in cases {
        let mut vp = reference();
        vp.adapter_mut().clear_log();

        assert!(vp.fill_cell(row, col));
        assert_eq!(
            vp.adapter().commands(),
            &[RenderCommand::FillRect {
                x,
                y,
                width,
                height
            }],
            "wrong fill for cell ({row}, {col})"
        );
    }
}

#[test]
fn test_clear_cell_applies_margin() {
    let mut vp = reference();
    vp.adapter_mut().clear_log();

    assert!(vp.clear_cell(10, 10));
    assert_eq!(
        vp.adapter().commands(),
        &[RenderCommand::ClearRect {
            x: 66.0,
            y: 46.0,
            width: 9.0,
            height: 9.0
        }]
    );
}

#[test]
fn test_fill_and_clear_outside_window_are_noops() {
    let mut vp = reference();
    vp.adapter_mut().clear_log();

    assert!(!vp.fill_cell(4, 0));
    assert!(!vp.clear_cell(4, 0));
    assert!(vp.adapter().commands().is_empty());
}

#[test]
fn test_pan_up_shifts_center_and_redraws() {
    let mut vp = reference();
    vp.adapter_mut().clear_log();

    vp.pan(PanDirection::Up, 15.0);
    let g = vp.grid();

    assert_eq!(g.center_row, 9);
    assert_eq!(g.vertical_center_px, 60.0);
    assert_eq!((g.top_row, g.bottom_row), (4, 14));
    assert_eq!(g.center_col, 10); // column axis untouched

    // 10 horizontal + 15 vertical gridlines after the shift.
    assert_eq!(vp.adapter().count_lines(), 25);
    assert_eq!(vp.adapter().count_fills(), 0);
}

#[test]
fn test_pan_down_shifts_center() {
    let mut vp = reference();
    vp.pan(PanDirection::Down, 10.0);
    let g = vp.grid();

    assert_eq!(g.center_row, 11);
    assert_eq!(g.vertical_center_px, 55.0);
    assert_eq!((g.top_row, g.bottom_row), (6, 17));
    assert_eq!(g.center_col, 10);
}

#[test]
fn test_pan_left_rebalances_repeatedly() {
    let mut vp = reference();
    vp.pan(PanDirection::Left, 20.0);
    let g = vp.grid();

    assert_eq!(g.center_col, 8);
    assert_eq!(g.horizontal_center_px, 75.0);
    assert_eq!((g.left_col, g.right_col), (1, 16));
    assert_eq!(g.center_row, 10);
}

#[test]
fn test_pan_right_below_cell_size_keeps_center_cell() {
    let mut vp = reference();
    vp.pan(PanDirection::Right, 2.0);
    let g = vp.grid();

    assert_eq!(g.center_col, 10);
    assert_eq!(g.horizontal_center_px, 73.0);
    assert_eq!((g.left_col, g.right_col), (3, 18));
}

#[test]
fn test_pan_by_cell_multiple_shifts_exactly_k() {
    let mut vp = reference();
    vp.pan(PanDirection::Down, 30.0);
    let g = vp.grid();

    assert_eq!(g.center_row, 13);
    // Fractional offset unchanged.
    assert_eq!(g.vertical_center_px, 55.0);
}

#[test]
fn test_set_cell_size_rezooms_window() {
    let mut vp = reference();
    vp.adapter_mut().clear_log();

    vp.set_cell_size(20.0).unwrap();
    let g = vp.grid();

    assert_eq!(g.cell_size, 20.0);
    assert_eq!((g.center_row, g.center_col), (10, 10));
    assert_eq!(
        (g.top_row, g.bottom_row, g.left_col, g.right_col),
        (8, 13, 7, 14)
    );
    for edge in [
        g.top_row_height_px,
        g.bottom_row_height_px,
        g.left_col_width_px,
        g.right_col_width_px,
    ] {
        assert_eq!(edge, 15.0);
    }
    // 5 horizontal + 7 vertical gridlines.
    assert_eq!(vp.adapter().count_lines(), 12);
}

#[test]
fn test_set_cell_size_below_minimum_leaves_state_unchanged() {
    let mut vp = reference();
    let before = vp.grid().clone();
    vp.adapter_mut().clear_log();

    let err = vp.set_cell_size(1.0).unwrap_err();
    assert!(matches!(err, GridError::InvalidConfiguration { .. }));
    assert_eq!(*vp.grid(), before);
    assert!(vp.adapter().commands().is_empty());
}

#[test]
fn test_reset_grid_redraws_without_lives() {
    let mut vp = reference();
    vp.fill_cell(10, 10);
    vp.adapter_mut().clear_log();

    vp.reset_grid();

    assert_eq!(vp.adapter().commands()[0], RenderCommand::ClearAll);
    assert_eq!(vp.adapter().count_lines(), 26);
    assert_eq!(vp.adapter().count_fills(), 0);
}

#[test]
fn test_resize_recenters_offsets() {
    let mut vp = reference();
    vp.resize(200, 100).unwrap();
    let g = vp.grid();

    assert_eq!((g.pixel_width, g.pixel_height), (200, 100));
    assert_eq!(g.horizontal_center_px, 100.0);
    assert_eq!(g.vertical_center_px, 50.0);
    assert_eq!((g.center_row, g.center_col), (10, 10));
    assert_eq!(vp.adapter().surface(), Some((200, 100)));

    let rows_between = (g.row_count() - 2) as f64;
    let sum = g.top_row_height_px + rows_between * g.cell_size + g.bottom_row_height_px;
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_surface_unavailable_is_fatal_at_initialize() {
    let err =
        ViewportEngine::initialize(RecordingAdapter::unavailable(), 150, 110, 10.0).unwrap_err();
    assert!(matches!(err, GridError::SurfaceUnavailable { .. }));
}
