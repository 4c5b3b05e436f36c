use linegraph_rs::api::GraphLayoutEngine;
use linegraph_rs::core::{AxisRange, Margins, Rect};

fn engine() -> GraphLayoutEngine {
    GraphLayoutEngine::new(
        Rect::new(0.0, 0.0, 200.0, 150.0),
        Margins::default(),
        AxisRange::new(0.0, 2.0),
        AxisRange::new(10.0, 30.0),
    )
    .expect("valid layout engine")
}

#[test]
fn vertical_lines_map_x_positions_through_the_same_transform() {
    let engine = engine();

    let (vertical, _) = engine
        .map_reference_lines(&[0.0, 1.0, 2.0], &[])
        .expect("mapping");

    assert_eq!(vertical.len(), 3);
    assert_eq!(vertical[0].x_value, 0.0);
    assert_eq!(vertical[0].x_px, 35.0);
    assert_eq!(vertical[1].x_px, 117.5);
    assert_eq!(vertical[2].x_px, 200.0);
}

#[test]
fn horizontal_lines_follow_the_inverted_y_axis() {
    let engine = engine();

    let (_, horizontal) = engine
        .map_reference_lines(&[], &[10.0, 20.0, 30.0])
        .expect("mapping");

    assert_eq!(horizontal.len(), 3);
    assert_eq!(horizontal[0].y_value, 10.0);
    assert_eq!(horizontal[0].y_px, 115.0);
    assert_eq!(horizontal[1].y_px, 57.5);
    assert_eq!(horizontal[2].y_px, 0.0);
}

#[test]
fn increasing_values_give_monotonic_pixel_positions() {
    let engine = engine();

    let (vertical, horizontal) = engine
        .map_reference_lines(&[0.2, 0.9, 1.4, 1.9], &[12.0, 19.0, 26.0])
        .expect("mapping");

    for pair in vertical.windows(2) {
        assert!(pair[0].x_px < pair[1].x_px);
    }
    // Screen Y decreases as graph Y increases.
    for pair in horizontal.windows(2) {
        assert!(pair[0].y_px > pair[1].y_px);
    }
}

#[test]
fn out_of_domain_positions_extrapolate() {
    let engine = engine();

    let (vertical, horizontal) = engine
        .map_reference_lines(&[-1.0, 3.0], &[50.0])
        .expect("mapping");

    assert!(vertical[0].x_px < 35.0);
    assert!(vertical[1].x_px > 200.0);
    assert!(horizontal[0].y_px < 0.0);
}

#[test]
fn empty_inputs_produce_empty_outputs() {
    let engine = engine();

    let (vertical, horizontal) = engine.map_reference_lines(&[], &[]).expect("mapping");

    assert!(vertical.is_empty());
    assert!(horizontal.is_empty());
}

#[test]
fn non_finite_position_fails_the_whole_pass() {
    let engine = engine();

    assert!(engine.map_reference_lines(&[f64::NAN], &[]).is_err());
    assert!(engine.map_reference_lines(&[], &[f64::INFINITY]).is_err());
}
