use approx::assert_relative_eq;
use linegraph_rs::api::{GraphLayoutEngine, StaticDataSource};
use linegraph_rs::core::{AxisRange, GraphPoint, Margins, Rect, ScreenPoint};
use linegraph_rs::error::GraphError;

fn default_engine() -> GraphLayoutEngine {
    GraphLayoutEngine::new(
        Rect::new(0.0, 0.0, 200.0, 150.0),
        Margins::default(),
        AxisRange::new(0.0, 10.0),
        AxisRange::new(0.0, 100.0),
    )
    .expect("valid layout engine")
}

#[test]
fn construction_derives_plot_and_graph_rects() {
    let engine = default_engine();

    assert_eq!(engine.plot_rect(), Rect::new(35.0, 0.0, 165.0, 115.0));
    assert_eq!(engine.graph_rect(), Rect::new(0.0, 0.0, 10.0, 100.0));
}

#[test]
fn refresh_derives_domains_from_data_source() {
    let mut engine = default_engine();
    let source = StaticDataSource::from_values(vec![10.0, 20.0, 30.0]).expect("source");

    engine
        .refresh(Rect::new(0.0, 0.0, 200.0, 150.0), &source)
        .expect("refresh");

    // Index axis [0, 2], Y domain [10, 30].
    assert_eq!(engine.graph_rect(), Rect::new(0.0, 10.0, 2.0, 20.0));

    let screen = engine
        .graph_point_to_screen_point(GraphPoint::new(1.0, 20.0))
        .expect("midpoint");
    assert_relative_eq!(screen.x, 117.5, max_relative = 1e-12);
    assert_relative_eq!(screen.y, 57.5, max_relative = 1e-12);
}

#[test]
fn explicit_x_range_overrides_index_axis() {
    let mut engine = default_engine();
    let source = StaticDataSource::from_values(vec![1.0, 2.0])
        .expect("source")
        .with_x_range(AxisRange::new(100.0, 200.0));

    engine
        .refresh(Rect::new(0.0, 0.0, 200.0, 150.0), &source)
        .expect("refresh");

    assert_eq!(engine.graph_rect().origin_x, 100.0);
    assert_eq!(engine.graph_rect().width, 100.0);
}

#[test]
fn failed_refresh_keeps_previous_mapper() {
    let mut engine = default_engine();
    let before = engine.mapper();
    let source = StaticDataSource::from_values(vec![10.0, 20.0]).expect("source");

    let result = engine.refresh(Rect::new(0.0, 0.0, 0.0, 0.0), &source);

    assert!(result.is_err());
    assert_eq!(engine.mapper(), before);

    let screen = engine
        .graph_point_to_screen_point(GraphPoint::new(0.0, 0.0))
        .expect("previous mapping still live");
    assert_eq!(screen.x, 35.0);
    assert_eq!(screen.y, 115.0);
}

#[test]
fn single_value_source_still_produces_usable_mapping() {
    let mut engine = default_engine();
    let source = StaticDataSource::from_values(vec![42.0]).expect("source");

    engine
        .refresh(Rect::new(0.0, 0.0, 200.0, 150.0), &source)
        .expect("refresh with collapsed domains");

    let rect = engine.graph_rect();
    assert!(rect.width > 0.0);
    assert!(rect.height > 0.0);
    assert_relative_eq!(rect.origin_y + rect.height / 2.0, 42.0, max_relative = 1e-12);
}

#[test]
fn set_margins_applies_on_next_refresh() {
    let mut engine = default_engine();
    let source = StaticDataSource::from_values(vec![0.0, 1.0]).expect("source");

    engine
        .set_margins(Margins::new(10.0, 5.0, 10.0, 5.0))
        .expect("valid margins");
    // Unchanged until a refresh recomputes the plot rect.
    assert_eq!(engine.plot_rect(), Rect::new(35.0, 0.0, 165.0, 115.0));

    engine
        .refresh(Rect::new(0.0, 0.0, 200.0, 150.0), &source)
        .expect("refresh");
    assert_eq!(engine.plot_rect(), Rect::new(10.0, 5.0, 180.0, 140.0));
}

#[test]
fn invalid_margins_are_rejected_without_state_change() {
    let mut engine = default_engine();
    let before = engine.margins();

    let result = engine.set_margins(Margins::new(f64::NAN, 0.0, 0.0, 0.0));

    assert!(matches!(result, Err(GraphError::InvalidData(_))));
    assert_eq!(engine.margins(), before);
}

#[test]
fn lazy_and_strict_series_projection_agree() {
    let engine = default_engine();
    let mut series = linegraph_rs::api::Series::new();
    series
        .set_points(vec![
            GraphPoint::new(0.0, 0.0),
            GraphPoint::new(5.0, 50.0),
            GraphPoint::new(10.0, 100.0),
        ])
        .expect("points");

    let strict = engine.project_series(&series).expect("strict projection");
    let lazy: Vec<_> = engine
        .map_series_to_screen(&series)
        .collect::<Result<_, _>>()
        .expect("lazy projection");

    assert_eq!(strict, lazy);
    assert_eq!(strict.len(), 3);
    assert_eq!(strict[1].x, 117.5);
    assert_eq!(strict[1].y, 57.5);
}

#[test]
fn refresh_is_idempotent_for_unchanged_inputs() {
    let mut engine = default_engine();
    let view = Rect::new(0.0, 0.0, 200.0, 150.0);
    let source = StaticDataSource::from_values(vec![10.0, 20.0, 30.0]).expect("source");

    engine.refresh(view, &source).expect("first refresh");
    let mapper_after_first = engine.mapper();
    let point_after_first = engine
        .graph_point_to_screen_point(GraphPoint::new(1.0, 20.0))
        .expect("mapping");

    engine.refresh(view, &source).expect("second refresh");

    assert_eq!(engine.mapper(), mapper_after_first);
    let point_after_second = engine
        .graph_point_to_screen_point(GraphPoint::new(1.0, 20.0))
        .expect("mapping");
    assert_eq!(point_after_second, point_after_first);
}

#[test]
fn screen_to_graph_round_trip_through_engine() {
    let engine = default_engine();
    let original = ScreenPoint::new(90.0, 40.0);

    let graph = engine
        .screen_point_to_graph_point(original)
        .expect("inverse");
    let back = engine.graph_point_to_screen_point(graph).expect("forward");

    assert_relative_eq!(back.x, original.x, max_relative = 1e-12);
    assert_relative_eq!(back.y, original.y, max_relative = 1e-12);
}
