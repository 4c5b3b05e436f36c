use linegraph_rs::core::projection::{project_points, project_polyline_segments};
use linegraph_rs::core::{CoordinateMapper, GraphPoint, Rect};
use proptest::prelude::*;

fn mapper_for(graph_width: f64, graph_height: f64) -> CoordinateMapper {
    let screen = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let graph = Rect::new(0.0, 0.0, graph_width, graph_height);
    CoordinateMapper::new(screen, graph).expect("valid mapper")
}

proptest! {
    #[test]
    fn projected_points_match_input_length(
        values in proptest::collection::vec(-10_000.0f64..10_000.0, 0..256)
    ) {
        let mapper = mapper_for(values.len().max(2) as f64, 20_001.0);
        let points: Vec<GraphPoint> = values
            .iter()
            .enumerate()
            .map(|(index, value)| GraphPoint::new(index as f64, *value))
            .collect();

        let projected = project_points(&points, mapper).expect("projection");
        prop_assert_eq!(projected.len(), points.len());
    }

    #[test]
    fn projected_points_preserve_index_order(
        values in proptest::collection::vec(-10_000.0f64..10_000.0, 2..256)
    ) {
        let mapper = mapper_for(values.len() as f64, 20_001.0);
        let points: Vec<GraphPoint> = values
            .iter()
            .enumerate()
            .map(|(index, value)| GraphPoint::new(index as f64, *value))
            .collect();

        let projected = project_points(&points, mapper).expect("projection");
        for pair in projected.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn segment_count_is_one_less_than_point_count(
        values in proptest::collection::vec(-10_000.0f64..10_000.0, 2..256)
    ) {
        let mapper = mapper_for(values.len() as f64, 20_001.0);
        let points: Vec<GraphPoint> = values
            .iter()
            .enumerate()
            .map(|(index, value)| GraphPoint::new(index as f64, *value))
            .collect();

        let segments = project_polyline_segments(&points, mapper).expect("segments");
        prop_assert_eq!(segments.len(), points.len() - 1);
    }

    #[test]
    fn adjacent_segments_share_endpoints(
        values in proptest::collection::vec(-10_000.0f64..10_000.0, 3..256)
    ) {
        let mapper = mapper_for(values.len() as f64, 20_001.0);
        let points: Vec<GraphPoint> = values
            .iter()
            .enumerate()
            .map(|(index, value)| GraphPoint::new(index as f64, *value))
            .collect();

        let segments = project_polyline_segments(&points, mapper).expect("segments");
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[0].x2, pair[1].x1);
            prop_assert_eq!(pair[0].y2, pair[1].y1);
        }
    }

    #[test]
    fn segments_agree_with_pointwise_projection(
        values in proptest::collection::vec(-10_000.0f64..10_000.0, 2..128)
    ) {
        let mapper = mapper_for(values.len() as f64, 20_001.0);
        let points: Vec<GraphPoint> = values
            .iter()
            .enumerate()
            .map(|(index, value)| GraphPoint::new(index as f64, *value))
            .collect();

        let projected = project_points(&points, mapper).expect("points");
        let segments = project_polyline_segments(&points, mapper).expect("segments");

        for (index, segment) in segments.iter().enumerate() {
            prop_assert!((segment.x1 - projected[index].x).abs() <= 1e-9);
            prop_assert!((segment.y1 - projected[index].y).abs() <= 1e-9);
            prop_assert!((segment.x2 - projected[index + 1].x).abs() <= 1e-9);
            prop_assert!((segment.y2 - projected[index + 1].y).abs() <= 1e-9);
        }
    }
}
