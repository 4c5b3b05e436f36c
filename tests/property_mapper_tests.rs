use linegraph_rs::core::{CoordinateMapper, GraphPoint, Rect, ScreenPoint};
use proptest::prelude::*;

proptest! {
    #[test]
    fn graph_to_screen_round_trip_property(
        graph_origin_x in -1_000_000.0f64..1_000_000.0,
        graph_origin_y in -1_000_000.0f64..1_000_000.0,
        graph_width in 0.001f64..1_000_000.0,
        graph_height in 0.001f64..1_000_000.0,
        x_factor in 0.0f64..1.0,
        y_factor in 0.0f64..1.0
    ) {
        let screen = Rect::new(35.0, 0.0, 1885.0, 1045.0);
        let graph = Rect::new(graph_origin_x, graph_origin_y, graph_width, graph_height);
        let mapper = CoordinateMapper::new(screen, graph).expect("valid mapper");

        let point = GraphPoint::new(
            graph_origin_x + x_factor * graph_width,
            graph_origin_y + y_factor * graph_height,
        );

        let px = mapper.screen_point_for_graph_point(point).expect("to screen");
        let recovered = mapper.graph_point_for_screen_point(px).expect("from screen");

        prop_assert!((recovered.x - point.x).abs() <= 1e-7 * graph_width.max(1.0));
        prop_assert!((recovered.y - point.y).abs() <= 1e-7 * graph_height.max(1.0));
    }

    #[test]
    fn screen_to_graph_round_trip_property(
        screen_x in 0.0f64..2048.0,
        screen_y in 0.0f64..1024.0,
        graph_width in 0.001f64..100_000.0,
        graph_height in 0.001f64..100_000.0
    ) {
        let screen = Rect::new(0.0, 0.0, 2048.0, 1024.0);
        let graph = Rect::new(-50.0, -50.0, graph_width, graph_height);
        let mapper = CoordinateMapper::new(screen, graph).expect("valid mapper");

        let point = ScreenPoint::new(screen_x, screen_y);
        let recovered_graph = mapper.graph_point_for_screen_point(point).expect("to graph");
        let recovered_screen = mapper
            .screen_point_for_graph_point(recovered_graph)
            .expect("back to screen");

        prop_assert!((recovered_screen.x - point.x).abs() <= 1e-7);
        prop_assert!((recovered_screen.y - point.y).abs() <= 1e-7);
    }

    #[test]
    fn forward_mapping_is_monotonic_in_x(
        x_low_factor in 0.0f64..0.499,
        x_high_factor in 0.501f64..1.0,
        graph_width in 0.001f64..1_000_000.0
    ) {
        let screen = Rect::new(0.0, 0.0, 800.0, 600.0);
        let graph = Rect::new(0.0, 0.0, graph_width, 1.0);
        let mapper = CoordinateMapper::new(screen, graph).expect("valid mapper");

        let low = mapper
            .screen_point_for_graph_point(GraphPoint::new(x_low_factor * graph_width, 0.5))
            .expect("low");
        let high = mapper
            .screen_point_for_graph_point(GraphPoint::new(x_high_factor * graph_width, 0.5))
            .expect("high");

        prop_assert!(low.x < high.x);
    }

    #[test]
    fn forward_mapping_inverts_y_axis(
        y_low_factor in 0.0f64..0.499,
        y_high_factor in 0.501f64..1.0,
        graph_height in 0.001f64..1_000_000.0
    ) {
        let screen = Rect::new(0.0, 0.0, 800.0, 600.0);
        let graph = Rect::new(0.0, 0.0, 1.0, graph_height);
        let mapper = CoordinateMapper::new(screen, graph).expect("valid mapper");

        let low = mapper
            .screen_point_for_graph_point(GraphPoint::new(0.5, y_low_factor * graph_height))
            .expect("low");
        let high = mapper
            .screen_point_for_graph_point(GraphPoint::new(0.5, y_high_factor * graph_height))
            .expect("high");

        prop_assert!(high.y < low.y);
    }
}
