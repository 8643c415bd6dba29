use proptest::prelude::*;
use rangeplot::api::{InteractiveWidget, PlotWidget};
use rangeplot::core::{AxisTransform, DataPoint, Rect, Viewport};
use rangeplot::interaction::{InputBus, SelectionBus};
use rangeplot::render::RenderFrame;

const EPS: f64 = 1e-6;

fn coordinate_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1_000.0f64..1_000.0,
        -1e-306f64..1e-306,
        -1e-300f64..1e-300,
        -1e300f64..1e300,
        -1e308f64..1e308,
    ]
}

fn points_strategy(max_len: usize) -> impl Strategy<Value = Vec<DataPoint>> {
    proptest::collection::vec(
        (coordinate_strategy(), coordinate_strategy()).prop_map(|(x, y)| DataPoint::new(x, y)),
        1..max_len,
    )
}

proptest! {
    #[test]
    fn data_origin_lies_within_plot_rect(
        points in points_strategy(64),
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        width in 1.0f64..2_000.0,
        height in 1.0f64..2_000.0
    ) {
        let plot_rect = Rect::new(x, y, width, height);
        let transform = AxisTransform::fit(&points, plot_rect).expect("fit");
        let origin = transform.origin();
        prop_assert!(transform.x_scale().is_finite() && transform.y_scale().is_finite());

        prop_assert!(origin.x >= plot_rect.x - EPS);
        prop_assert!(origin.x <= plot_rect.x + plot_rect.width + EPS);
        prop_assert!(origin.y >= plot_rect.y - EPS);
        prop_assert!(origin.y <= plot_rect.y + plot_rect.height + EPS);
    }

    #[test]
    fn projected_points_stay_inside_plot_rect(points in points_strategy(64)) {
        let plot_rect = Rect::new(25.0, 25.0, 300.0, 300.0);
        let transform = AxisTransform::fit(&points, plot_rect).expect("fit");

        for point in &points {
            let pixel = transform.data_to_screen(*point);
            prop_assert!(pixel.x >= plot_rect.x - EPS && pixel.x <= plot_rect.x + plot_rect.width + EPS);
            prop_assert!(pixel.y >= plot_rect.y - EPS && pixel.y <= plot_rect.y + plot_rect.height + EPS);
        }
    }

    #[test]
    fn display_length_matches_series_after_every_draw(
        batches in proptest::collection::vec(points_strategy(16), 0..6)
    ) {
        let input = InputBus::new();
        let selection = SelectionBus::new();
        let mut plot = PlotWidget::new(&input, &selection);
        let mut frame = RenderFrame::new(Viewport::new(350, 350));

        plot.draw(&mut frame);
        prop_assert_eq!(plot.display_points().len(), 0);

        for batch in batches {
            for point in batch {
                plot.add_point(point).expect("finite point");
            }
            frame.clear();
            plot.draw(&mut frame);
            prop_assert_eq!(plot.display_points().len(), plot.series().len());
        }
    }
}
