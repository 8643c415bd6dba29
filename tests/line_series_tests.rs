use approx::assert_abs_diff_eq;
use rangeplot::core::{
    AxisTransform, DataPoint, Rect, ScreenPoint, axis_arrow, build_series_path, project_points,
};

#[test]
fn series_path_follows_series_order() {
    let points = [
        DataPoint::new(3.0, 3.0),
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 2.0),
    ];
    let transform = AxisTransform::fit(&points, Rect::new(25.0, 25.0, 300.0, 300.0)).expect("fit");
    let display = project_points(&points, &transform);
    let path = build_series_path(&display, false).expect("path");

    assert_eq!(path.vertices.len(), 3);
    assert_eq!(path.vertices[0], ScreenPoint::new(325.0, 25.0));
    assert_eq!(path.vertices[1], ScreenPoint::new(25.0, 325.0));
    assert!(!path.is_closed());
}

#[test]
fn single_point_series_still_builds_a_path() {
    let display = [ScreenPoint::new(12.0, 40.0)];
    let path = build_series_path(&display, true).expect("path");
    assert_eq!(path.vertices, display.to_vec());
    assert!(path.is_closed());
}

#[test]
fn arrow_head_corners_sit_one_head_length_behind_the_tip() {
    let spread = std::f64::consts::FRAC_PI_6;
    let arrow = axis_arrow(
        ScreenPoint::new(25.0, 325.0),
        ScreenPoint::new(325.0, 325.0),
        10.0,
        spread,
    );
    let [tip, a, b] = arrow.head;

    assert_eq!(tip, ScreenPoint::new(325.0, 325.0));
    assert_abs_diff_eq!(a.x, 315.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.x, 315.0, epsilon = 1e-9);
    assert_abs_diff_eq!((a.y - b.y).abs(), 2.0 * 10.0 * spread.tan(), epsilon = 1e-9);
    assert_eq!(arrow.stem_start, ScreenPoint::new(25.0, 325.0));
}
