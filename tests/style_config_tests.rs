use rangeplot::api::{InteractiveWidget, PlotRangeControl, PlotWidget};
use rangeplot::interaction::{InputBus, SelectionBus};
use rangeplot::render::Color;
use rangeplot::{PlotError, PlotStyle, RangeControlStyle};

#[test]
fn plot_style_json_roundtrip_keeps_tuning() {
    let mut style = PlotStyle::default();
    style.padding = 40.0;
    style.select_key = 's';
    style.fill = true;
    style.line_color = Color::rgba(0.25, 0.5, 1.0, 0.75);

    let json = style.to_json_pretty().expect("serialize");
    let parsed = PlotStyle::from_json_str(&json).expect("parse");

    assert_eq!(parsed.padding, 40.0);
    assert_eq!(parsed.select_key, 's');
    assert!(parsed.fill);
    assert_eq!(parsed.line_color, Color::rgba(0.25, 0.5, 1.0, 0.75));
}

#[test]
fn partial_plot_style_json_falls_back_to_defaults() {
    let parsed = PlotStyle::from_json_str(r#"{ "padding": 10.0, "select_key": "x" }"#)
        .expect("parse");
    let defaults = PlotStyle::default();

    assert_eq!(parsed.padding, 10.0);
    assert_eq!(parsed.select_key, 'x');
    assert_eq!(parsed.max_select_distance, defaults.max_select_distance);
    assert_eq!(parsed.line_width, defaults.line_width);
    assert!(!parsed.fill);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = PlotStyle::from_json_str("{ padding: ").expect_err("must fail");
    assert!(matches!(err, PlotError::Config(_)));

    let err = RangeControlStyle::from_json_str(r#"{ "inset_x": "wide" }"#).expect_err("must fail");
    assert!(matches!(err, PlotError::Config(_)));
}

#[test]
fn out_of_range_values_are_rejected_after_parsing() {
    let err = PlotStyle::from_json_str(r#"{ "line_width": -1.0 }"#).expect_err("must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));

    let err = PlotStyle::from_json_str(r#"{ "arrow_spread": 2.0 }"#).expect_err("must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));

    let err = RangeControlStyle::from_json_str(r#"{ "handle": { "size": 0.0 } }"#)
        .expect_err("must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn range_control_style_nested_handle_defaults() {
    let parsed =
        RangeControlStyle::from_json_str(r#"{ "inset_y": 5.0, "handle": { "size": 9.0 } }"#)
            .expect("parse");
    let defaults = RangeControlStyle::default();

    assert_eq!(parsed.inset_y, 5.0);
    assert_eq!(parsed.inset_x, defaults.inset_x);
    assert_eq!(parsed.handle.size, 9.0);
    assert_eq!(parsed.handle.fill, defaults.handle.fill);
}

#[test]
fn widgets_reject_invalid_styles_and_keep_the_old_one() {
    let input = InputBus::new();
    let selection = SelectionBus::new();

    let mut plot = PlotWidget::new(&input, &selection);
    let mut bad = PlotStyle::default();
    bad.padding = f64::NAN;
    assert!(plot.set_style(bad).is_err());
    assert_eq!(plot.style().padding, 25.0);
    assert!(plot.set_line_width(0.0).is_err());
    assert_eq!(plot.style().line_width, 2.0);

    let mut control = PlotRangeControl::new(&input, &selection);
    let mut bad = RangeControlStyle::default();
    bad.marker_line_width = -2.0;
    assert!(control.set_style(bad).is_err());
    assert_eq!(control.style().marker_line_width, 2.0);
}

#[test]
fn range_control_insets_follow_the_style() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = PlotRangeControl::new(&input, &selection);
    control.set_viewport_size(200.0, 60.0).expect("size");

    let mut style = RangeControlStyle::default();
    style.inset_x = 10.0;
    style.inset_y = 10.0;
    control.set_style(style).expect("style");
    control.update();

    let timeline = control.timeline();
    assert_eq!(timeline.x, 10.0);
    assert_eq!(timeline.y, 10.0);
    assert_eq!(timeline.width, 180.0);
    assert_eq!(timeline.height, 40.0);
}
