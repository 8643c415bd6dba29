use approx::assert_relative_eq;
use rangeplot::api::{InteractiveWidget, PlotRangeControl, PlotWidget};
use rangeplot::core::Viewport;
use rangeplot::interaction::{
    InputBus, InputEvent, InputEventKind, InputListener, PointerButton, SelectionBus,
    SelectionEvent, SharedBound,
};
use rangeplot::render::{NullRenderer, RenderFrame};

fn send(bus: &InputBus, control: &mut PlotRangeControl, event: InputEvent) -> usize {
    bus.dispatch(&event, &mut [control as &mut dyn InputListener])
}

/// Timeline (15, 20, 300, 40) over values 0..=10, so 30 px per unit.
fn sample_control(input: &InputBus, selection: &SelectionBus) -> PlotRangeControl {
    let mut control = PlotRangeControl::new(input, selection);
    control.set_viewport_size(330.0, 80.0).expect("size");
    control
        .set_data((0..=10).map(f64::from))
        .expect("values");
    control
}

fn press_and_drag(bus: &InputBus, control: &mut PlotRangeControl, from: (f64, f64), to: (f64, f64)) {
    send(bus, control, InputEvent::MouseMoved { x: from.0, y: from.1 });
    send(
        bus,
        control,
        InputEvent::MousePressed {
            x: from.0,
            y: from.1,
            button: PointerButton::Left,
        },
    );
    send(
        bus,
        control,
        InputEvent::MouseDragged {
            x: to.0,
            y: to.1,
            button: PointerButton::Left,
        },
    );
}

#[test]
fn linked_bounds_position_the_handles() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    control.link_bounds(SharedBound::new(2.0), SharedBound::new(8.0));
    control.update();

    assert_relative_eq!(control.scale(), 30.0);
    assert_relative_eq!(control.lower_handle().coordinate(), 75.0);
    assert_relative_eq!(control.upper_handle().coordinate(), 255.0);
    assert_relative_eq!(control.lower_handle().shape().y, 60.0);
    assert_eq!(control.lower_handle().bounds(), (15.0, 255.0));
    assert_eq!(control.upper_handle().bounds(), (75.0, 315.0));
}

#[test]
fn repeated_updates_are_a_fixed_point() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    let lower = SharedBound::new(1.5);
    let upper = SharedBound::new(6.25);
    control.link_bounds(lower.clone(), upper.clone());

    control.update();
    let first = (
        control.lower_handle().coordinate(),
        control.upper_handle().coordinate(),
    );
    for _ in 0..5 {
        control.update();
        assert_eq!(control.lower_handle().coordinate(), first.0);
        assert_eq!(control.upper_handle().coordinate(), first.1);
    }
    assert_eq!(lower.get(), 1.5);
    assert_eq!(upper.get(), 6.25);
}

#[test]
fn external_bound_changes_move_idle_handles() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    let lower = SharedBound::new(2.0);
    control.link_bounds(lower.clone(), SharedBound::new(8.0));
    control.update();

    lower.set(4.0);
    control.update();
    assert_relative_eq!(control.lower_handle().coordinate(), 135.0);
}

#[test]
fn dragging_a_handle_writes_the_bound() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    let lower = SharedBound::new(2.0);
    let upper = SharedBound::new(8.0);
    control.link_bounds(lower.clone(), upper.clone());
    control.update();

    // Lower handle box spans x 62..75, y 60..75.
    press_and_drag(&input, &mut control, (70.0, 65.0), (105.0, 65.0));
    assert!(control.lower_handle().is_hovered());
    assert_relative_eq!(control.lower_handle().coordinate(), 105.0);

    control.update();
    assert_relative_eq!(lower.get(), 3.0, epsilon = 1e-9);
    assert_eq!(upper.get(), 8.0);

    // Past the upper handle: ignored for this tick.
    send(
        &input,
        &mut control,
        InputEvent::MouseDragged {
            x: 300.0,
            y: 65.0,
            button: PointerButton::Left,
        },
    );
    control.update();
    assert_relative_eq!(control.lower_handle().coordinate(), 105.0);
    assert!(control.lower_handle().coordinate() <= control.upper_handle().coordinate());
}

#[test]
fn unlinked_control_degrades_to_free_sliders() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    control.update();

    assert!(!control.is_bound());
    assert_relative_eq!(control.lower_handle().coordinate(), 15.0);
    assert_relative_eq!(control.upper_handle().coordinate(), 315.0);
    assert_relative_eq!(control.lower_value().expect("lower"), 0.0);
    assert_relative_eq!(control.upper_value().expect("upper"), 10.0);
    assert_eq!(control.active_indices().len(), 11);

    press_and_drag(&input, &mut control, (10.0, 65.0), (75.0, 65.0));
    control.update();
    assert_relative_eq!(control.lower_value().expect("lower"), 2.0, epsilon = 1e-9);
    assert_eq!(control.active_indices().first(), Some(&2));
}

#[test]
fn degenerate_domain_skips_binding() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = PlotRangeControl::new(&input, &selection);
    control.set_viewport_size(330.0, 80.0).expect("size");
    control.set_data([5.0, 5.0]).expect("values");
    let lower = SharedBound::new(1.0);
    let upper = SharedBound::new(2.0);
    control.link_bounds(lower.clone(), upper.clone());

    control.update();
    assert_eq!(control.scale(), 0.0);
    assert_eq!(lower.get(), 1.0);
    assert_eq!(upper.get(), 2.0);
    assert!(control.lower_handle().coordinate() <= control.upper_handle().coordinate());
}

#[test]
fn programmatic_crossing_is_snapped() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    control.link_bounds(SharedBound::new(9.0), SharedBound::new(3.0));
    control.update();

    assert_eq!(
        control.lower_handle().coordinate(),
        control.upper_handle().coordinate()
    );
}

#[test]
fn highlight_mirror_and_drawing() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    control.link_bounds(SharedBound::new(2.0), SharedBound::new(8.0));
    control.update();

    selection.emit(SelectionEvent::Selected(vec![1, 5, 42].into()));
    assert_eq!(control.highlighted_indices().as_slice(), &[1, 5, 42]);

    let mut frame = RenderFrame::new(Viewport::new(330, 80));
    control.draw(&mut frame);
    frame.validate().expect("valid frame");

    // Background, two inactive areas and the timeline outline.
    assert_eq!(frame.rects.len(), 4);
    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.circles.len(), 2);
    assert_relative_eq!(frame.circles[1].center.x, 165.0);
    assert_relative_eq!(frame.circles[1].center.y, 40.0);
    // Each handle is a filled triangle plus its outline.
    assert_eq!(frame.paths.len(), 4);

    selection.emit(SelectionEvent::Deselected(Default::default()));
    assert!(control.highlighted_indices().is_empty());
}

#[test]
fn clearing_plot_data_clears_the_mirrored_markers() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut plot = PlotWidget::new(&input, &selection);
    for i in 0..=10 {
        plot.add_data_point(f64::from(i), 1.0).expect("point");
    }
    let mut control = sample_control(&input, &selection);
    control.update();

    selection.emit(SelectionEvent::Selected(vec![0, 1].into()));
    assert_eq!(control.highlighted_indices().as_slice(), &[0, 1]);

    plot.clear_data();
    assert!(plot.highlighted_indices().is_empty());
    assert_eq!(plot.highlighted_indices(), control.highlighted_indices());

    let mut frame = RenderFrame::new(Viewport::new(330, 80));
    control.draw(&mut frame);
    assert!(frame.circles.is_empty());
}

#[test]
fn disabled_mouse_input_is_not_routed() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    control.link_bounds(SharedBound::new(2.0), SharedBound::new(8.0));
    control.update();
    control.disable_mouse_input();

    assert_eq!(input.listener_count(InputEventKind::MouseDragged), 0);
    let delivered = send(&input, &mut control, InputEvent::MouseMoved { x: 70.0, y: 65.0 });
    assert_eq!(delivered, 0);
    assert!(!control.lower_handle().is_hovered());
}

#[test]
fn render_with_runs_update_first() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);
    let mut renderer = NullRenderer::default();

    control
        .render_with(Viewport::new(330, 80), &mut renderer)
        .expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_relative_eq!(control.upper_handle().coordinate(), 315.0);
}

#[test]
fn non_finite_values_are_rejected() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut control = sample_control(&input, &selection);

    assert!(control.add_data_point(f64::NAN).is_err());
    assert!(control.set_data([1.0, f64::INFINITY]).is_err());
    assert_eq!(control.values().len(), 11);
}
