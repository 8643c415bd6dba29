use rangeplot::api::{InteractiveWidget, PlotWidget};
use rangeplot::interaction::{
    InputBus, InputClass, InputEvent, InputEventKind, InputListener, InteractiveRegion, KeyCode,
    PointerButton, SelectionBus, WidgetId,
};

struct Recorder {
    id: WidgetId,
    region: InteractiveRegion,
    received: Vec<InputEvent>,
}

impl Recorder {
    fn new(bus: &InputBus) -> Self {
        let id = bus.register_widget();
        Self {
            id,
            region: InteractiveRegion::attached_as(bus, id),
            received: Vec::new(),
        }
    }
}

impl InputListener for Recorder {
    fn listener_id(&self) -> WidgetId {
        self.id
    }

    fn on_input(&mut self, event: &InputEvent) {
        if self.region.handle_input(event) {
            self.received.push(*event);
        }
    }
}

#[test]
fn enabling_mouse_twice_keeps_a_single_subscription() {
    let bus = InputBus::new();
    let mut region = InteractiveRegion::attached(&bus);
    region.enable_mouse_input();
    region.enable_mouse_input();

    for kind in InputClass::Mouse.kinds() {
        assert_eq!(bus.listener_count(*kind), 1);
    }
}

#[test]
fn disable_then_enable_restores_subscriptions() {
    let bus = InputBus::new();
    let mut region = InteractiveRegion::attached(&bus);
    let id = region.widget_id().expect("attached");

    region.disable_key_input();
    region.disable_key_input();
    assert!(!bus.is_listening(InputEventKind::KeyPressed, id));
    assert!(bus.is_listening(InputEventKind::MouseMoved, id));

    region.enable_key_input();
    assert!(bus.is_listening(InputEventKind::KeyReleased, id));
    assert_eq!(bus.listener_count(InputEventKind::KeyReleased), 1);
}

#[test]
fn dispatch_skips_unsubscribed_widgets() {
    let bus = InputBus::new();
    let mut keyboard_only = Recorder::new(&bus);
    keyboard_only.region.disable_mouse_input();
    let mut everything = Recorder::new(&bus);

    let moved = InputEvent::MouseMoved { x: 5.0, y: 5.0 };
    let delivered = bus.dispatch(&moved, &mut [&mut keyboard_only as &mut dyn InputListener, &mut everything]);
    assert_eq!(delivered, 1);
    assert!(keyboard_only.received.is_empty());
    assert_eq!(everything.received, vec![moved]);

    let key = InputEvent::KeyPressed {
        key: KeyCode::from_char('i'),
    };
    let delivered = bus.dispatch(&key, &mut [&mut keyboard_only as &mut dyn InputListener, &mut everything]);
    assert_eq!(delivered, 2);
}

#[test]
fn region_tracks_press_drag_and_release() {
    let bus = InputBus::new();
    let mut recorder = Recorder::new(&bus);
    recorder.region.set_size(100.0, 100.0).expect("size");

    let events = [
        InputEvent::MouseMoved { x: 50.0, y: 50.0 },
        InputEvent::MousePressed {
            x: 50.0,
            y: 50.0,
            button: PointerButton::Left,
        },
        InputEvent::MouseDragged {
            x: 150.0,
            y: 50.0,
            button: PointerButton::Left,
        },
    ];
    for event in &events {
        bus.dispatch(event, &mut [&mut recorder as &mut dyn InputListener]);
    }
    assert!(recorder.region.is_hovered());
    assert!(recorder.region.is_pressed_inside());
    assert!(recorder.region.is_dragging());

    bus.dispatch(
        &InputEvent::MouseReleased {
            x: 150.0,
            y: 50.0,
            button: PointerButton::Left,
        },
        &mut [&mut recorder as &mut dyn InputListener],
    );
    assert!(!recorder.region.is_pressed_inside());
    assert!(!recorder.region.is_dragging());
}

#[test]
fn press_outside_viewport_is_not_a_press_inside() {
    let mut region = InteractiveRegion::embedded();
    region.set_size(10.0, 10.0).expect("size");
    region.handle_input(&InputEvent::MousePressed {
        x: 50.0,
        y: 50.0,
        button: PointerButton::Left,
    });
    assert!(!region.is_pressed_inside());
}

#[test]
fn widgets_toggle_input_through_the_trait() {
    let input = InputBus::new();
    let selection = SelectionBus::new();
    let mut plot = PlotWidget::new(&input, &selection);

    plot.disable_mouse_input();
    plot.disable_key_input();
    for kind in [InputEventKind::MouseMoved, InputEventKind::KeyPressed] {
        assert_eq!(input.listener_count(kind), 0);
    }

    plot.enable_mouse_input();
    plot.enable_mouse_input();
    assert_eq!(input.listener_count(InputEventKind::MouseDragged), 1);
    assert!(plot.region().is_input_enabled(InputClass::Mouse));
    assert!(!plot.region().is_input_enabled(InputClass::Keyboard));
}
