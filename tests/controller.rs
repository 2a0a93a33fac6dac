use std::cell::RefCell;
use std::rc::Rc;

use floem_color_dropdown::{
    Bounds, ColorKeyword, ColorPresets, ControlKind, ControlPositions, CssColor, Deferred, Element,
    FocusDestination, FocusTarget, Format, GlobalListener, Key, MenuAction, MenuList, Phase,
    PickerController, PickerOptions, Placement, SequentialIds, StaticGeometry, Surface, UiEvent,
    hsv_to_pixel, pixel_to_hsv,
};

const LEN: f64 = 300.0;

fn geometry() -> StaticGeometry {
    StaticGeometry::new(1280.0, 800.0)
        .with(Element::Input, Bounds::new(10.0, 100.0, 200.0, 30.0))
        .with(Element::PickerDropdown, Bounds::new(10.0, 134.0, 360.0, 380.0))
        .with(Element::MenuDropdown, Bounds::new(10.0, 134.0, 260.0, 200.0))
        .with(Element::Control(ControlKind::Plane), Bounds::new(20.0, 140.0, LEN, LEN))
        .with(Element::Control(ControlKind::Hue), Bounds::new(330.0, 140.0, 18.0, LEN))
        .with(Element::Control(ControlKind::Alpha), Bounds::new(356.0, 140.0, 18.0, LEN))
}

type Changes = Rc<RefCell<Vec<String>>>;

fn picker(options: PickerOptions) -> (PickerController<StaticGeometry>, Changes) {
    let mut c = PickerController::new(options, geometry(), &SequentialIds::default());
    let changes: Changes = Rc::default();
    let sink = changes.clone();
    c.set_on_change(move |value| sink.borrow_mut().push(value.to_string()));
    (c, changes)
}

fn run_all(c: &mut PickerController<StaticGeometry>) {
    loop {
        let tasks = c.take_scheduled();
        if tasks.is_empty() {
            break;
        }
        for task in tasks {
            c.run_deferred(task.task);
        }
    }
}

fn open_picker(c: &mut PickerController<StaticGeometry>) {
    c.show_picker();
    run_all(c);
    assert!(c.is_shown(Surface::Picker));
}

#[test]
fn positions_round_trip_and_clamp() {
    let p = ControlPositions {
        c1x: 75.0,
        c1y: 150.0,
        c2y: 225.0,
        c3y: 30.0,
    };
    let back = hsv_to_pixel(pixel_to_hsv(&p, LEN), LEN);
    assert!((back.c1x - p.c1x).abs() < 1e-9);
    assert!((back.c1y - p.c1y).abs() < 1e-9);
    assert!((back.c2y - p.c2y).abs() < 1e-9);
    assert!((back.c3y - p.c3y).abs() < 1e-9);

    let wild = ControlPositions {
        c1x: -40.0,
        c1y: 900.0,
        c2y: f64::NAN,
        c3y: 301.0,
    };
    let hsva = pixel_to_hsv(&wild, LEN);
    assert_eq!((hsva.s, hsva.v, hsva.h, hsva.a), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn value_follows_knob_positions() {
    let (mut c, _) = picker(PickerOptions::new().with_value("#808080"));
    open_picker(&mut c);
    assert!(c.pointer_down(ControlKind::Plane, 20.0 + 90.0, 140.0 + 60.0, true));
    assert!(c.pointer_down(ControlKind::Hue, 335.0, 140.0 + 100.0, true));

    let expected = CssColor::from_hsva(pixel_to_hsv(&c.positions(), LEN), Format::Rgb);
    assert_eq!(c.value(), expected.to_string());
    assert_eq!(c.input_value(), c.value());
}

#[test]
fn dropdown_flips_above_near_the_bottom() {
    let (mut c, _) = picker(PickerOptions::new());
    c.geometry_mut().set(Element::Input, Bounds::new(10.0, 750.0, 200.0, 30.0));
    c.geometry_mut().set(Element::PickerDropdown, Bounds::new(10.0, 784.0, 360.0, 300.0));
    open_picker(&mut c);
    assert_eq!(c.placement(), Placement::Top);
    assert_eq!(c.snapshot().picker_class, " top show");

    // Room below again after scrolling.
    c.geometry_mut().set(Element::Input, Bounds::new(10.0, 100.0, 200.0, 30.0));
    assert!(c.dispatch(UiEvent::Scroll));
    assert_eq!(c.placement(), Placement::Bottom);
}

#[test]
fn enter_commits_typed_color_once() {
    let (mut c, changes) = picker(PickerOptions::new().with_value("blue"));
    assert!(changes.borrow().is_empty());
    open_picker(&mut c);

    c.input_changed("#FF0000");
    assert_eq!(c.value(), "rgb(0, 0, 255)");
    assert!(c.input_key(Key::Enter));
    assert_eq!(c.value(), "rgb(255, 0, 0)");
    assert_eq!(c.input_value(), "rgb(255, 0, 0)");
    assert_eq!(*changes.borrow(), ["rgb(255, 0, 0)"]);
    assert_eq!(
        c.positions(),
        ControlPositions {
            c1x: LEN,
            c1y: 0.0,
            c2y: 0.0,
            c3y: 0.0,
        }
    );

    // Same color again: nothing to report.
    c.input_changed("red");
    c.input_key(Key::Enter);
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn escape_restores_committed_text() {
    let (mut c, changes) = picker(PickerOptions::new().with_value("blue"));
    open_picker(&mut c);
    c.input_changed("rgb(1, 2");
    assert!(!c.input_key(Key::Enter));
    assert_eq!(c.input_value(), "rgb(1, 2");
    assert!(!c.input_key(Key::Escape));
    assert_eq!(c.input_value(), "rgb(0, 0, 255)");
    assert!(changes.borrow().is_empty());
}

#[test]
fn keyword_selection_keeps_menu_open() {
    let options = PickerOptions::new()
        .with_value("#808080")
        .with_keywords([ColorKeyword::labeled("Default", "rgb(37, 84, 189)")]);
    let (mut c, changes) = picker(options);
    c.toggle_menu();
    run_all(&mut c);
    assert!(c.is_shown(Surface::Menu));

    assert!(c.select_keyword(0));
    assert_eq!(*changes.borrow(), ["rgb(37, 84, 189)"]);
    assert!(c.is_shown(Surface::Menu));
    assert!(c.is_current_keyword(0));
    assert!(!c.select_keyword(1));
}

#[test]
fn outside_pointer_up_closes_and_returns_focus() {
    let (mut c, _) = picker(PickerOptions::new());
    c.show_picker();
    run_all(&mut c);
    assert_eq!(c.take_focus_request(), Some(FocusTarget::Input));

    c.input_changed("half typed");
    assert!(c.dispatch(UiEvent::PointerUp {
        inside_root: false,
        has_selection: false,
    }));
    assert_eq!(c.phase(), Phase::Closing);
    assert_eq!(c.input_value(), c.value());
    assert_eq!(c.take_focus_request(), None);

    run_all(&mut c);
    assert_eq!(c.phase(), Phase::Closed);
    assert_eq!(c.current_surface(), None);
    assert_eq!(c.take_focus_request(), Some(FocusTarget::Trigger));
}

#[test]
fn pointer_up_inside_or_with_selection_keeps_open() {
    let (mut c, _) = picker(PickerOptions::new());
    open_picker(&mut c);
    c.dispatch(UiEvent::PointerUp {
        inside_root: true,
        has_selection: false,
    });
    c.dispatch(UiEvent::PointerUp {
        inside_root: false,
        has_selection: true,
    });
    assert!(c.is_shown(Surface::Picker));
}

#[test]
fn focus_leaving_the_widget_closes() {
    let (mut c, _) = picker(PickerOptions::new());
    open_picker(&mut c);
    c.focus_out(FocusDestination::Inside);
    c.focus_out(FocusDestination::Nowhere);
    assert!(c.is_shown(Surface::Picker));
    c.focus_out(FocusDestination::Outside);
    assert_eq!(c.phase(), Phase::Closing);
}

#[test]
fn listeners_follow_the_open_surface() {
    let (mut c, _) = picker(PickerOptions::new());
    assert!(c.listeners().is_empty());
    assert!(!c.dispatch(UiEvent::Scroll));

    open_picker(&mut c);
    for listener in GlobalListener::ALL {
        assert!(c.listeners().is_attached(listener));
    }

    // Swapping surfaces keeps a single attachment.
    let options = PickerOptions::new().with_presets(ColorPresets::default());
    let (mut m, _) = picker(options);
    m.show_picker();
    m.toggle_menu();
    run_all(&mut m);
    assert!(m.is_shown(Surface::Menu));
    assert!(!m.is_shown(Surface::Picker));
    assert_eq!(m.listeners().iter().count(), 5);

    assert!(c.dispatch(UiEvent::KeyUp(Key::Escape)));
    run_all(&mut c);
    assert!(c.listeners().is_empty());
    assert!(!c.dispatch(UiEvent::Resize));
}

#[test]
fn stale_tasks_are_ignored() {
    let (mut c, _) = picker(PickerOptions::new());
    c.show_picker();
    let reveal = c.take_scheduled();
    // Closed before the first frame: nothing to wait for.
    c.close_surface();
    assert_eq!(c.phase(), Phase::Closed);
    assert!(c.take_scheduled().is_empty());
    assert!(!c.run_deferred(reveal[0].task));
    assert!(!c.is_shown(Surface::Picker));

    open_picker(&mut c);
    c.close_surface();
    let conceal = c.take_scheduled();
    assert!(matches!(conceal[0].task, Deferred::Conceal(_)));
    // Reopened during the hide transition.
    c.show_picker();
    run_all(&mut c);
    assert!(!c.run_deferred(conceal[0].task));
    assert!(c.is_shown(Surface::Picker));
    assert!(!c.listeners().is_empty());
}

#[test]
fn drag_continues_and_clamps() {
    let (mut c, changes) = picker(PickerOptions::new().with_value("#808080"));
    open_picker(&mut c);
    assert!(!c.pointer_down(ControlKind::Plane, 100.0, 200.0, false));
    assert_eq!(c.dragging(), None);

    assert!(c.pointer_down(ControlKind::Plane, 170.0, 290.0, true));
    assert_eq!(c.dragging(), Some(ControlKind::Plane));
    assert_eq!((c.positions().c1x, c.positions().c1y), (150.0, 150.0));

    c.dispatch(UiEvent::PointerMove { x: 1000.0, y: -50.0 });
    assert_eq!((c.positions().c1x, c.positions().c1y), (LEN, 0.0));
    assert_eq!(c.value(), "rgb(255, 0, 0)");

    c.dispatch(UiEvent::PointerUp {
        inside_root: false,
        has_selection: false,
    });
    assert_eq!(c.dragging(), None);
    // Ending a drag outside doesn't close.
    assert!(c.is_shown(Surface::Picker));

    let seen = changes.borrow().len();
    c.dispatch(UiEvent::PointerMove { x: 20.0, y: 440.0 });
    assert_eq!(changes.borrow().len(), seen);
}

#[test]
fn resize_rescales_knobs() {
    let (mut c, _) = picker(PickerOptions::new().with_value("#808080"));
    c.geometry_mut().viewport_width = 800.0;
    open_picker(&mut c);
    assert_eq!(c.offset_length(), 230.0);
    let value = c.value().to_string();

    c.geometry_mut().viewport_width = 1280.0;
    c.dispatch(UiEvent::Resize);
    assert_eq!(c.offset_length(), 300.0);
    assert_eq!(c.value(), value);
}

#[test]
fn menu_roving_and_activation() {
    let (mut c, changes) = picker(PickerOptions::new().with_presets(ColorPresets::default()));
    c.toggle_menu();
    run_all(&mut c);
    assert_eq!(c.presets().len(), 120);

    assert_eq!(
        c.menu_key(MenuList::Presets, 12, Key::ArrowUp),
        Some(MenuAction::Focus(2))
    );
    assert_eq!(
        c.take_focus_request(),
        Some(FocusTarget::MenuOption {
            list: MenuList::Presets,
            index: 2,
        })
    );

    c.geometry_mut().columns = Some(5);
    assert_eq!(
        c.menu_key(MenuList::Presets, 12, Key::ArrowUp),
        Some(MenuAction::Focus(7))
    );
    assert_eq!(c.menu_key(MenuList::Presets, 2, Key::ArrowUp), None);

    assert_eq!(
        c.menu_key(MenuList::Presets, 3, Key::Enter),
        Some(MenuAction::Activate(3))
    );
    let preset = c.presets()[3];
    assert!(c.is_current(&preset));
    assert_eq!(changes.borrow().len(), 1);
    assert!(c.is_shown(Surface::Menu));
}

#[test]
fn format_switch_rewrites_value() {
    let (mut c, changes) = picker(PickerOptions::new().with_value("red"));
    c.set_format(Format::Hex);
    assert_eq!(c.value(), "#ff0000");
    c.set_format(Format::Hsl);
    assert_eq!(c.value(), "hsl(0, 100%, 50%)");
    assert_eq!(changes.borrow().len(), 2);
    assert_eq!(c.form_summary(), "HSL: 0° 100% 50%");
}
