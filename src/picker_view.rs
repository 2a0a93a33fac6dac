//! Floem view tree around a [`PickerController`].
//!
//! The controller lives in an `Rc<RefCell<..>>` shared by every handler; each
//! mutation goes through [`PickerCx::update`], which publishes a fresh
//! [`Snapshot`] to a signal, arms timers for deferred work, moves focus and
//! delivers change notifications once the controller borrow is released.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;

use floem::action::exec_after;
use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key as LogicalKey, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith, create_effect};
use floem::text::FONT_SYSTEM;
use floem::{View, ViewId};

use crate::color::{CssColor, Format};
use crate::constants;
use crate::control_surface::{SurfacePointer, control_surface};
use crate::controller::{Deferred, PickerController, Snapshot};
use crate::dropdown::{Placement, Surface};
use crate::events::{FocusTarget, FocusTracker, Key, MenuList, UiEvent};
use crate::geometry::{ControlKind, Element, Geometry};
use crate::ids::{IdGenerator, UuidIds};
use crate::inputs::form_row;
use crate::menu::{menu_dropdown, menu_toggle};
use crate::options::PickerOptions;
use crate::view_geometry::ViewGeometry;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Viewport assumed until the host reports the window size.
const DEFAULT_VIEWPORT: (f64, f64) = (1280.0, 800.0);

type ChangeHandler = Box<dyn FnMut(&str)>;

pub(crate) fn paint_color(color: &CssColor) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::rgba8(r, g, b, (color.a() * 255.0).round() as u8)
}

/// Map a Floem key event to the keys the controller understands.
pub(crate) fn key_of(event: &Event) -> Option<Key> {
    let logical = match event {
        Event::KeyDown(ke) | Event::KeyUp(ke) => &ke.key.logical_key,
        _ => return None,
    };
    Some(match logical {
        LogicalKey::Named(NamedKey::Enter) => Key::Enter,
        LogicalKey::Named(NamedKey::Escape) => Key::Escape,
        LogicalKey::Named(NamedKey::Space) => Key::Space,
        LogicalKey::Named(NamedKey::ArrowUp) => Key::ArrowUp,
        LogicalKey::Named(NamedKey::ArrowDown) => Key::ArrowDown,
        LogicalKey::Named(NamedKey::ArrowLeft) => Key::ArrowLeft,
        LogicalKey::Named(NamedKey::ArrowRight) => Key::ArrowRight,
        LogicalKey::Named(NamedKey::Tab) => Key::Tab,
        LogicalKey::Character(c) if c.as_str() == " " => Key::Space,
        _ => Key::Other,
    })
}

/// View ids the controller may ask to focus.
#[derive(Default)]
struct FocusIds {
    trigger: Option<ViewId>,
    input: Option<ViewId>,
    knobs: [Option<ViewId>; 3],
    menu_toggle: Option<ViewId>,
    presets: Vec<ViewId>,
    keywords: Vec<ViewId>,
}

fn knob_slot(kind: ControlKind) -> usize {
    match kind {
        ControlKind::Plane => 0,
        ControlKind::Hue => 1,
        ControlKind::Alpha => 2,
    }
}

impl FocusIds {
    fn get(&self, target: FocusTarget) -> Option<ViewId> {
        match target {
            FocusTarget::Trigger => self.trigger,
            FocusTarget::Input => self.input,
            FocusTarget::Knob(kind) => self.knobs[knob_slot(kind)],
            FocusTarget::MenuToggle => self.menu_toggle,
            FocusTarget::MenuOption { list, index } => match list {
                MenuList::Presets => self.presets.get(index).copied(),
                MenuList::Keywords => self.keywords.get(index).copied(),
            },
        }
    }
}

/// Shared handle on one picker's controller, passed to every sub-view.
#[derive(Clone)]
pub(crate) struct PickerCx {
    controller: Rc<RefCell<PickerController<ViewGeometry>>>,
    pub(crate) snapshot: RwSignal<Snapshot>,
    changes: Rc<RefCell<Vec<String>>>,
    on_change: Rc<RefCell<Option<ChangeHandler>>>,
    focus: Rc<RefCell<FocusIds>>,
    tracker: Rc<RefCell<FocusTracker>>,
}

impl PickerCx {
    fn new(options: PickerOptions, ids: &dyn IdGenerator) -> Self {
        let geometry = ViewGeometry::new(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1);
        let mut controller = PickerController::new(options, geometry, ids);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let queue = changes.clone();
        controller.set_on_change(move |value| queue.borrow_mut().push(value.to_string()));
        let snapshot = RwSignal::new(controller.snapshot());
        Self {
            controller: Rc::new(RefCell::new(controller)),
            snapshot,
            changes,
            on_change: Rc::new(RefCell::new(None)),
            focus: Rc::new(RefCell::new(FocusIds::default())),
            tracker: Rc::new(RefCell::new(FocusTracker::default())),
        }
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&PickerController<ViewGeometry>) -> R) -> R {
        f(&self.controller.borrow())
    }

    /// Mutate the controller, then publish everything it produced.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut PickerController<ViewGeometry>) -> R) -> R {
        let (result, scheduled, focus, snapshot) = {
            let mut controller = self.controller.borrow_mut();
            let result = f(&mut controller);
            (
                result,
                controller.take_scheduled(),
                controller.take_focus_request(),
                controller.snapshot(),
            )
        };

        if !self.snapshot.with_untracked(|current| *current == snapshot) {
            self.snapshot.set(snapshot);
        }
        for item in scheduled {
            let cx = self.clone();
            exec_after(item.delay, move |_| cx.run_task(item.task));
        }
        if let Some(target) = focus {
            match self.focus.borrow().get(target) {
                Some(id) => id.request_focus(),
                None => log::trace!("no view registered for {target:?}"),
            }
        }
        self.deliver_changes();
        result
    }

    fn run_task(&self, task: Deferred) {
        self.update(|c| c.run_deferred(task));
    }

    /// Layout bookkeeping only; nothing visible changes.
    pub(crate) fn with_geometry(&self, f: impl FnOnce(&mut ViewGeometry)) {
        f(self.controller.borrow_mut().geometry_mut());
    }

    fn deliver_changes(&self) {
        let values: Vec<String> = self.changes.borrow_mut().drain(..).collect();
        if values.is_empty() {
            return;
        }
        // Taken out so the handler may call back into the picker.
        let Some(mut handler) = self.on_change.borrow_mut().take() else {
            return;
        };
        for value in &values {
            handler(value);
        }
        let mut slot = self.on_change.borrow_mut();
        if slot.is_none() {
            *slot = Some(handler);
        }
    }

    pub(crate) fn register(&self, target: FocusTarget, id: ViewId) {
        let mut focus = self.focus.borrow_mut();
        match target {
            FocusTarget::Trigger => focus.trigger = Some(id),
            FocusTarget::Input => focus.input = Some(id),
            FocusTarget::Knob(kind) => focus.knobs[knob_slot(kind)] = Some(id),
            FocusTarget::MenuToggle => focus.menu_toggle = Some(id),
            FocusTarget::MenuOption { list, index } => {
                let ids = match list {
                    MenuList::Presets => &mut focus.presets,
                    MenuList::Keywords => &mut focus.keywords,
                };
                if ids.len() <= index {
                    ids.resize(index + 1, id);
                }
                ids[index] = id;
            }
        }
    }

    pub(crate) fn focus_gained(&self) {
        self.tracker.borrow_mut().focus_gained();
    }

    /// Decide where focus went once the next focus (if any) has landed.
    pub(crate) fn focus_lost(&self) {
        let ticket = self.tracker.borrow().focus_lost();
        let cx = self.clone();
        exec_after(Duration::ZERO, move |_| {
            let destination = cx.tracker.borrow().destination(ticket);
            cx.update(|c| c.focus_out(destination));
        });
    }

    pub(crate) fn pointer_down_at(&self, inside: bool) {
        self.tracker.borrow_mut().pointer_down(inside);
    }

    pub(crate) fn text_press(&self) {
        self.tracker.borrow_mut().text_press();
    }

    /// Whether a window point lies on the widget, including the open dropdown.
    fn hit_test(&self, x: f64, y: f64) -> bool {
        self.read(|c| {
            let geometry = c.geometry();
            geometry.root_contains(x, y)
                || c.current_surface()
                    .and_then(|surface| geometry.measure(surface.element()))
                    .is_some_and(|bounds| bounds.contains(x, y))
        })
    }

    fn pointer_up_at(&self, inside_root: bool) -> bool {
        let event = self.tracker.borrow_mut().pointer_up(inside_root);
        self.update(|c| c.dispatch(event))
    }
}

/// Adds focus bookkeeping to a focusable part of the widget.
pub(crate) fn track_focus(view: impl IntoView + 'static, cx: PickerCx) -> impl IntoView {
    let gained = cx.clone();
    let lost = cx;
    view.on_event_cont(EventListener::FocusGained, move |_| gained.focus_gained())
        .on_event_cont(EventListener::FocusLost, move |_| lost.focus_lost())
}

/// Host-side access to a mounted picker: its value, plus the window events
/// only the host sees.
#[derive(Clone)]
pub struct PickerHandle {
    cx: PickerCx,
}

impl PickerHandle {
    /// The committed color string.
    pub fn value(&self) -> String {
        self.cx.read(|c| c.value().to_string())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.cx.snapshot.get_untracked()
    }

    /// Pointer released anywhere in the window, in window coordinates.
    pub fn pointer_up(&self, x: f64, y: f64) -> bool {
        let inside = self.cx.hit_test(x, y);
        self.cx.pointer_up_at(inside)
    }

    /// Pointer pressed anywhere in the window, in window coordinates.
    pub fn pointer_down(&self, x: f64, y: f64) {
        let inside = self.cx.hit_test(x, y);
        self.cx.pointer_down_at(inside);
    }

    /// A scroll container holding the picker moved.
    pub fn scrolled(&self) -> bool {
        self.cx.update(|c| c.dispatch(UiEvent::Scroll))
    }

    pub fn resized(&self, width: f64, height: f64) -> bool {
        self.cx.update(|c| {
            c.geometry_mut().set_viewport(width, height);
            c.dispatch(UiEvent::Resize)
        })
    }

    pub fn key_up(&self, key: Key) -> bool {
        self.cx.update(|c| c.dispatch(UiEvent::KeyUp(key)))
    }

    pub fn set_format(&self, format: Format) {
        self.cx.update(|c| c.set_format(format));
    }

    pub fn close(&self) {
        self.cx.update(|c| c.close_surface());
    }

    pub fn unmount(&self) {
        self.cx.update(|c| c.unmount());
    }
}

/// Builder for a picker view.
pub struct ColorPicker {
    cx: PickerCx,
}

impl ColorPicker {
    pub fn new(options: PickerOptions) -> Self {
        Self::with_ids(options, &UuidIds)
    }

    pub fn with_ids(options: PickerOptions, ids: &dyn IdGenerator) -> Self {
        Self {
            cx: PickerCx::new(options, ids),
        }
    }

    /// Called with the new value whenever the committed color changes.
    pub fn on_change(self, handler: impl FnMut(&str) + 'static) -> Self {
        *self.cx.on_change.borrow_mut() = Some(Box::new(handler));
        self
    }

    pub fn viewport(self, width: f64, height: f64) -> Self {
        self.cx.update(|c| {
            c.geometry_mut().set_viewport(width, height);
            c.dispatch(UiEvent::Resize)
        });
        self
    }

    pub fn handle(&self) -> PickerHandle {
        PickerHandle {
            cx: self.cx.clone(),
        }
    }

    pub fn build(self) -> impl IntoView {
        LOAD_LUCIDE_FONT.call_once(|| {
            FONT_SYSTEM
                .lock()
                .db_mut()
                .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
        });
        picker_root(self.cx)
    }
}

/// A picker with default ids and no change handler.
pub fn color_picker(options: PickerOptions) -> impl IntoView {
    ColorPicker::new(options).build()
}

fn theme_colors(snapshot: &Snapshot) -> (Color, Color) {
    let light = snapshot.root_class.split(' ').any(|c| c == "light");
    if light {
        (constants::LIGHT_BG, constants::LIGHT_FG)
    } else {
        (constants::DARK_BG, constants::DARK_FG)
    }
}

fn trigger(cx: PickerCx) -> impl IntoView {
    let snapshot = cx.snapshot;
    let view = container(empty().style(move |s| {
        let color = snapshot.with(|snap| paint_color(&snap.color));
        s.size_full().border_radius(constants::RADIUS).background(color)
    }))
    .style(|s| {
        s.size(constants::PREVIEW_HEIGHT, constants::PREVIEW_HEIGHT)
            .padding(3.0)
            .border(1.0)
            .border_color(constants::BORDER)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .keyboard_navigable();
    cx.register(FocusTarget::Trigger, view.id());

    let click_cx = cx.clone();
    let key_cx = cx.clone();
    track_focus(view, cx)
        .on_click_stop(move |_| {
            click_cx.update(|c| c.show_picker());
        })
        .on_event(EventListener::KeyUp, move |e| match key_of(e) {
            Some(Key::Enter | Key::Space) => {
                key_cx.update(|c| c.show_picker());
                EventPropagation::Stop
            }
            _ => EventPropagation::Continue,
        })
}

fn preview_input(cx: PickerCx) -> impl IntoView {
    let snapshot = cx.snapshot;
    let buffer = RwSignal::new(snapshot.with_untracked(|s| s.input_value.clone()));

    create_effect(move |_| {
        let committed = snapshot.with(|s| s.input_value.clone());
        if buffer.with_untracked(|b| *b != committed) {
            buffer.set(committed);
        }
    });
    let typed_cx = cx.clone();
    create_effect(move |_| {
        let text = buffer.get();
        let stale = typed_cx.read(|c| c.input_value() != text);
        if stale {
            typed_cx.update(|c| c.input_changed(text));
        }
    });

    let view = text_input(buffer)
        .placeholder(snapshot.with_untracked(|s| s.placeholder.clone()))
        .style(move |s| {
            let (bg, fg) = snapshot.with(|snap| {
                let (r, g, b) = snap.color.to_rgb8();
                let fg = if snap.is_dark_text {
                    constants::LIGHT_FG
                } else {
                    constants::DARK_FG
                };
                (Color::rgba8(r, g, b, 255), fg)
            });
            s.width(constants::PREVIEW_WIDTH)
                .height(constants::PREVIEW_HEIGHT)
                .padding_horiz(constants::PADDING)
                .font_size(12.0)
                .font_family("monospace".to_string())
                .background(bg)
                .color(fg)
                .border(1.0)
                .border_color(constants::BORDER)
                .border_radius(constants::RADIUS)
        });
    cx.register(FocusTarget::Input, view.id());

    let open_cx = cx.clone();
    let key_cx = cx.clone();
    let press_cx = cx.clone();
    track_focus(view, cx)
        .on_event_cont(EventListener::PointerDown, move |_| press_cx.text_press())
        .on_event_cont(EventListener::FocusGained, move |_| {
            open_cx.update(|c| c.show_picker());
        })
        .on_event_cont(EventListener::KeyUp, move |e| {
            if let Some(key @ (Key::Enter | Key::Escape)) = key_of(e) {
                key_cx.update(|c| c.input_key(key));
            }
        })
}

fn knob(cx: PickerCx, kind: ControlKind) -> impl IntoView {
    let pointer_cx = cx.clone();
    let view = control_surface(kind, cx.snapshot, move |pointer| {
        let origin = pointer_cx.read(|c| c.geometry().measure(Element::Control(kind)));
        let (left, top) = origin.map_or((0.0, 0.0), |b| (b.left, b.top));
        match pointer {
            SurfacePointer::Down { x, y, primary } => {
                pointer_cx.pointer_down_at(true);
                pointer_cx.update(|c| c.pointer_down(kind, left + x, top + y, primary));
            }
            SurfacePointer::Move { x, y } => {
                pointer_cx.update(|c| {
                    c.dispatch(UiEvent::PointerMove {
                        x: left + x,
                        y: top + y,
                    })
                });
            }
            SurfacePointer::Up => {
                pointer_cx.pointer_up_at(true);
            }
        }
    })
    .keyboard_navigable();
    cx.register(FocusTarget::Knob(kind), view.id());

    let move_cx = cx.clone();
    let resize_cx = cx.clone();
    let key_cx = cx.clone();
    track_focus(view, cx)
        .on_move(move |p| move_cx.with_geometry(|g| g.set_origin(Element::Control(kind), p.x, p.y)))
        .on_resize(move |r| {
            resize_cx.with_geometry(|g| g.set_size(Element::Control(kind), r.width(), r.height()))
        })
        .on_event(EventListener::KeyDown, move |e| {
            let Some(key) = key_of(e) else {
                return EventPropagation::Continue;
            };
            if key_cx.update(|c| c.knob_key(kind, key)) {
                EventPropagation::Stop
            } else {
                EventPropagation::Continue
            }
        })
}

/// Offset of a dropdown from the top of the input row.
pub(crate) fn dropdown_top(cx: &PickerCx, surface: Surface, placement: Placement) -> f32 {
    match placement {
        Placement::Top => {
            let height = cx
                .read(|c| c.geometry().measure(surface.element()))
                .map_or(0.0, |b| b.height);
            -(height as f32 + 4.0)
        }
        Placement::Bottom | Placement::None => constants::PREVIEW_HEIGHT + 4.0,
    }
}

/// Shared frame of both dropdowns.
pub(crate) fn dropdown_frame(
    cx: PickerCx,
    surface: Surface,
    view: impl IntoView + 'static,
) -> impl IntoView {
    let snapshot = cx.snapshot;
    let style_cx = cx.clone();
    let move_cx = cx.clone();
    let resize_cx = cx;
    view.style(move |s| {
        let (laid_out, placement) = snapshot.with(|snap| (snap.is_laid_out(surface), snap.placement));
        let (bg, fg) = snapshot.with(theme_colors);
        s.absolute()
            .inset_left(0.0)
            .inset_top(dropdown_top(&style_cx, surface, placement))
            .z_index(10)
            .padding(constants::PADDING)
            .gap(constants::GAP)
            .background(bg)
            .color(fg)
            .border(1.0)
            .border_color(constants::BORDER)
            .border_radius(constants::RADIUS)
            .apply_if(!laid_out, |s| s.hide())
    })
    .on_move(move |p| move_cx.with_geometry(|g| g.set_origin(surface.element(), p.x, p.y)))
    .on_resize(move |r| {
        resize_cx.with_geometry(|g| g.set_size(surface.element(), r.width(), r.height()))
    })
}

fn picker_dropdown(cx: PickerCx) -> impl IntoView {
    let snapshot = cx.snapshot;
    let forms_cx = cx.clone();
    let body = v_stack((
        h_stack((
            knob(cx.clone(), ControlKind::Plane),
            knob(cx.clone(), ControlKind::Hue),
            knob(cx.clone(), ControlKind::Alpha),
        ))
        .style(|s| s.gap(constants::GAP)),
        dyn_container(
            move || snapshot.with(|s| s.format),
            move |_| form_row(forms_cx.clone()),
        ),
        label(move || {
            snapshot.with(|s| {
                s.aria(ControlKind::Hue)
                    .description
                    .clone()
                    .unwrap_or_default()
            })
        })
        .style(|s| s.font_size(constants::LABEL_FONT).color(constants::MUTED)),
    ));
    dropdown_frame(cx, Surface::Picker, body)
}

fn picker_root(cx: PickerCx) -> impl IntoView {
    let snapshot = cx.snapshot;
    let has_menu = cx.read(|c| c.has_menu());

    let input_row = h_stack((
        trigger(cx.clone()),
        preview_input(cx.clone()),
        menu_toggle(cx.clone()).style(move |s| s.apply_if(!has_menu, |s| s.hide())),
    ))
    .style(|s| s.gap(4.0).items_center());

    let input_move = cx.clone();
    let input_resize = cx.clone();
    let input_row = input_row
        .on_move(move |p| input_move.with_geometry(|g| g.set_origin(Element::Input, p.x, p.y)))
        .on_resize(move |r| {
            input_resize.with_geometry(|g| g.set_size(Element::Input, r.width(), r.height()))
        });

    let root = stack((input_row, picker_dropdown(cx.clone()), menu_dropdown(cx.clone())));

    let down_cx = cx.clone();
    let up_cx = cx.clone();
    let key_cx = cx.clone();
    let tab_cx = cx.clone();
    let move_cx = cx.clone();
    let resize_cx = cx.clone();
    let window_cx = cx.clone();
    let cleanup_cx = cx.clone();
    root.style(move |s| {
        let (_, fg) = snapshot.with(theme_colors);
        s.flex_col().color(fg).font_size(12.0)
    })
    .on_move(move |p| move_cx.with_geometry(|g| g.set_root_origin(p.x, p.y)))
    .on_resize(move |r| resize_cx.with_geometry(|g| g.set_root_size(r.width(), r.height())))
    .on_event_cont(EventListener::PointerDown, move |_| down_cx.pointer_down_at(true))
    .on_event_cont(EventListener::PointerUp, move |_| {
        up_cx.pointer_up_at(true);
    })
    .on_event_cont(EventListener::KeyDown, move |e| {
        if key_of(e) == Some(Key::Tab) {
            tab_cx.tracker.borrow_mut().tab();
        }
    })
    .on_event_cont(EventListener::KeyUp, move |e| {
        if let Some(key) = key_of(e) {
            key_cx.update(|c| c.dispatch(UiEvent::KeyUp(key)));
        }
    })
    .on_event_cont(EventListener::WindowResized, move |e| {
        if let Event::WindowResized(size) = e {
            window_cx.update(|c| {
                c.geometry_mut().set_viewport(size.width, size.height);
                c.dispatch(UiEvent::Resize)
            });
        }
    })
    .on_cleanup(move || {
        cleanup_cx.update(|c| c.unmount());
    })
}
