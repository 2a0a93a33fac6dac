//! `PickerController`, the toolkit-independent core of the widget.
//!
//! It owns the [`PickerState`], the [`Dropdown`] and the global
//! [`ListenerSet`], and turns pointer, keyboard, focus and text events into
//! state transitions. Layout is read through a [`Geometry`]; timers are
//! handed back to the host as [`Scheduled`] tasks.

use std::time::Duration;

use crate::appearance::appearance;
use crate::color::{CssColor, Format};
use crate::dropdown::{Dropdown, Phase, Placement, Surface, Ticket};
use crate::events::{
    FocusDestination, FocusTarget, Key, ListenerSet, MenuAction, MenuList, UiEvent, rove,
};
use crate::forms::{self, Channel, FormField};
use crate::geometry::{ControlKind, Element, Geometry};
use crate::ids::IdGenerator;
use crate::locale::LanguagePack;
use crate::math::round_part;
use crate::options::{ColorKeyword, DEFAULT_VALUE, PickerOptions, Theme};
use crate::palette::{ColorPalette, PresetsLayout};
use crate::position::ControlPositions;
use crate::store::PickerState;

/// Work the host must run later through [`PickerController::run_deferred`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Show a surface once it has been laid out.
    Reveal(Ticket),
    /// Finish hiding a surface after its transition.
    Conceal(Ticket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub task: Deferred,
    pub delay: Duration,
}

/// Accessible slider data for one knob.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobAria {
    pub label: String,
    pub value_min: f64,
    pub value_max: f64,
    pub value_now: f64,
    pub value_text: String,
    pub description: Option<String>,
}

/// Read-only view of everything the widget renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub id: String,
    pub value: String,
    pub input_value: String,
    pub color: CssColor,
    pub format: Format,
    pub positions: ControlPositions,
    pub offset_length: f64,
    pub open: Option<Surface>,
    pub phase: Phase,
    pub placement: Placement,
    pub picker_shown: bool,
    pub menu_shown: bool,
    pub dragging: Option<ControlKind>,
    pub placeholder: String,
    pub trigger_label: String,
    pub root_class: String,
    pub picker_class: String,
    pub menu_class: String,
    pub input_tab_index: i32,
    pub menu_toggle_tab_index: i32,
    /// In [`ControlKind::ALL`] order.
    pub knob_aria: [KnobAria; 3],
    pub is_dark_text: bool,
}

impl Snapshot {
    pub fn aria(&self, kind: ControlKind) -> &KnobAria {
        match kind {
            ControlKind::Plane => &self.knob_aria[0],
            ControlKind::Hue => &self.knob_aria[1],
            ControlKind::Alpha => &self.knob_aria[2],
        }
    }

    /// Whether `surface` takes part in layout: open and not on its way out.
    pub fn is_laid_out(&self, surface: Surface) -> bool {
        self.open == Some(surface) && self.phase != Phase::Closing
    }
}

type ChangeHandler = Box<dyn FnMut(&str)>;

pub struct PickerController<G: Geometry> {
    id: String,
    options: PickerOptions,
    locale: LanguagePack,
    state: PickerState,
    dropdown: Dropdown,
    listeners: ListenerSet,
    palette: Vec<CssColor>,
    scheduled: Vec<Scheduled>,
    focus_request: Option<FocusTarget>,
    geometry: G,
    on_change: Option<ChangeHandler>,
}

/// Map non-color keywords to something the picker can show.
fn concrete_color_text(text: &str) -> &str {
    if !CssColor::is_non_color(text) {
        text
    } else if text.eq_ignore_ascii_case("transparent") {
        "rgba(0,0,0,0)"
    } else {
        "rgb(0,0,0)"
    }
}

impl<G: Geometry> PickerController<G> {
    pub fn new(options: PickerOptions, geometry: G, ids: &dyn IdGenerator) -> Self {
        let id = match options.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => ids.next_id(),
        };
        let format = options.format;
        let initial = options.value.as_deref().unwrap_or(DEFAULT_VALUE);
        let color = CssColor::parse(concrete_color_text(initial.trim()), format).unwrap_or_else(|err| {
            log::warn!("invalid initial value {initial:?} ({err}), using {DEFAULT_VALUE}");
            CssColor::new(DEFAULT_VALUE, format)
        });
        let offset_length = options.layout.offset_length(geometry.viewport_width());
        let locale = LanguagePack::resolve(options.lang, options.locale.as_ref());
        let palette = Self::build_palette(&options, format);
        log::debug!("picker {id} created with {color}");

        Self {
            id,
            locale,
            state: PickerState::new(color, offset_length),
            dropdown: Dropdown::default(),
            listeners: ListenerSet::default(),
            palette,
            scheduled: Vec::new(),
            focus_request: None,
            geometry,
            on_change: None,
            options,
        }
    }

    fn build_palette(options: &PickerOptions, format: Format) -> Vec<CssColor> {
        options
            .color_presets
            .as_ref()
            .map(|presets| ColorPalette::from_presets(presets, format).colors)
            .unwrap_or_default()
    }

    /// Called with the new committed value every time it changes.
    pub fn set_on_change(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn picker_id(&self) -> String {
        format!("{}-picker", self.id)
    }

    pub fn menu_id(&self) -> String {
        format!("{}-menu", self.id)
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn input_value(&self) -> &str {
        self.state.input_value()
    }

    pub fn color(&self) -> &CssColor {
        self.state.color()
    }

    pub fn format(&self) -> Format {
        self.state.format()
    }

    pub fn positions(&self) -> ControlPositions {
        self.state.positions()
    }

    pub fn offset_length(&self) -> f64 {
        self.state.offset_length()
    }

    pub fn phase(&self) -> Phase {
        self.dropdown.phase()
    }

    pub fn current_surface(&self) -> Option<Surface> {
        self.dropdown.open_surface()
    }

    pub fn placement(&self) -> Placement {
        self.dropdown.placement()
    }

    pub fn is_shown(&self, surface: Surface) -> bool {
        self.dropdown.is_shown(surface)
    }

    pub fn dragging(&self) -> Option<ControlKind> {
        self.state.drag()
    }

    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    pub fn locale(&self) -> &LanguagePack {
        &self.locale
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn has_menu(&self) -> bool {
        self.options.has_menu()
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Preset colors in the active format.
    pub fn presets(&self) -> &[CssColor] {
        &self.palette
    }

    pub fn presets_layout(&self) -> Option<PresetsLayout> {
        let presets = self.options.color_presets.as_ref()?;
        Some(PresetsLayout::new(self.palette.len(), presets.light_steps))
    }

    pub fn keywords(&self) -> &[ColorKeyword] {
        self.options.color_keywords.as_deref().unwrap_or_default()
    }

    /// Whether `color` serializes to the committed value.
    pub fn is_current(&self, color: &CssColor) -> bool {
        color.with_format(self.format()).to_string() == self.value()
    }

    /// Whether the keyword at `index` resolves to the committed value.
    pub fn is_current_keyword(&self, index: usize) -> bool {
        self.keywords()
            .get(index)
            .and_then(|k| CssColor::parse(concrete_color_text(k.value()), self.format()).ok())
            .is_some_and(|c| c.to_string() == self.value())
    }

    /// Pending deferred tasks, oldest first.
    pub fn take_scheduled(&mut self) -> Vec<Scheduled> {
        std::mem::take(&mut self.scheduled)
    }

    /// Element the controller wants focused, if any.
    pub fn take_focus_request(&mut self) -> Option<FocusTarget> {
        self.focus_request.take()
    }

    fn schedule(&mut self, task: Deferred, delay: Duration) {
        self.scheduled.push(Scheduled { task, delay });
    }

    fn notify(&mut self, changed: bool) {
        if !changed {
            return;
        }
        let value = self.state.value().to_string();
        if let Some(handler) = self.on_change.as_mut() {
            handler(&value);
        }
    }

    fn commit(&mut self, color: CssColor) {
        let changed = self.state.commit_color(color);
        self.notify(changed);
    }

    fn commit_positions(&mut self, positions: ControlPositions) {
        let changed = self.state.commit_positions(positions);
        self.notify(changed);
    }

    fn sync_offset_length(&mut self) {
        let length = self.options.layout.offset_length(self.geometry.viewport_width());
        if self.state.set_offset_length(length) {
            log::debug!("offset length now {length}");
        }
    }

    // Surfaces

    /// Begin opening `surface`. Attaches global listeners and schedules the
    /// reveal one frame later.
    pub fn open_surface(&mut self, surface: Surface) {
        if surface == Surface::Menu && !self.has_menu() {
            return;
        }
        let Some(ticket) = self.dropdown.open(surface) else {
            return;
        };
        if self.listeners.attach_all() {
            log::debug!("picker {} attached global listeners", self.id);
        }
        if surface == Surface::Picker {
            self.sync_offset_length();
        }
        let delay = self.options.layout.frame_delay();
        self.schedule(Deferred::Reveal(ticket), delay);
    }

    /// Start closing whatever is open, dropping the uncommitted text.
    pub fn close_surface(&mut self) {
        self.state.revert_input();
        let (ticket, closed_now) = self.dropdown.close();
        if let Some(ticket) = ticket {
            let delay = self.options.layout.transition();
            self.schedule(Deferred::Conceal(ticket), delay);
        }
        if closed_now {
            self.finish_close();
        }
    }

    fn finish_close(&mut self) {
        if self.listeners.detach_all() {
            log::debug!("picker {} detached global listeners", self.id);
        }
        self.state.set_drag(None);
    }

    pub fn show_picker(&mut self) {
        self.open_surface(Surface::Picker);
    }

    pub fn toggle_menu(&mut self) {
        if self.dropdown.open_surface() == Some(Surface::Menu)
            && self.dropdown.phase() != Phase::Closing
        {
            self.close_surface();
        } else {
            self.open_surface(Surface::Menu);
        }
    }

    /// Run a task from [`take_scheduled`](Self::take_scheduled). Stale tasks
    /// are ignored; returns whether anything changed.
    pub fn run_deferred(&mut self, task: Deferred) -> bool {
        match task {
            Deferred::Reveal(ticket) => {
                if !self.dropdown.reveal(ticket, &self.geometry) {
                    return false;
                }
                if ticket.surface == Surface::Picker {
                    self.focus_request = Some(FocusTarget::Input);
                }
                true
            }
            Deferred::Conceal(ticket) => {
                if !self.dropdown.conceal(ticket) {
                    return false;
                }
                self.finish_close();
                self.focus_request = Some(FocusTarget::Trigger);
                true
            }
        }
    }

    /// Tear down: close without transition and drop every listener and task.
    pub fn unmount(&mut self) {
        self.dropdown.force_closed();
        self.scheduled.clear();
        self.focus_request = None;
        self.finish_close();
    }

    // Text input

    /// The text field changed; only the buffer is touched.
    pub fn input_changed(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    /// Key released in the text field. Enter commits a parseable buffer,
    /// Escape restores the committed value. Returns whether a color was committed.
    pub fn input_key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => self.commit_input(),
            Key::Escape => {
                self.state.revert_input();
                false
            }
            _ => false,
        }
    }

    fn commit_input(&mut self) -> bool {
        let text = self.state.input_value().trim().to_string();
        if text.is_empty() {
            return false;
        }
        match CssColor::parse(concrete_color_text(&text), self.format()) {
            Ok(color) => {
                self.commit(color);
                true
            }
            Err(err) => {
                log::debug!("refusing to commit {text:?}: {err}");
                false
            }
        }
    }

    /// Focus left an element of the widget.
    pub fn focus_out(&mut self, destination: FocusDestination) {
        if destination == FocusDestination::Outside && self.dropdown.open_surface().is_some() {
            self.close_surface();
        }
    }

    // Pointer and knobs

    /// Primary button pressed on a control at window position `(x, y)`.
    /// Starts a drag and moves the knob there. Returns whether it was handled.
    pub fn pointer_down(&mut self, kind: ControlKind, x: f64, y: f64, primary: bool) -> bool {
        if !primary {
            return false;
        }
        let Some(bounds) = self.geometry.measure(Element::Control(kind)) else {
            log::trace!("{kind:?} not laid out, ignoring pointer down");
            return false;
        };
        self.state.set_drag(Some(kind));
        self.move_knob(kind, x - bounds.left, y - bounds.top);
        true
    }

    fn move_knob(&mut self, kind: ControlKind, offset_x: f64, offset_y: f64) {
        let length = self.state.offset_length();
        let positions = self.state.positions();
        let positions = match kind {
            ControlKind::Plane => positions.with_plane(offset_x, offset_y, length),
            ControlKind::Hue => positions.with_hue(offset_y, length),
            ControlKind::Alpha => positions.with_alpha(offset_y, length),
        };
        log::trace!("{kind:?} -> ({offset_x}, {offset_y})");
        self.commit_positions(positions);
    }

    /// Arrow key on a focused knob. Returns whether the key was used.
    pub fn knob_key(&mut self, kind: ControlKind, key: Key) -> bool {
        let length = self.state.offset_length();
        let p = self.state.positions();
        let plane_step = length / 100.0;
        let strip_step = length / 360.0;
        let strip_delta = match key {
            Key::ArrowDown | Key::ArrowRight => strip_step,
            Key::ArrowUp | Key::ArrowLeft => -strip_step,
            _ => return false,
        };
        let positions = match (kind, key) {
            (ControlKind::Plane, Key::ArrowLeft) => p.with_plane(p.c1x - plane_step, p.c1y, length),
            (ControlKind::Plane, Key::ArrowRight) => p.with_plane(p.c1x + plane_step, p.c1y, length),
            (ControlKind::Plane, Key::ArrowUp) => p.with_plane(p.c1x, p.c1y - plane_step, length),
            (ControlKind::Plane, _) => p.with_plane(p.c1x, p.c1y + plane_step, length),
            (ControlKind::Hue, _) => p.with_hue(p.c2y + strip_delta, length),
            (ControlKind::Alpha, _) => p.with_alpha(p.c3y + strip_delta, length),
        };
        self.commit_positions(positions);
        true
    }

    /// Deliver a global event. Events whose listener is not attached are
    /// dropped; returns whether the event was routed.
    pub fn dispatch(&mut self, event: UiEvent) -> bool {
        if !self.listeners.is_attached(event.listener()) {
            log::trace!("no listener for {event:?}");
            return false;
        }
        match event {
            UiEvent::Scroll => self.dropdown.update_placement(&self.geometry),
            UiEvent::Resize => {
                self.sync_offset_length();
                self.dropdown.update_placement(&self.geometry);
            }
            UiEvent::KeyUp(Key::Escape) => {
                if self.dropdown.open_surface().is_some() {
                    self.close_surface();
                }
            }
            UiEvent::KeyUp(_) => {}
            UiEvent::PointerUp {
                inside_root,
                has_selection,
            } => {
                if self.state.drag().is_none() && !has_selection && !inside_root {
                    self.close_surface();
                }
                self.state.set_drag(None);
            }
            UiEvent::PointerMove { x, y } => {
                let Some(kind) = self.state.drag() else {
                    return true;
                };
                if let Some(bounds) = self.geometry.measure(Element::Control(kind)) {
                    self.move_knob(kind, x - bounds.left, y - bounds.top);
                }
            }
        }
        true
    }

    // Menu

    /// Arrow/Enter/Space on a menu option. Focus moves are requested through
    /// [`take_focus_request`](Self::take_focus_request); activation selects.
    pub fn menu_key(&mut self, list: MenuList, index: usize, key: Key) -> Option<MenuAction> {
        let (len, fallback_columns) = match list {
            MenuList::Presets => (
                self.palette.len(),
                self.options.color_presets.map_or(1, |p| p.light_steps),
            ),
            MenuList::Keywords => (self.keywords().len(), 1),
        };
        let columns = self.geometry.column_count().unwrap_or(fallback_columns);
        let action = rove(list, index, len, columns, key)?;
        match action {
            MenuAction::Focus(index) => {
                self.focus_request = Some(FocusTarget::MenuOption { list, index });
            }
            MenuAction::Activate(index) => {
                match list {
                    MenuList::Presets => self.select_preset(index),
                    MenuList::Keywords => self.select_keyword(index),
                };
            }
        }
        Some(action)
    }

    /// Commit the preset at `index`. Returns whether it exists.
    pub fn select_preset(&mut self, index: usize) -> bool {
        let Some(color) = self.palette.get(index).copied() else {
            return false;
        };
        self.commit(color);
        true
    }

    /// Commit the keyword at `index`. Returns whether it parsed.
    pub fn select_keyword(&mut self, index: usize) -> bool {
        let Some(text) = self.keywords().get(index).map(|k| k.value().to_string()) else {
            return false;
        };
        match CssColor::parse(concrete_color_text(&text), self.format()) {
            Ok(color) => {
                self.commit(color);
                true
            }
            Err(err) => {
                log::debug!("keyword {text:?} is not a color: {err}");
                false
            }
        }
    }

    // Format and forms

    pub fn set_format(&mut self, format: Format) {
        if format == self.format() {
            return;
        }
        self.palette = Self::build_palette(&self.options, format);
        let changed = self.state.set_format(format);
        self.notify(changed);
    }

    pub fn form_fields(&self) -> Vec<FormField> {
        forms::fields(self.color(), self.format(), &self.locale, &self.id)
    }

    /// Replace one channel of the active format. Returns whether it applied.
    pub fn set_channel(&mut self, channel: Channel, value: f64) -> bool {
        match forms::with_channel(self.color(), self.format(), channel, value) {
            Some(color) => {
                self.commit(color);
                true
            }
            None => false,
        }
    }

    /// Commit the hex text field. Returns whether it parsed.
    pub fn commit_hex(&mut self, text: &str) -> bool {
        match forms::parse_hex_field(text, self.format()) {
            Some(color) => {
                self.commit(color);
                true
            }
            None => {
                log::debug!("refusing hex {text:?}");
                false
            }
        }
    }

    pub fn form_summary(&self) -> String {
        forms::summary(self.color(), self.format(), &self.locale)
    }

    pub fn appearance(&self) -> &str {
        appearance(self.color(), self.format(), &self.locale)
    }

    // Derived outputs

    fn knob_aria(&self) -> [KnobAria; 3] {
        let locale = &self.locale;
        let length = self.state.offset_length();
        let positions = self.state.positions();
        let (_, s, v) = self.color().to_hsv();
        let saturation = round_part(s * 100.0);
        let lightness = round_part(v * 100.0);
        let (hue, alpha) = if length > 0.0 {
            (positions.c2y / length, 1.0 - positions.c3y / length)
        } else {
            (0.0, 1.0)
        };
        let hue = round_part(hue * 360.0);
        let alpha = round_part(alpha * 100.0);

        [
            KnobAria {
                label: format!("{} & {}", locale.lightness_label, locale.saturation_label),
                value_min: 0.0,
                value_max: 100.0,
                value_now: lightness,
                value_text: format!("{lightness}% & {saturation}%"),
                description: None,
            },
            KnobAria {
                label: locale.hue_label.clone(),
                value_min: 0.0,
                value_max: 360.0,
                value_now: hue,
                value_text: format!("{hue}°"),
                description: Some(format!(
                    "{}: {}. {}: {}.",
                    locale.value_label,
                    self.form_summary(),
                    locale.appearance_label,
                    self.appearance()
                )),
            },
            KnobAria {
                label: locale.alpha_label.clone(),
                value_min: 0.0,
                value_max: 100.0,
                value_now: alpha,
                value_text: format!("{alpha}%"),
                description: None,
            },
        ]
    }

    fn surface_class(&self, surface: Surface) -> String {
        let mut class = String::new();
        let placement = self.dropdown.placement().as_class();
        if self.dropdown.open_surface() == Some(surface) && !placement.is_empty() {
            class.push(' ');
            class.push_str(placement);
        }
        if self.dropdown.is_shown(surface) {
            class.push_str(" show");
        }
        class
    }

    pub fn is_dark_text(&self) -> bool {
        let color = self.color();
        color.is_dark() && color.a() > 0.33
    }

    pub fn snapshot(&self) -> Snapshot {
        let format = self.format();
        let open = self.dropdown.open_surface();
        let picker_shown = self.dropdown.is_shown(Surface::Picker);
        let menu_shown = self.dropdown.is_shown(Surface::Menu);
        let is_dark_text = self.is_dark_text();

        let mut classes = vec!["color-picker"];
        if let Some(extra) = &self.options.class_name {
            classes.extend(extra.split_whitespace());
        }
        classes.push(if is_dark_text { "txt-dark" } else { "txt-light" });
        if self.options.theme == Theme::Light {
            classes.push("light");
        }
        if open.is_some() {
            classes.push("open");
        }

        let placeholder = match &self.options.placeholder {
            Some(text) => text.clone(),
            None => self.locale.placeholder_for(&format.label()),
        };

        Snapshot {
            id: self.id.clone(),
            value: self.value().to_string(),
            input_value: self.input_value().to_string(),
            color: *self.color(),
            format,
            positions: self.positions(),
            offset_length: self.offset_length(),
            open,
            phase: self.dropdown.phase(),
            placement: self.dropdown.placement(),
            picker_shown,
            menu_shown,
            dragging: self.state.drag(),
            placeholder,
            trigger_label: format!(
                "{}. {}: {}",
                self.locale.picker_label,
                self.locale.format_label,
                format.label()
            ),
            root_class: classes.join(" "),
            picker_class: self.surface_class(Surface::Picker),
            menu_class: self.surface_class(Surface::Menu),
            input_tab_index: if picker_shown { -1 } else { 0 },
            menu_toggle_tab_index: if picker_shown || menu_shown { 0 } else { -1 },
            knob_aria: self.knob_aria(),
            is_dark_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Bounds, StaticGeometry};
    use crate::ids::SequentialIds;

    fn controller(options: PickerOptions) -> PickerController<StaticGeometry> {
        let geometry = StaticGeometry::new(1280.0, 800.0)
            .with(Element::Input, Bounds::new(10.0, 100.0, 200.0, 30.0))
            .with(Element::PickerDropdown, Bounds::new(10.0, 130.0, 320.0, 300.0))
            .with(Element::Control(ControlKind::Plane), Bounds::new(20.0, 140.0, 300.0, 300.0))
            .with(Element::Control(ControlKind::Hue), Bounds::new(330.0, 140.0, 20.0, 300.0))
            .with(Element::Control(ControlKind::Alpha), Bounds::new(360.0, 140.0, 20.0, 300.0));
        PickerController::new(options, geometry, &SequentialIds::default())
    }

    fn run_all(c: &mut PickerController<StaticGeometry>) {
        for s in c.take_scheduled() {
            c.run_deferred(s.task);
        }
    }

    #[test]
    fn invalid_initial_value_falls_back() {
        let c = controller(PickerOptions::new().with_value("not a color"));
        assert_eq!(c.value(), "rgb(255, 0, 0)");
        assert_eq!(c.id(), "color-picker-1");
    }

    #[test]
    fn caller_id_wins() {
        let c = controller(PickerOptions::new().with_id("mine"));
        assert_eq!(c.id(), "mine");
        assert_eq!(c.picker_id(), "mine-picker");
        assert_eq!(c.menu_id(), "mine-menu");
    }

    #[test]
    fn non_color_keywords_on_enter() {
        let mut c = controller(PickerOptions::new());
        c.input_changed("transparent");
        assert!(c.input_key(Key::Enter));
        assert_eq!(c.value(), "rgba(0, 0, 0, 0)");
        c.input_changed("inherit");
        assert!(c.input_key(Key::Enter));
        assert_eq!(c.value(), "rgb(0, 0, 0)");
    }

    #[test]
    fn knob_keys_step() {
        let mut c = controller(PickerOptions::new().with_value("#808080"));
        let before = c.positions();
        assert!(c.knob_key(ControlKind::Plane, Key::ArrowRight));
        assert!((c.positions().c1x - before.c1x - 3.0).abs() < 1e-9);
        assert!(c.knob_key(ControlKind::Hue, Key::ArrowDown));
        assert!((c.positions().c2y - before.c2y - 300.0 / 360.0).abs() < 1e-9);
        assert!(!c.knob_key(ControlKind::Alpha, Key::Enter));
        // Opaque alpha can't go further up.
        c.knob_key(ControlKind::Alpha, Key::ArrowUp);
        assert_eq!(c.positions().c3y, 0.0);
    }

    #[test]
    fn snapshot_classes() {
        let mut c = controller(PickerOptions::new().with_class_name("a  b").with_theme(Theme::Light));
        let snap = c.snapshot();
        assert_eq!(snap.root_class, "color-picker a b txt-dark light");
        assert_eq!(snap.picker_class, "");
        assert_eq!(snap.placeholder, "Type colour in RGB format");
        assert_eq!(snap.menu_toggle_tab_index, -1);

        c.show_picker();
        assert_eq!(c.snapshot().picker_class, " bottom");
        run_all(&mut c);
        let snap = c.snapshot();
        assert_eq!(snap.picker_class, " bottom show");
        assert!(snap.root_class.ends_with(" open"));
        assert_eq!(snap.input_tab_index, -1);
        assert_eq!(snap.menu_toggle_tab_index, 0);
    }

    #[test]
    fn knob_aria_for_red() {
        let c = controller(PickerOptions::new());
        let snap = c.snapshot();
        let plane = snap.aria(ControlKind::Plane);
        assert_eq!(plane.value_text, "100% & 100%");
        let hue = snap.aria(ControlKind::Hue);
        assert_eq!((hue.value_now, hue.value_max), (0.0, 360.0));
        assert_eq!(
            hue.description.as_deref(),
            Some("Colour Value: RGB: 255 0 0. Colour Appearance: red.")
        );
        assert_eq!(snap.aria(ControlKind::Alpha).value_text, "100%");
    }

    #[test]
    fn menu_needs_content() {
        let mut c = controller(PickerOptions::new());
        c.toggle_menu();
        assert_eq!(c.current_surface(), None);
        assert!(c.take_scheduled().is_empty());
    }
}
