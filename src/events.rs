//! Toolkit-neutral input vocabulary: keys, global events, focus targets and
//! the listener set that is live only while a surface is open.

use crate::geometry::ControlKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Other,
}

/// Window/document level listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalListener {
    Scroll,
    Resize,
    KeyUp,
    PointerUp,
    PointerMove,
}

impl GlobalListener {
    pub const ALL: [GlobalListener; 5] = [
        GlobalListener::Scroll,
        GlobalListener::Resize,
        GlobalListener::KeyUp,
        GlobalListener::PointerUp,
        GlobalListener::PointerMove,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Which global listeners are attached. Attaching twice or detaching
/// something that isn't attached changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerSet(u8);

impl ListenerSet {
    pub fn is_attached(&self, listener: GlobalListener) -> bool {
        self.0 & listener.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns whether anything was newly attached.
    pub fn attach_all(&mut self) -> bool {
        let before = self.0;
        for listener in GlobalListener::ALL {
            self.0 |= listener.bit();
        }
        before != self.0
    }

    /// Returns whether anything was attached before.
    pub fn detach_all(&mut self) -> bool {
        let before = self.0;
        self.0 = 0;
        before != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = GlobalListener> + '_ {
        GlobalListener::ALL
            .into_iter()
            .filter(|l| self.is_attached(*l))
    }
}

/// An event delivered by a global listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Scroll,
    Resize,
    KeyUp(Key),
    PointerUp { inside_root: bool, has_selection: bool },
    /// Window-relative pointer position.
    PointerMove { x: f64, y: f64 },
}

impl UiEvent {
    pub fn listener(&self) -> GlobalListener {
        match self {
            UiEvent::Scroll => GlobalListener::Scroll,
            UiEvent::Resize => GlobalListener::Resize,
            UiEvent::KeyUp(_) => GlobalListener::KeyUp,
            UiEvent::PointerUp { .. } => GlobalListener::PointerUp,
            UiEvent::PointerMove { .. } => GlobalListener::PointerMove,
        }
    }
}

/// Where focus went when the widget lost it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDestination {
    /// Focus left for nothing in particular (window blur).
    Nowhere,
    /// Another element inside the widget root.
    Inside,
    Outside,
}

/// Pointer and focus bookkeeping for a toolkit that reports focus changes
/// one element at a time.
///
/// Every focusable part reports `focus_gained`/`focus_lost`. A loss is
/// resolved a tick later: if anything inside gained focus meanwhile, focus
/// stayed in the widget.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FocusTracker {
    epoch: u64,
    pointer_inside: bool,
    text_drag: bool,
}

impl FocusTracker {
    pub(crate) fn focus_gained(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Ticket to resolve once the next focus (if any) has landed.
    pub(crate) fn focus_lost(&self) -> u64 {
        self.epoch
    }

    pub(crate) fn destination(&self, ticket: u64) -> FocusDestination {
        if self.epoch != ticket {
            FocusDestination::Inside
        } else if self.pointer_inside {
            FocusDestination::Nowhere
        } else {
            FocusDestination::Outside
        }
    }

    pub(crate) fn pointer_down(&mut self, inside: bool) {
        self.pointer_inside = inside;
        if !inside {
            self.text_drag = false;
        }
    }

    /// The pointer went down on a text field; a release elsewhere ends a
    /// selection drag.
    pub(crate) fn text_press(&mut self) {
        self.pointer_inside = true;
        self.text_drag = true;
    }

    /// Keyboard navigation moves focus without a pointer.
    pub(crate) fn tab(&mut self) {
        self.pointer_inside = false;
    }

    pub(crate) fn pointer_up(&mut self, inside_root: bool) -> UiEvent {
        let has_selection = std::mem::take(&mut self.text_drag) && !inside_root;
        self.pointer_inside = inside_root;
        UiEvent::PointerUp {
            inside_root,
            has_selection,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuList {
    Presets,
    Keywords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Focus(usize),
    Activate(usize),
}

/// Elements the controller may ask the host to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Trigger,
    Input,
    Knob(ControlKind),
    MenuToggle,
    MenuOption { list: MenuList, index: usize },
}

/// Roving focus inside a menu list of `len` options laid out in `columns`
/// columns. The keywords list is a single column.
pub fn rove(list: MenuList, index: usize, len: usize, columns: usize, key: Key) -> Option<MenuAction> {
    if index >= len {
        return None;
    }
    let columns = match list {
        MenuList::Presets => columns.max(1),
        MenuList::Keywords => 1,
    };
    let target = match (list, key) {
        (_, Key::Enter | Key::Space) => return Some(MenuAction::Activate(index)),
        (MenuList::Presets, Key::ArrowUp) => index.checked_sub(columns),
        (MenuList::Presets, Key::ArrowDown) => Some(index + columns),
        (MenuList::Presets, Key::ArrowLeft) | (MenuList::Keywords, Key::ArrowLeft | Key::ArrowUp) => {
            index.checked_sub(1)
        }
        (MenuList::Presets, Key::ArrowRight) | (MenuList::Keywords, Key::ArrowRight | Key::ArrowDown) => {
            Some(index + 1)
        }
        _ => None,
    }?;
    (target < len).then_some(MenuAction::Focus(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_detach_is_idempotent() {
        let mut set = ListenerSet::default();
        assert!(set.attach_all());
        assert!(!set.attach_all());
        assert_eq!(set.iter().count(), 5);
        assert!(set.detach_all());
        assert!(!set.detach_all());
        assert!(set.is_empty());
        assert!(!set.is_attached(GlobalListener::PointerMove));
    }

    #[test]
    fn grid_navigation() {
        // 3 rows of 10.
        assert_eq!(rove(MenuList::Presets, 12, 30, 10, Key::ArrowUp), Some(MenuAction::Focus(2)));
        assert_eq!(rove(MenuList::Presets, 12, 30, 10, Key::ArrowDown), Some(MenuAction::Focus(22)));
        assert_eq!(rove(MenuList::Presets, 12, 30, 10, Key::ArrowLeft), Some(MenuAction::Focus(11)));
        assert_eq!(rove(MenuList::Presets, 9, 30, 10, Key::ArrowRight), Some(MenuAction::Focus(10)));
        assert_eq!(rove(MenuList::Presets, 5, 30, 10, Key::ArrowUp), None);
        assert_eq!(rove(MenuList::Presets, 25, 30, 10, Key::ArrowDown), None);
        assert_eq!(rove(MenuList::Presets, 0, 30, 10, Key::ArrowLeft), None);
        assert_eq!(rove(MenuList::Presets, 4, 30, 10, Key::Space), Some(MenuAction::Activate(4)));
    }

    #[test]
    fn keyword_navigation() {
        assert_eq!(rove(MenuList::Keywords, 1, 3, 10, Key::ArrowUp), Some(MenuAction::Focus(0)));
        assert_eq!(rove(MenuList::Keywords, 1, 3, 10, Key::ArrowDown), Some(MenuAction::Focus(2)));
        assert_eq!(rove(MenuList::Keywords, 2, 3, 10, Key::ArrowRight), None);
        assert_eq!(rove(MenuList::Keywords, 0, 3, 10, Key::Enter), Some(MenuAction::Activate(0)));
        assert_eq!(rove(MenuList::Keywords, 0, 3, 10, Key::Tab), None);
    }

    #[test]
    fn tabbing_between_parts_stays_inside() {
        let mut focus = FocusTracker::default();
        focus.pointer_down(true);
        focus.focus_gained();

        // Alpha knob to the first channel field.
        focus.tab();
        let ticket = focus.focus_lost();
        focus.focus_gained();
        assert_eq!(focus.destination(ticket), FocusDestination::Inside);

        // Last field to something outside the widget.
        focus.tab();
        let ticket = focus.focus_lost();
        assert_eq!(focus.destination(ticket), FocusDestination::Outside);
    }

    #[test]
    fn window_blur_after_a_click_inside_is_nowhere() {
        let mut focus = FocusTracker::default();
        focus.pointer_down(true);
        let ticket = focus.focus_lost();
        assert_eq!(focus.destination(ticket), FocusDestination::Nowhere);
    }

    #[test]
    fn text_drag_released_outside_is_a_selection() {
        let mut focus = FocusTracker::default();
        focus.text_press();
        focus.pointer_down(true);
        assert_eq!(
            focus.pointer_up(false),
            UiEvent::PointerUp {
                inside_root: false,
                has_selection: true,
            }
        );

        // The drag ended with that release.
        assert_eq!(
            focus.pointer_up(false),
            UiEvent::PointerUp {
                inside_root: false,
                has_selection: false,
            }
        );

        focus.text_press();
        assert_eq!(
            focus.pointer_up(true),
            UiEvent::PointerUp {
                inside_root: true,
                has_selection: false,
            }
        );
    }

    #[test]
    fn events_know_their_listener() {
        assert_eq!(UiEvent::KeyUp(Key::Escape).listener(), GlobalListener::KeyUp);
        assert_eq!(
            UiEvent::PointerMove { x: 0.0, y: 0.0 }.listener(),
            GlobalListener::PointerMove
        );
    }
}
