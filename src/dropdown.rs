//! Which popup surface is open, where it renders, and its show/hide lifecycle.
//!
//! Both surfaces share one `open` slot. Visibility changes are split in two:
//! the synchronous half runs inside the triggering event, the second half is
//! a [`Ticket`] the host runs later (after a frame, or after the hide
//! transition). Tickets carry a generation number so a ticket issued before a
//! newer open/close is ignored.

use crate::geometry::{Element, Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Plane, strips and channel form.
    Picker,
    /// Presets grid and keywords list.
    Menu,
}

impl Surface {
    pub fn element(&self) -> Element {
        match self {
            Surface::Picker => Element::PickerDropdown,
            Surface::Menu => Element::MenuDropdown,
        }
    }
}

/// Vertical side the open surface renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    None,
    Top,
    Bottom,
}

impl Placement {
    pub fn as_class(&self) -> &'static str {
        match self {
            Placement::None => "",
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Shown,
    Closing,
}

/// Deferred half of an open or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub surface: Surface,
    pub generation: u64,
}

/// `Top` only when the surface would overflow below and still fits above.
pub fn compute_placement(
    input_top: f64,
    input_height: f64,
    dropdown_height: f64,
    viewport_height: f64,
) -> Placement {
    let bottom_exceed = input_top + dropdown_height + input_height > viewport_height;
    let top_exceed = input_top - dropdown_height < 0.0;
    if bottom_exceed && !top_exceed {
        Placement::Top
    } else {
        Placement::Bottom
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    open: Option<Surface>,
    placement: Placement,
    picker_shown: bool,
    menu_shown: bool,
    phase: Phase,
    generation: u64,
}

impl Dropdown {
    pub fn open_surface(&self) -> Option<Surface> {
        self.open
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_shown(&self, surface: Surface) -> bool {
        match surface {
            Surface::Picker => self.picker_shown,
            Surface::Menu => self.menu_shown,
        }
    }

    pub fn any_shown(&self) -> bool {
        self.picker_shown || self.menu_shown
    }

    /// The surface currently visible, if any.
    pub fn shown_surface(&self) -> Option<Surface> {
        if self.picker_shown {
            Some(Surface::Picker)
        } else if self.menu_shown {
            Some(Surface::Menu)
        } else {
            None
        }
    }

    fn set_shown(&mut self, surface: Surface, shown: bool) {
        match surface {
            Surface::Picker => self.picker_shown = shown,
            Surface::Menu => self.menu_shown = shown,
        }
    }

    fn next_ticket(&mut self, surface: Surface) -> Ticket {
        self.generation += 1;
        Ticket {
            surface,
            generation: self.generation,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation && self.open == Some(ticket.surface)
    }

    /// Start opening `surface`. Returns `None` when it is already open or opening.
    pub fn open(&mut self, surface: Surface) -> Option<Ticket> {
        if self.open == Some(surface) && matches!(self.phase, Phase::Opening | Phase::Shown) {
            return None;
        }
        log::debug!("opening {surface:?} (was {:?}, {:?})", self.open, self.phase);
        self.open = Some(surface);
        self.placement = Placement::Bottom;
        self.phase = Phase::Opening;
        Some(self.next_ticket(surface))
    }

    /// Second half of [`Dropdown::open`]; `false` for a stale ticket.
    pub fn reveal(&mut self, ticket: Ticket, geometry: &dyn Geometry) -> bool {
        if !self.is_current(ticket) || self.phase != Phase::Opening {
            log::debug!("stale reveal ticket {ticket:?}");
            return false;
        }
        self.set_shown(ticket.surface, true);
        let other = match ticket.surface {
            Surface::Picker => Surface::Menu,
            Surface::Menu => Surface::Picker,
        };
        self.set_shown(other, false);
        self.phase = Phase::Shown;
        self.update_placement(geometry);
        true
    }

    /// Begin closing whatever is open.
    ///
    /// A shown surface starts its hide transition and a ticket is returned. A
    /// surface still waiting to be revealed is dropped at once. Returns
    /// `(ticket, closed_now)`.
    pub fn close(&mut self) -> (Option<Ticket>, bool) {
        match (self.phase, self.shown_surface(), self.open) {
            (Phase::Shown, Some(surface), _) => {
                log::debug!("closing {surface:?}");
                self.set_shown(surface, false);
                self.phase = Phase::Closing;
                self.open = Some(surface);
                (Some(self.next_ticket(surface)), false)
            }
            (Phase::Opening, _, Some(surface)) => {
                log::debug!("cancelling {surface:?} before reveal");
                self.generation += 1;
                self.reset();
                (None, true)
            }
            _ => (None, false),
        }
    }

    /// Second half of [`Dropdown::close`]; `false` for a stale ticket.
    pub fn conceal(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) || self.phase != Phase::Closing {
            log::debug!("stale conceal ticket {ticket:?}");
            return false;
        }
        self.reset();
        true
    }

    /// Drop to `Closed` immediately, invalidating outstanding tickets.
    pub fn force_closed(&mut self) {
        self.generation += 1;
        self.reset();
    }

    fn reset(&mut self) {
        self.open = None;
        self.placement = Placement::None;
        self.picker_shown = false;
        self.menu_shown = false;
        self.phase = Phase::Closed;
    }

    /// Recompute `placement` for the open surface. A no-op until both the
    /// input and the surface have been laid out.
    pub fn update_placement(&mut self, geometry: &dyn Geometry) {
        let Some(surface) = self.open else {
            return;
        };
        let (Some(input), Some(dropdown)) = (
            geometry.measure(Element::Input),
            geometry.measure(surface.element()),
        ) else {
            return;
        };
        self.placement = compute_placement(
            input.top,
            input.height,
            dropdown.height,
            geometry.viewport_height(),
        );
    }
}
