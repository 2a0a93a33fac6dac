//! Viewport geometry the controller needs to read, behind a trait so the
//! interaction logic runs without a rendering surface.

use std::collections::HashMap;

/// Which of the three interactive controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Saturation (x) / value (y) plane.
    Plane,
    Hue,
    Alpha,
}

impl ControlKind {
    pub const ALL: [ControlKind; 3] = [ControlKind::Plane, ControlKind::Hue, ControlKind::Alpha];
}

/// Elements whose layout the controller measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The preview text input the dropdowns hang from.
    Input,
    PickerDropdown,
    MenuDropdown,
    Control(ControlKind),
    PresetsGrid,
}

/// Window-relative box, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Layout queries, answered by whatever renders the picker.
pub trait Geometry {
    /// Current box of `element`, `None` until it has been laid out.
    fn measure(&self, element: Element) -> Option<Bounds>;
    fn viewport_width(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Rendered column count of the presets grid, if known.
    fn column_count(&self) -> Option<usize> {
        None
    }
}

/// A `Geometry` with explicitly set values, for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    bounds: HashMap<Element, Bounds>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub columns: Option<usize>,
}

impl StaticGeometry {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..Self::default()
        }
    }

    pub fn with(mut self, element: Element, bounds: Bounds) -> Self {
        self.set(element, bounds);
        self
    }

    pub fn set(&mut self, element: Element, bounds: Bounds) {
        self.bounds.insert(element, bounds);
    }

    pub fn clear(&mut self, element: Element) {
        self.bounds.remove(&element);
    }
}

impl Geometry for StaticGeometry {
    fn measure(&self, element: Element) -> Option<Bounds> {
        self.bounds.get(&element).copied()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn column_count(&self) -> Option<usize> {
        self.columns
    }
}
