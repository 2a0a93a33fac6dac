//! [`Geometry`] fed by Floem layout callbacks.
//!
//! Floem reports a view's window origin (`on_move`) and its size
//! (`on_resize`) separately; an element is measurable once both arrived.

use std::collections::HashMap;

use crate::geometry::{Bounds, Element, Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot {
    Element(Element),
    /// The widget root, used for outside-click detection.
    Root,
}

#[derive(Debug, Clone, Default)]
pub struct ViewGeometry {
    origins: HashMap<Slot, (f64, f64)>,
    sizes: HashMap<Slot, (f64, f64)>,
    viewport: (f64, f64),
    columns: Option<usize>,
}

impl ViewGeometry {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport: (viewport_width, viewport_height),
            ..Self::default()
        }
    }

    pub fn set_origin(&mut self, element: Element, x: f64, y: f64) {
        self.origins.insert(Slot::Element(element), (x, y));
    }

    pub fn set_size(&mut self, element: Element, width: f64, height: f64) {
        self.sizes.insert(Slot::Element(element), (width, height));
    }

    pub fn set_root_origin(&mut self, x: f64, y: f64) {
        self.origins.insert(Slot::Root, (x, y));
    }

    pub fn set_root_size(&mut self, width: f64, height: f64) {
        self.sizes.insert(Slot::Root, (width, height));
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = Some(columns);
    }

    fn bounds(&self, slot: Slot) -> Option<Bounds> {
        let (left, top) = self.origins.get(&slot)?;
        let (width, height) = self.sizes.get(&slot)?;
        Some(Bounds::new(*left, *top, *width, *height))
    }

    /// Whether a window point lies on the widget root. Unknown layout counts as outside.
    pub fn root_contains(&self, x: f64, y: f64) -> bool {
        self.bounds(Slot::Root).is_some_and(|b| b.contains(x, y))
    }
}

impl Geometry for ViewGeometry {
    fn measure(&self, element: Element) -> Option<Bounds> {
        self.bounds(Slot::Element(element))
    }

    fn viewport_width(&self) -> f64 {
        self.viewport.0
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.1
    }

    fn column_count(&self) -> Option<usize> {
        self.columns
    }
}
