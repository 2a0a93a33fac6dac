//! # floem-color-dropdown
//!
//! An accessible dropdown color picker for [Floem](https://github.com/lapce/floem).
//!
//! A text input shows the current CSS color string. Focusing it opens a
//! dropdown with a saturation/value plane, hue and alpha strips, and per-format
//! channel fields; an optional menu lists generated presets and keywords.
//!
//! The state machine is [`PickerController`], which runs without a window
//! against any [`Geometry`]. [`ColorPicker`] wraps it in a Floem view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_color_dropdown::{ColorPicker, PickerOptions};
//!
//! let picker = ColorPicker::new(PickerOptions::new().with_value("#3B82F6"))
//!     .on_change(|value| println!("{value}"));
//! let handle = picker.handle();
//! // Use `picker.build()` in your Floem view tree; forward window pointer-up
//! // and resize events through `handle`.
//! ```

mod appearance;
mod checkerboard;
mod color;
mod constants;
mod control_surface;
mod controller;
mod dropdown;
mod error;
mod events;
mod forms;
mod geometry;
mod ids;
mod inputs;
mod locale;
mod math;
mod menu;
mod names;
mod options;
mod palette;
mod picker_view;
mod position;
mod store;
mod view_geometry;

pub use appearance::appearance;
pub use color::{CssColor, Format, Hsva};
pub use controller::{Deferred, KnobAria, PickerController, Scheduled, Snapshot};
pub use dropdown::{Dropdown, Phase, Placement, Surface, Ticket, compute_placement};
pub use error::{ColorError, ConfigError, ConfigResult};
pub use events::{
    FocusDestination, FocusTarget, GlobalListener, Key, ListenerSet, MenuAction, MenuList,
    UiEvent, rove,
};
pub use forms::{Channel, FieldValue, FormField};
pub use geometry::{Bounds, ControlKind, Element, Geometry, StaticGeometry};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use locale::{Lang, LanguagePack};
pub use options::{ColorKeyword, ColorPresets, DEFAULT_VALUE, LayoutConfig, PickerOptions, Theme};
pub use palette::{ColorPalette, PresetsLayout};
pub use picker_view::{ColorPicker, PickerHandle, color_picker};
pub use position::{ControlPositions, clamp_offset, hsv_to_pixel, pixel_to_hsv};
pub use store::PickerState;
pub use view_geometry::ViewGeometry;
