//! The single mutable state record of a picker instance.
//!
//! Only named transitions change it. `value` is always the serialization of
//! `color`; `input_value` is the text field buffer and may run ahead of it.

use crate::color::{CssColor, Format, Hsva};
use crate::geometry::ControlKind;
use crate::position::{self, ControlPositions};

#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    color: CssColor,
    value: String,
    input_value: String,
    positions: ControlPositions,
    offset_length: f64,
    drag: Option<ControlKind>,
}

impl PickerState {
    /// Seed from an already parsed color, deriving knobs for `offset_length`.
    pub fn new(color: CssColor, offset_length: f64) -> Self {
        let value = color.to_string();
        Self {
            positions: position::hsv_to_pixel(color.to_hsva(), offset_length),
            input_value: value.clone(),
            value,
            color,
            offset_length,
            drag: None,
        }
    }

    pub fn color(&self) -> &CssColor {
        &self.color
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn format(&self) -> Format {
        self.color.format()
    }

    pub fn positions(&self) -> ControlPositions {
        self.positions
    }

    pub fn offset_length(&self) -> f64 {
        self.offset_length
    }

    pub fn drag(&self) -> Option<ControlKind> {
        self.drag
    }

    /// Replace the committed color from outside the knobs (typed text,
    /// preset, keyword, form edit). Knob positions are re-derived.
    /// Returns whether the committed string changed.
    pub fn commit_color(&mut self, color: CssColor) -> bool {
        self.positions = position::hsv_to_pixel(color.to_hsva(), self.offset_length);
        self.replace_color(color)
    }

    /// Replace knob positions and commit the color they describe.
    /// Returns whether the committed string changed.
    pub fn commit_positions(&mut self, positions: ControlPositions) -> bool {
        self.positions = positions.clamped(self.offset_length);
        let hsva = self.hsva();
        self.replace_color(CssColor::from_hsva(hsva, self.format()))
    }

    fn replace_color(&mut self, color: CssColor) -> bool {
        let value = color.to_string();
        self.color = color;
        self.input_value = value.clone();
        if self.value == value {
            return false;
        }
        log::debug!("commit {} -> {}", self.value, value);
        self.value = value;
        true
    }

    /// HSV + alpha currently encoded by the knobs.
    pub fn hsva(&self) -> Hsva {
        position::pixel_to_hsv(&self.positions, self.offset_length)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_value = text.into();
    }

    /// Drop the uncommitted buffer. Returns whether it differed.
    pub fn revert_input(&mut self) -> bool {
        if self.input_value == self.value {
            return false;
        }
        self.input_value = self.value.clone();
        true
    }

    pub fn set_drag(&mut self, drag: Option<ControlKind>) {
        self.drag = drag;
    }

    /// Change the output format; the color itself is untouched.
    pub fn set_format(&mut self, format: Format) -> bool {
        if format == self.format() {
            return false;
        }
        let color = self.color.with_format(format);
        self.replace_color(color)
    }

    /// Adopt a new axis length, keeping knobs proportional.
    pub fn set_offset_length(&mut self, length: f64) -> bool {
        if length == self.offset_length {
            return false;
        }
        self.positions = self.positions.rescale(self.offset_length, length);
        self.offset_length = length;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> PickerState {
        PickerState::new(CssColor::new("red", Format::Rgb), 300.0)
    }

    #[test]
    fn seeded_consistently() {
        let state = red();
        assert_eq!(state.value(), "rgb(255, 0, 0)");
        assert_eq!(state.input_value(), state.value());
        assert_eq!(
            state.positions(),
            ControlPositions {
                c1x: 300.0,
                c1y: 0.0,
                c2y: 0.0,
                c3y: 0.0
            }
        );
    }

    #[test]
    fn commit_reports_change_once() {
        let mut state = red();
        let blue = CssColor::new("blue", Format::Rgb);
        assert!(state.commit_color(blue));
        assert!(!state.commit_color(blue));
        assert_eq!(state.value(), "rgb(0, 0, 255)");
        assert!((state.positions().c2y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn positions_drive_the_color() {
        let mut state = red();
        let moved = state.positions().with_alpha(150.0, 300.0);
        assert!(state.commit_positions(moved));
        assert_eq!(state.value(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(state.color().a(), 0.5);
    }

    #[test]
    fn revert_restores_committed() {
        let mut state = red();
        state.set_input("#00f");
        assert!(state.revert_input());
        assert_eq!(state.input_value(), "rgb(255, 0, 0)");
        assert!(!state.revert_input());
    }

    #[test]
    fn format_switch_reserializes() {
        let mut state = red();
        assert!(state.set_format(Format::Hex));
        assert_eq!(state.value(), "#ff0000");
        assert!(!state.set_format(Format::Hex));
    }

    #[test]
    fn resize_keeps_proportions() {
        let mut state = PickerState::new(CssColor::new("#808080", Format::Rgb), 300.0);
        let before = state.hsva();
        state.set_offset_length(230.0);
        let after = state.hsva();
        assert!((before.v - after.v).abs() < 1e-9);
        assert_eq!(state.offset_length(), 230.0);
    }
}
