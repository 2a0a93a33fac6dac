//! Preset palette generation and the presets grid metrics.

use crate::color::{CssColor, Format};
use crate::options::ColorPresets;

/// Lightness step sizes for small `light_steps` counts.
const LIGHT_STEP_TABLE: [(usize, usize, f64); 6] = [
    (1, 3, 0.25),
    (4, 5, 0.2),
    (6, 7, 0.15),
    (8, 9, 0.11),
    (10, 11, 0.09),
    (12, 13, 0.075),
];

/// A generated grid of HSL colors: `hue_steps` hues, each in `light_steps` tints.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    pub hue: f64,
    pub hue_steps: usize,
    pub light_steps: usize,
    pub saturation: f64,
    pub colors: Vec<CssColor>,
}

impl ColorPalette {
    /// `hue` in degrees, `saturation` in percent.
    pub fn new(hue: f64, hue_steps: usize, light_steps: usize, saturation: f64, format: Format) -> Self {
        let mut palette = Self {
            hue,
            hue_steps,
            light_steps,
            saturation,
            colors: Vec::new(),
        };
        if hue_steps == 0 || light_steps == 0 {
            log::warn!("empty palette: hue_steps={hue_steps}, light_steps={light_steps}");
            return palette;
        }

        let hue_step = 360.0 / hue_steps as f64;
        let lightness = lightness_ladder(light_steps);
        let s = (saturation / 100.0).clamp(0.0, 1.0);

        palette.colors.reserve(hue_steps * lightness.len());
        for i in 0..hue_steps {
            let h = ((hue + i as f64 * hue_step).rem_euclid(360.0)) / 360.0;
            for &l in &lightness {
                palette.colors.push(CssColor::from_hsla(h, s, l, 1.0, format));
            }
        }
        palette
    }

    pub fn from_presets(presets: &ColorPresets, format: Format) -> Self {
        Self::new(
            presets.hue,
            presets.hue_steps,
            presets.light_steps,
            presets.saturation.unwrap_or(100.0),
            format,
        )
    }
}

/// Lightness values centered on 0.5, darkest first.
fn lightness_ladder(light_steps: usize) -> Vec<f64> {
    let step = LIGHT_STEP_TABLE
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&light_steps))
        .map(|(_, _, step)| *step)
        .unwrap_or_else(|| {
            let even = if light_steps % 2 == 0 { 1 } else { 0 };
            1.0 / (light_steps + even) as f64
        });
    let half = light_steps / 2;

    let darker = (1..light_steps - half).rev().map(|i| 0.5 - step * i as f64);
    let lighter = (1..=half).map(|i| 0.5 + step * i as f64);
    darker
        .chain(std::iter::once(0.5))
        .chain(lighter)
        .map(|l| l.clamp(0.0, 1.0))
        .collect()
}

/// Grid sizing for the presets menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetsLayout {
    /// Columns per row.
    pub fit: usize,
    pub multiline: bool,
    pub scrollable: bool,
    /// Visible rows at rest.
    pub row_count: usize,
    /// Visible rows when hovered.
    pub row_count_hover: usize,
    /// Option edge length in rem.
    pub item_size: f64,
    /// Gap between options in rem.
    pub gap: f64,
}

impl PresetsLayout {
    pub fn new(count: usize, light_steps: usize) -> Self {
        let fit = light_steps.max(1);
        let multiline = count > fit;
        let row_count_hover = if multiline && count > fit * 4 {
            5
        } else if multiline && count > fit * 3 {
            4
        } else if multiline && count > fit * 2 {
            3
        } else {
            2
        };
        let row_count = row_count_hover - if count <= fit * 3 { 1 } else { 2 };
        let scrollable = multiline && count > row_count * fit;
        let item_size = if fit > 5 && multiline {
            1.5
        } else if multiline {
            1.75
        } else {
            2.0
        };
        let gap = if multiline { 0.0625 } else { 0.25 };
        Self {
            fit,
            multiline,
            scrollable,
            row_count,
            row_count_hover,
            item_size,
            gap,
        }
    }

    /// Resting height in rem.
    pub fn height(&self) -> f64 {
        self.row_count as f64 * self.item_size
    }

    /// Hover height in rem, gaps included.
    pub fn hover_height(&self) -> f64 {
        self.row_count_hover as f64 * self.item_size + (self.row_count_hover - 1) as f64 * self.gap
    }
}
