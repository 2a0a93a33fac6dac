//! Caller-facing configuration: initial value, format, theme, presets, keywords, locale, layout.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Format;
use crate::error::{ConfigError, ConfigResult};
use crate::locale::Lang;

/// Value used when the caller gives none, or gives one that doesn't parse.
pub const DEFAULT_VALUE: &str = "red";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Palette generator input, e.g. `{hue: 0, hueSteps: 12, lightSteps: 10, saturation: 85}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPresets {
    pub hue: f64,
    pub hue_steps: usize,
    pub light_steps: usize,
    #[serde(default)]
    pub saturation: Option<f64>,
}

impl Default for ColorPresets {
    fn default() -> Self {
        Self {
            hue: 0.0,
            hue_steps: 12,
            light_steps: 10,
            saturation: Some(85.0),
        }
    }
}

impl ColorPresets {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.hue_steps == 0 || self.light_steps == 0 {
            return Err(ConfigError::InvalidPresets(format!(
                "hueSteps ({}) and lightSteps ({}) must be at least 1",
                self.hue_steps, self.light_steps
            )));
        }
        Ok(())
    }
}

/// A keyword menu entry: a bare color string, or a `{label: value}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeywordRepr", into = "KeywordRepr")]
pub enum ColorKeyword {
    Plain(String),
    Labeled { label: String, value: String },
}

impl ColorKeyword {
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Labeled {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Labeled { label, .. } => label,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Labeled { value, .. } => value,
        }
    }
}

impl From<&str> for ColorKeyword {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum KeywordRepr {
    Plain(String),
    Labeled(HashMap<String, String>),
}

impl TryFrom<KeywordRepr> for ColorKeyword {
    type Error = String;

    fn try_from(repr: KeywordRepr) -> Result<Self, Self::Error> {
        match repr {
            KeywordRepr::Plain(value) => Ok(Self::Plain(value)),
            KeywordRepr::Labeled(map) => {
                if map.len() != 1 {
                    return Err(format!(
                        "keyword object must have exactly one entry, found {}",
                        map.len()
                    ));
                }
                map.into_iter()
                    .next()
                    .map(|(label, value)| Self::Labeled { label, value })
                    .ok_or_else(|| "empty keyword object".to_string())
            }
        }
    }
}

impl From<ColorKeyword> for KeywordRepr {
    fn from(keyword: ColorKeyword) -> Self {
        match keyword {
            ColorKeyword::Plain(value) => KeywordRepr::Plain(value),
            ColorKeyword::Labeled { label, value } => {
                KeywordRepr::Labeled(HashMap::from([(label, value)]))
            }
        }
    }
}

/// Control surface sizing and timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Viewport width at which the wide control surface is used.
    pub breakpoint: f64,
    pub wide_length: f64,
    pub narrow_length: f64,
    /// Delay before a surface that started opening is revealed and measured.
    pub frame_delay_ms: u64,
    /// Hide transition length; the surface is removed once it elapses.
    pub transition_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: 980.0,
            wide_length: 300.0,
            narrow_length: 230.0,
            frame_delay_ms: 17,
            transition_ms: 150,
        }
    }
}

impl LayoutConfig {
    /// Side length of the square control surface for a viewport width.
    pub fn offset_length(&self, viewport_width: f64) -> f64 {
        if viewport_width >= self.breakpoint {
            self.wide_length
        } else {
            self.narrow_length
        }
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Everything a host passes when creating a picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerOptions {
    pub id: Option<String>,
    pub value: Option<String>,
    pub format: Format,
    pub theme: Theme,
    pub lang: Lang,
    pub placeholder: Option<String>,
    pub class_name: Option<String>,
    pub color_presets: Option<ColorPresets>,
    pub color_keywords: Option<Vec<ColorKeyword>>,
    pub locale: Option<HashMap<String, String>>,
    pub layout: LayoutConfig,
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from JSON in the camelCase shape of the widget props.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        if let Some(presets) = &options.color_presets {
            presets.validate()?;
        }
        Ok(options)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_presets(mut self, presets: ColorPresets) -> Self {
        self.color_presets = Some(presets);
        self
    }

    pub fn with_keywords<K: Into<ColorKeyword>>(mut self, keywords: impl IntoIterator<Item = K>) -> Self {
        self.color_keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_locale(mut self, locale: HashMap<String, String>) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Whether the menu toggle and menu surface exist at all.
    pub fn has_menu(&self) -> bool {
        self.color_presets.is_some()
            || self.color_keywords.as_ref().is_some_and(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_length_breakpoint() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.offset_length(1280.0), 300.0);
        assert_eq!(layout.offset_length(980.0), 300.0);
        assert_eq!(layout.offset_length(979.0), 230.0);
    }

    #[test]
    fn keyword_forms() {
        let list: Vec<ColorKeyword> =
            serde_json::from_str(r#"["red", {"Default": "rgb(37, 84, 189)"}]"#).unwrap();
        assert_eq!(list[0], ColorKeyword::Plain("red".into()));
        assert_eq!(list[1].label(), "Default");
        assert_eq!(list[1].value(), "rgb(37, 84, 189)");
        assert!(serde_json::from_str::<ColorKeyword>(r#"{"a": "red", "b": "blue"}"#).is_err());
    }

    #[test]
    fn menu_presence() {
        assert!(!PickerOptions::new().has_menu());
        assert!(!PickerOptions::new().with_keywords(Vec::<&str>::new()).has_menu());
        assert!(PickerOptions::new().with_keywords(["red"]).has_menu());
        assert!(PickerOptions::new().with_presets(ColorPresets::default()).has_menu());
    }

    #[test]
    fn zero_steps_rejected() {
        let presets = ColorPresets {
            hue_steps: 0,
            ..ColorPresets::default()
        };
        assert!(matches!(presets.validate(), Err(ConfigError::InvalidPresets(_))));
    }
}
