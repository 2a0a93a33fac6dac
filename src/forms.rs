//! Per-format numeric fields shown under the controls.

use crate::color::{CssColor, Format};
use crate::locale::LanguagePack;
use crate::math::round_part;

/// One editable channel of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
    Whiteness,
    Blackness,
    Alpha,
}

impl Channel {
    /// Channels of `format`, in form order. Hex has none; it edits as text.
    pub fn for_format(format: Format) -> &'static [Channel] {
        match format {
            Format::Rgb => &[Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha],
            Format::Hsl => &[Channel::Hue, Channel::Saturation, Channel::Lightness, Channel::Alpha],
            Format::Hwb => &[Channel::Hue, Channel::Whiteness, Channel::Blackness, Channel::Alpha],
            Format::Hex => &[],
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Lightness => "lightness",
            Channel::Whiteness => "whiteness",
            Channel::Blackness => "blackness",
            Channel::Alpha => "alpha",
        }
    }

    /// Short visible label, e.g. `R:`.
    pub fn short(&self) -> &'static str {
        match self {
            Channel::Red => "R:",
            Channel::Green => "G:",
            Channel::Blue => "B:",
            Channel::Hue => "H:",
            Channel::Saturation => "S:",
            Channel::Lightness => "L:",
            Channel::Whiteness => "W:",
            Channel::Blackness => "B:",
            Channel::Alpha => "A:",
        }
    }

    pub fn max(&self) -> f64 {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => 255.0,
            Channel::Hue => 360.0,
            _ => 100.0,
        }
    }

    fn label<'a>(&self, locale: &'a LanguagePack) -> &'a str {
        match self {
            Channel::Red => &locale.red_label,
            Channel::Green => &locale.green_label,
            Channel::Blue => &locale.blue_label,
            Channel::Hue => &locale.hue_label,
            Channel::Saturation => &locale.saturation_label,
            Channel::Lightness => &locale.lightness_label,
            Channel::Whiteness => &locale.whiteness_label,
            Channel::Blackness => &locale.blackness_label,
            Channel::Alpha => &locale.alpha_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number { value: f64, min: f64, max: f64 },
    /// Hex digits, upper-case, no `#`.
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// `None` for the hex text field.
    pub channel: Option<Channel>,
    pub id: String,
    /// Localized accessible label.
    pub label: String,
    /// Visible short label.
    pub short: &'static str,
    pub value: FieldValue,
}

/// Element id of a form input, `color-<format>-<channel>-<base>`.
pub fn field_id(format: Format, channel: Option<Channel>, base: &str) -> String {
    match channel {
        Some(channel) => format!("color-{}-{}-{base}", format.as_str(), channel.key()),
        None => format!("color-{}-{base}", format.as_str()),
    }
}

/// Rounded channel values of `color` as the form displays them.
fn rounded(color: &CssColor, format: Format) -> [f64; 4] {
    let a = round_part(color.a() * 100.0);
    match format {
        Format::Rgb | Format::Hex => {
            let (r, g, b) = color.to_rgb8();
            [r as f64, g as f64, b as f64, a]
        }
        Format::Hsl => {
            let (h, s, l) = color.to_hsl();
            [round_part(h * 360.0), round_part(s * 100.0), round_part(l * 100.0), a]
        }
        Format::Hwb => {
            let (h, w, b) = color.to_hwb();
            [round_part(h * 360.0), round_part(w * 100.0), round_part(b * 100.0), a]
        }
    }
}

pub fn fields(color: &CssColor, format: Format, locale: &LanguagePack, base_id: &str) -> Vec<FormField> {
    if format == Format::Hex {
        return vec![FormField {
            channel: None,
            id: field_id(format, None, base_id),
            label: locale.hex_label.clone(),
            short: "#:",
            value: FieldValue::Text(color.to_hex_digits()),
        }];
    }
    let values = rounded(color, format);
    Channel::for_format(format)
        .iter()
        .zip(values)
        .map(|(channel, value)| FormField {
            channel: Some(*channel),
            id: field_id(format, Some(*channel), base_id),
            label: channel.label(locale).to_string(),
            short: channel.short(),
            value: FieldValue::Number {
                value,
                min: 0.0,
                max: channel.max(),
            },
        })
        .collect()
}

/// `color` with one displayed channel replaced, or `None` when `channel`
/// doesn't belong to `format` or `value` isn't a number.
pub fn with_channel(color: &CssColor, format: Format, channel: Channel, value: f64) -> Option<CssColor> {
    if !value.is_finite() {
        return None;
    }
    let slot = Channel::for_format(format).iter().position(|c| *c == channel)?;
    let mut values = rounded(color, format);
    values[slot] = value.clamp(0.0, channel.max());
    let [x, y, z, a] = values;
    let a = a / 100.0;
    Some(match format {
        Format::Rgb | Format::Hex => CssColor::from_rgba(x / 255.0, y / 255.0, z / 255.0, a, format),
        Format::Hsl => CssColor::from_hsla(x / 360.0, y / 100.0, z / 100.0, a, format),
        Format::Hwb => CssColor::from_hwba(x / 360.0, y / 100.0, z / 100.0, a, format),
    })
}

/// Parse the hex field: 3, 4, 6 or 8 digits, `#` optional.
pub fn parse_hex_field(text: &str, format: Format) -> Option<CssColor> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !matches!(digits.len(), 3 | 4 | 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    CssColor::parse(&format!("#{digits}"), format).ok()
}

/// Short textual reading of the color, e.g. `RGB: 255 0 0`.
pub fn summary(color: &CssColor, format: Format, locale: &LanguagePack) -> String {
    let [x, y, z, _] = rounded(color, format);
    match format {
        Format::Rgb => format!("RGB: {x} {y} {z}"),
        Format::Hsl => format!("HSL: {x}° {y}% {z}%"),
        Format::Hwb => format!("HWB: {x}° {y}% {z}%"),
        Format::Hex => format!("{}: {}", locale.hex_label, color.to_hex_digits()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(format: Format) -> CssColor {
        CssColor::new("red", format)
    }

    #[test]
    fn rgb_fields() {
        let fields = fields(&red(Format::Rgb), Format::Rgb, &LanguagePack::default(), "cp");
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].id, "color-rgb-red-cp");
        assert_eq!(fields[0].label, "Red");
        assert_eq!(
            fields[0].value,
            FieldValue::Number {
                value: 255.0,
                min: 0.0,
                max: 255.0
            }
        );
        assert_eq!(
            fields[3].value,
            FieldValue::Number {
                value: 100.0,
                min: 0.0,
                max: 100.0
            }
        );
    }

    #[test]
    fn hex_is_one_text_field() {
        let fields = fields(&red(Format::Hex), Format::Hex, &LanguagePack::default(), "cp");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].id, "color-hex-cp");
        assert_eq!(fields[0].value, FieldValue::Text("FF0000".into()));
    }

    #[test]
    fn channel_edits_clamp() {
        let c = with_channel(&red(Format::Rgb), Format::Rgb, Channel::Blue, 900.0).unwrap();
        assert_eq!(c.to_string(), "rgb(255, 0, 255)");

        let c = with_channel(&red(Format::Hsl), Format::Hsl, Channel::Lightness, 25.0).unwrap();
        assert_eq!(c.to_string(), "hsl(0, 100%, 25%)");

        let c = with_channel(&red(Format::Hsl), Format::Hsl, Channel::Alpha, 50.0).unwrap();
        assert_eq!(c.to_string(), "hsla(0, 100%, 50%, 0.5)");

        assert!(with_channel(&red(Format::Rgb), Format::Rgb, Channel::Hue, 10.0).is_none());
        assert!(with_channel(&red(Format::Rgb), Format::Rgb, Channel::Red, f64::NAN).is_none());
    }

    #[test]
    fn hex_field_parsing() {
        assert_eq!(
            parse_hex_field("00f", Format::Hex).map(|c| c.to_string()),
            Some("#0000ff".to_string())
        );
        assert!(parse_hex_field("#12345", Format::Hex).is_none());
        assert!(parse_hex_field("blue", Format::Hex).is_none());
    }

    #[test]
    fn summaries() {
        let locale = LanguagePack::default();
        assert_eq!(summary(&red(Format::Rgb), Format::Rgb, &locale), "RGB: 255 0 0");
        assert_eq!(summary(&red(Format::Hsl), Format::Hsl, &locale), "HSL: 0° 100% 50%");
        assert_eq!(summary(&red(Format::Hwb), Format::Hwb, &locale), "HWB: 0° 0% 0%");
        assert_eq!(summary(&red(Format::Hex), Format::Hex, &locale), "Hexadecimal: FF0000");
    }
}
