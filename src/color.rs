//! `CssColor`, the color value the picker commits and displays.
//!
//! Stores RGBA as f64 values in the 0.0–1.0 range together with the textual
//! [`Format`] it serializes to. Values are never mutated in place: every edit
//! builds a fresh `CssColor`, so the committed string and the numeric channels
//! can't drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::math;
use crate::names;

/// Textual output format of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Rgb,
    Hex,
    Hsl,
    Hwb,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Rgb, Format::Hex, Format::Hsl, Format::Hwb];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Rgb => "rgb",
            Format::Hex => "hex",
            Format::Hsl => "hsl",
            Format::Hwb => "hwb",
        }
    }

    /// Upper-case name, as shown in labels and placeholders.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Format::Rgb),
            "hex" => Ok(Format::Hex),
            "hsl" => Ok(Format::Hsl),
            "hwb" => Ok(Format::Hwb),
            other => Err(ColorError::Unrecognized(other.to_string())),
        }
    }
}

/// Hue, saturation, value and alpha, all 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

/// RGBA color with components in the 0.0–1.0 range and an output format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
    format: Format,
    valid: bool,
}

impl CssColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
    pub fn format(&self) -> Format {
        self.format
    }
    /// False when the color came from an unparseable string via [`CssColor::new`].
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for CssColor {
    fn default() -> Self {
        Self::from_rgba(0.0, 0.0, 0.0, 1.0, Format::Rgb)
    }
}

impl CssColor {
    /// Parse any supported CSS color syntax, keeping `format` for output.
    pub fn parse(input: &str, format: Format) -> Result<Self, ColorError> {
        let text = input.trim().to_ascii_lowercase();
        if text.is_empty() {
            return Err(ColorError::Empty);
        }
        if text == "transparent" {
            return Ok(Self::from_rgba(0.0, 0.0, 0.0, 0.0, format));
        }
        if Self::is_non_color(&text) {
            return Err(ColorError::NonColor(text));
        }
        if let Some(packed) = names::lookup(&text) {
            return Ok(Self::from_packed(packed, 1.0, format));
        }
        if let Some(open) = text.find('(') {
            return parse_function(&text, open, format);
        }
        parse_hex(&text, format).ok_or(ColorError::Unrecognized(text))
    }

    /// Lenient constructor: an unparseable input yields an invalid black.
    pub fn new(input: &str, format: Format) -> Self {
        match Self::parse(input, format) {
            Ok(color) => color,
            Err(err) => {
                log::debug!("color {input:?} not parsed: {err}");
                Self {
                    valid: false,
                    ..Self::from_rgba(0.0, 0.0, 0.0, 1.0, format)
                }
            }
        }
    }

    /// Whether `input` is a color keyword without a concrete value (`transparent`, `inherit`, …).
    pub fn is_non_color(input: &str) -> bool {
        let lower = input.trim().to_ascii_lowercase();
        names::NON_COLORS.contains(&lower.as_str())
    }

    /// Create from f64 RGBA (all 0.0–1.0).
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64, format: Format) -> Self {
        Self {
            r: math::unit(r),
            g: math::unit(g),
            b: math::unit(b),
            a: math::unit(a),
            format,
            valid: true,
        }
    }

    /// Create from 0–255 RGB values.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f64, format: Format) -> Self {
        Self::from_rgba(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a,
            format,
        )
    }

    fn from_packed(packed: u32, a: f64, format: Format) -> Self {
        Self::from_rgba8(
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
            a,
            format,
        )
    }

    /// Create from HSV + alpha (all 0.0–1.0).
    pub fn from_hsva(hsva: Hsva, format: Format) -> Self {
        let (r, g, b) = math::hsv_to_rgb(hsva.h, math::unit(hsva.s), math::unit(hsva.v));
        Self::from_rgba(r, g, b, hsva.a, format)
    }

    /// Create from HSL values (all 0.0–1.0).
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64, format: Format) -> Self {
        let (h, s, v) = math::hsl_to_hsv(h, math::unit(s), math::unit(l));
        Self::from_hsva(Hsva { h, s, v, a }, format)
    }

    /// Create from HWB values (all 0.0–1.0).
    pub fn from_hwba(h: f64, w: f64, b: f64, a: f64, format: Format) -> Self {
        let (h, s, v) = math::hwb_to_hsv(h, math::unit(w), math::unit(b));
        Self::from_hsva(Hsva { h, s, v, a }, format)
    }

    /// Same color, different output format.
    pub fn with_format(self, format: Format) -> Self {
        Self { format, ..self }
    }

    /// Same color, different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: math::unit(a),
            ..self
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Convert to HSV (all 0.0–1.0). Returns (h, s, v).
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        math::rgb_to_hsv(self.r, self.g, self.b)
    }

    pub fn to_hsva(&self) -> Hsva {
        let (h, s, v) = self.to_hsv();
        Hsva { h, s, v, a: self.a }
    }

    /// Convert to HSL (all 0.0–1.0). Returns (h, s, l).
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (h, s, v) = self.to_hsv();
        math::hsv_to_hsl(h, s, v)
    }

    /// Convert to HWB (all 0.0–1.0). Returns (h, w, b).
    pub fn to_hwb(&self) -> (f64, f64, f64) {
        let (h, s, v) = self.to_hsv();
        math::hsv_to_hwb(h, s, v)
    }

    /// Perceived brightness below 120 on the 0–255 scale.
    pub fn is_dark(&self) -> bool {
        let brightness = (self.r * 299.0 + self.g * 587.0 + self.b * 114.0) / 1000.0 * 255.0;
        brightness < 120.0
    }

    /// Upper-case `RRGGBB` without the `#` prefix.
    pub fn to_hex_digits(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// `rgb(…)`/`rgba(…)` regardless of the color's own format.
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        match self.alpha_suffix() {
            None => format!("rgb({r}, {g}, {b})"),
            Some(a) => format!("rgba({r}, {g}, {b}, {a})"),
        }
    }

    fn alpha_suffix(&self) -> Option<String> {
        let a = math::round_to(self.a, 2);
        (a < 1.0).then(|| math::fmt_decimal(a))
    }

    fn to_hex_string(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        let a = (self.a * 255.0).round() as u8;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    fn to_hsl_string(&self) -> String {
        let (h, s, l) = self.to_hsl();
        let h = math::round_part(h * 360.0) as i64 % 360;
        let s = math::round_part(s * 100.0) as i64;
        let l = math::round_part(l * 100.0) as i64;
        match self.alpha_suffix() {
            None => format!("hsl({h}, {s}%, {l}%)"),
            Some(a) => format!("hsla({h}, {s}%, {l}%, {a})"),
        }
    }

    fn to_hwb_string(&self) -> String {
        let (h, w, b) = self.to_hwb();
        let h = math::round_part(h * 360.0) as i64 % 360;
        let w = math::round_part(w * 100.0) as i64;
        let b = math::round_part(b * 100.0) as i64;
        match self.alpha_suffix() {
            None => format!("hwb({h}deg {w}% {b}%)"),
            Some(a) => format!("hwb({h}deg {w}% {b}% / {a})"),
        }
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.format {
            Format::Rgb => self.to_rgb_string(),
            Format::Hex => self.to_hex_string(),
            Format::Hsl => self.to_hsl_string(),
            Format::Hwb => self.to_hwb_string(),
        };
        f.write_str(&text)
    }
}

/// Hex with or without `#`, 3, 4, 6, or 8 digits.
fn parse_hex(text: &str, format: Format) -> Option<CssColor> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let (r, g, b, a) = match digits.len() {
        3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
        4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(CssColor::from_rgba8(r, g, b, a as f64 / 255.0, format))
}

/// `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `hsv()`, `hsva()`.
fn parse_function(text: &str, open: usize, format: Format) -> Result<CssColor, ColorError> {
    let name = text[..open].trim();
    let inner = text[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| ColorError::Unrecognized(text.to_string()))?;

    let (main, slash_alpha) = match inner.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha.trim())),
        None => (inner, None),
    };
    let mut parts: Vec<&str> = main
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if let Some(alpha) = slash_alpha {
        parts.push(alpha);
    }
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorError::Unrecognized(text.to_string()));
    }

    let bad = |channel: &'static str| ColorError::BadChannel {
        channel,
        input: text.to_string(),
    };
    let alpha = match parts.get(3) {
        Some(p) => parse_alpha(p).ok_or_else(|| bad("alpha"))?,
        None => 1.0,
    };

    match name {
        "rgb" | "rgba" => {
            let r = parse_rgb_channel(parts[0]).ok_or_else(|| bad("red"))?;
            let g = parse_rgb_channel(parts[1]).ok_or_else(|| bad("green"))?;
            let b = parse_rgb_channel(parts[2]).ok_or_else(|| bad("blue"))?;
            Ok(CssColor::from_rgba(r, g, b, alpha, format))
        }
        "hsl" | "hsla" => {
            let h = parse_hue(parts[0]).ok_or_else(|| bad("hue"))?;
            let s = parse_percent(parts[1]).ok_or_else(|| bad("saturation"))?;
            let l = parse_percent(parts[2]).ok_or_else(|| bad("lightness"))?;
            Ok(CssColor::from_hsla(h, s, l, alpha, format))
        }
        "hwb" => {
            let h = parse_hue(parts[0]).ok_or_else(|| bad("hue"))?;
            let w = parse_percent(parts[1]).ok_or_else(|| bad("whiteness"))?;
            let b = parse_percent(parts[2]).ok_or_else(|| bad("blackness"))?;
            Ok(CssColor::from_hwba(h, w, b, alpha, format))
        }
        "hsv" | "hsva" => {
            let h = parse_hue(parts[0]).ok_or_else(|| bad("hue"))?;
            let s = parse_percent(parts[1]).ok_or_else(|| bad("saturation"))?;
            let v = parse_percent(parts[2]).ok_or_else(|| bad("value"))?;
            Ok(CssColor::from_hsva(Hsva { h, s, v, a: alpha }, format))
        }
        _ => Err(ColorError::Unrecognized(text.to_string())),
    }
}

fn parse_number(token: &str) -> Option<f64> {
    let value = token.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// 0–255 or percentage → 0.0–1.0.
fn parse_rgb_channel(token: &str) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(pct) => Some(math::unit(parse_number(pct)? / 100.0)),
        None => Some(math::unit(parse_number(token)? / 255.0)),
    }
}

/// 0–1 or percentage → 0.0–1.0.
fn parse_alpha(token: &str) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(pct) => Some(math::unit(parse_number(pct)? / 100.0)),
        None => Some(math::unit(parse_number(token)?)),
    }
}

/// Percentage (the `%` sign is optional) → 0.0–1.0.
fn parse_percent(token: &str) -> Option<f64> {
    let number = token.strip_suffix('%').unwrap_or(token);
    Some(math::unit(parse_number(number)? / 100.0))
}

/// Angle with an optional unit → fraction of a turn in 0.0–1.0.
fn parse_hue(token: &str) -> Option<f64> {
    let (number, turns_per_unit) = if let Some(n) = token.strip_suffix("deg") {
        (n, 1.0 / 360.0)
    } else if let Some(n) = token.strip_suffix("grad") {
        (n, 1.0 / 400.0)
    } else if let Some(n) = token.strip_suffix("rad") {
        (n, 1.0 / std::f64::consts::TAU)
    } else if let Some(n) = token.strip_suffix("turn") {
        (n, 1.0)
    } else {
        (token, 1.0 / 360.0)
    };
    Some((parse_number(number)? * turns_per_unit).rem_euclid(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb8(input: &str) -> (u8, u8, u8) {
        CssColor::parse(input, Format::Rgb).unwrap().to_rgb8()
    }

    #[test]
    fn parses_hex_variants() {
        assert_eq!(rgb8("#FF0000"), (255, 0, 0));
        assert_eq!(rgb8("#f00"), (255, 0, 0));
        assert_eq!(rgb8("00ff00"), (0, 255, 0));
        let c = CssColor::parse("#0000ff80", Format::Hex).unwrap();
        assert_eq!(c.to_rgb8(), (0, 0, 255));
        assert!((c.a() - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parses_functional_syntax() {
        assert_eq!(rgb8("rgb(37, 84, 189)"), (37, 84, 189));
        assert_eq!(rgb8("rgba(37 84 189 / 50%)"), (37, 84, 189));
        assert_eq!(rgb8("hsl(120, 100%, 50%)"), (0, 255, 0));
        assert_eq!(rgb8("hsl(0.5turn 100% 50%)"), (0, 255, 255));
        assert_eq!(rgb8("hwb(240deg 0% 0%)"), (0, 0, 255));
        assert_eq!(rgb8("hsv(60, 100%, 100%)"), (255, 255, 0));
    }

    #[test]
    fn parses_names_and_transparent() {
        assert_eq!(rgb8("Red"), (255, 0, 0));
        let t = CssColor::parse("transparent", Format::Rgb).unwrap();
        assert_eq!(t.a(), 0.0);
        assert_eq!(t.to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(CssColor::parse("  ", Format::Rgb), Err(ColorError::Empty));
        assert!(CssColor::parse("rgb(1, 2)", Format::Rgb).is_err());
        assert!(CssColor::parse("rgb(a, b, c)", Format::Rgb).is_err());
        assert!(CssColor::parse("#12345", Format::Rgb).is_err());
        assert!(matches!(
            CssColor::parse("inherit", Format::Rgb),
            Err(ColorError::NonColor(_))
        ));
        assert!(!CssColor::new("nope", Format::Rgb).is_valid());
    }

    #[test]
    fn serializes_each_format() {
        let red = CssColor::parse("#FF0000", Format::Rgb).unwrap();
        assert_eq!(red.to_string(), "rgb(255, 0, 0)");
        assert_eq!(red.with_format(Format::Hex).to_string(), "#ff0000");
        assert_eq!(red.with_format(Format::Hsl).to_string(), "hsl(0, 100%, 50%)");
        assert_eq!(red.with_format(Format::Hwb).to_string(), "hwb(0deg 0% 0%)");

        let half = red.with_alpha(0.5);
        assert_eq!(half.to_string(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(half.with_format(Format::Hex).to_string(), "#ff000080");
        assert_eq!(half.with_format(Format::Hsl).to_string(), "hsla(0, 100%, 50%, 0.5)");
        assert_eq!(half.with_format(Format::Hwb).to_string(), "hwb(0deg 0% 0% / 0.5)");
    }

    #[test]
    fn darkness_classification() {
        assert!(CssColor::new("navy", Format::Rgb).is_dark());
        assert!(!CssColor::new("yellow", Format::Rgb).is_dark());
    }

    #[test]
    fn hsva_round_trip() {
        let c = CssColor::new("rgb(37, 84, 189)", Format::Rgb);
        let back = CssColor::from_hsva(c.to_hsva(), Format::Rgb);
        assert_eq!(back.to_string(), "rgb(37, 84, 189)");
    }

    #[test]
    fn format_from_str() {
        assert_eq!("HWB".parse::<Format>(), Ok(Format::Hwb));
        assert!("cmyk".parse::<Format>().is_err());
    }
}
