//! Human color naming for the hue knob's accessible description.

use crate::color::{CssColor, Format};
use crate::locale::LanguagePack;
use crate::math::round_part;

/// Localized coarse color name (white, grey, olive, …) for `color`.
///
/// Saturation is read from HSL when the picker works in HSL, from HSV otherwise.
pub fn appearance<'a>(color: &CssColor, format: Format, locale: &'a LanguagePack) -> &'a str {
    let (h, s_hsl, l) = color.to_hsl();
    let (_, s_hsv, v) = color.to_hsv();
    let hue = round_part(h * 360.0);
    let saturation_source = if format == Format::Hsl { s_hsl } else { s_hsv };
    let saturation = round_part(saturation_source * 100.0);
    let lightness = round_part(l * 100.0);
    let value = v * 100.0;

    if lightness == 100.0 && saturation == 0.0 {
        &locale.white
    } else if lightness == 0.0 {
        &locale.black
    } else if saturation == 0.0 {
        &locale.grey
    } else if !(15.0..345.0).contains(&hue) {
        &locale.red
    } else if hue < 45.0 {
        if value > 80.0 && saturation > 80.0 {
            &locale.orange
        } else {
            &locale.brown
        }
    } else if hue < 75.0 {
        if hue >= 54.0 && value < 80.0 {
            &locale.olive
        } else if hue > 46.0 && value < 80.0 && saturation > 90.0 {
            &locale.gold
        } else {
            &locale.yellow
        }
    } else if hue < 155.0 {
        if value < 68.0 { &locale.green } else { &locale.lime }
    } else if hue < 175.0 {
        &locale.teal
    } else if hue < 195.0 {
        &locale.cyan
    } else if hue < 255.0 {
        &locale.blue
    } else if hue < 270.0 {
        &locale.violet
    } else if hue < 295.0 {
        &locale.magenta
    } else {
        &locale.pink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(input: &str) -> String {
        let color = CssColor::new(input, Format::Rgb);
        appearance(&color, Format::Rgb, &LanguagePack::default()).to_string()
    }

    #[test]
    fn achromatic() {
        assert_eq!(name("white"), "white");
        assert_eq!(name("black"), "black");
        assert_eq!(name("#808080"), "grey");
    }

    #[test]
    fn hue_bands() {
        assert_eq!(name("red"), "red");
        assert_eq!(name("#ff8000"), "orange");
        assert_eq!(name("#804000"), "brown");
        assert_eq!(name("#ffff00"), "yellow");
        assert_eq!(name("#808000"), "olive");
        assert_eq!(name("#00ff00"), "lime");
        assert_eq!(name("#008000"), "green");
        assert_eq!(name("#00ffff"), "cyan");
        assert_eq!(name("#0000ff"), "blue");
        assert_eq!(name("#ff00ff"), "pink");
    }
}
