//! Label strings and color appearance names, per language.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Language codes the picker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ru,
    Ar,
    Fr,
    De,
    Ro,
    Es,
    Pl,
    Pt,
    Zh,
    Ja,
    Ko,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
            Lang::Ar => "ar",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::Ro => "ro",
            Lang::Es => "es",
            Lang::Pl => "pl",
            Lang::Pt => "pt",
            Lang::Zh => "zh",
            Lang::Ja => "ja",
            Lang::Ko => "ko",
        }
    }
}

/// Every string the picker renders: 18 labels and 17 color names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePack {
    pub picker_label: String,
    pub appearance_label: String,
    pub value_label: String,
    pub toggle_label: String,
    pub placeholder: String,
    pub presets_label: String,
    pub defaults_label: String,
    pub format_label: String,
    pub alpha_label: String,
    pub hex_label: String,
    pub hue_label: String,
    pub whiteness_label: String,
    pub blackness_label: String,
    pub saturation_label: String,
    pub lightness_label: String,
    pub red_label: String,
    pub green_label: String,
    pub blue_label: String,
    pub white: String,
    pub black: String,
    pub grey: String,
    pub red: String,
    pub orange: String,
    pub brown: String,
    pub gold: String,
    pub olive: String,
    pub yellow: String,
    pub lime: String,
    pub green: String,
    pub teal: String,
    pub cyan: String,
    pub blue: String,
    pub violet: String,
    pub magenta: String,
    pub pink: String,
}

/// JSON key names, in declaration order.
pub const KEYS: [&str; 35] = [
    "pickerLabel",
    "appearanceLabel",
    "valueLabel",
    "toggleLabel",
    "placeholder",
    "presetsLabel",
    "defaultsLabel",
    "formatLabel",
    "alphaLabel",
    "hexLabel",
    "hueLabel",
    "whitenessLabel",
    "blacknessLabel",
    "saturationLabel",
    "lightnessLabel",
    "redLabel",
    "greenLabel",
    "blueLabel",
    "white",
    "black",
    "grey",
    "red",
    "orange",
    "brown",
    "gold",
    "olive",
    "yellow",
    "lime",
    "green",
    "teal",
    "cyan",
    "blue",
    "violet",
    "magenta",
    "pink",
];

impl LanguagePack {
    /// Built-in pack for `lang`; languages without a table use English.
    pub fn builtin(lang: Lang) -> Self {
        let table = match lang {
            Lang::En => &EN,
            Lang::Fr => &FR,
            Lang::De => &DE,
            Lang::Es => &ES,
            Lang::Ro => &RO,
            other => {
                log::debug!("no built-in strings for {}, using en", other.code());
                &EN
            }
        };
        Self::from_table(table)
    }

    /// Build a pack from a full override map. Every key in [`KEYS`] must be present.
    pub fn from_overrides(map: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut values: [&str; 35] = [""; 35];
        for (slot, key) in values.iter_mut().zip(KEYS) {
            *slot = map
                .get(key)
                .map(String::as_str)
                .ok_or_else(|| ConfigError::MissingLocaleKey(key.to_string()))?;
        }
        Ok(Self::from_table(&values))
    }

    /// The pack used by a picker: a complete override wins, otherwise the built-in table.
    pub fn resolve(lang: Lang, overrides: Option<&HashMap<String, String>>) -> Self {
        if let Some(map) = overrides {
            match Self::from_overrides(map) {
                Ok(pack) => return pack,
                Err(err) => log::warn!("ignoring partial locale override: {err}"),
            }
        }
        Self::builtin(lang)
    }

    /// Placeholder with `%` replaced by the format name.
    pub fn placeholder_for(&self, format_label: &str) -> String {
        self.placeholder.replace('%', format_label)
    }

    fn from_table(t: &[&str; 35]) -> Self {
        let s = |i: usize| t[i].to_string();
        Self {
            picker_label: s(0),
            appearance_label: s(1),
            value_label: s(2),
            toggle_label: s(3),
            placeholder: s(4),
            presets_label: s(5),
            defaults_label: s(6),
            format_label: s(7),
            alpha_label: s(8),
            hex_label: s(9),
            hue_label: s(10),
            whiteness_label: s(11),
            blackness_label: s(12),
            saturation_label: s(13),
            lightness_label: s(14),
            red_label: s(15),
            green_label: s(16),
            blue_label: s(17),
            white: s(18),
            black: s(19),
            grey: s(20),
            red: s(21),
            orange: s(22),
            brown: s(23),
            gold: s(24),
            olive: s(25),
            yellow: s(26),
            lime: s(27),
            green: s(28),
            teal: s(29),
            cyan: s(30),
            blue: s(31),
            violet: s(32),
            magenta: s(33),
            pink: s(34),
        }
    }
}

impl Default for LanguagePack {
    fn default() -> Self {
        Self::builtin(Lang::En)
    }
}

const EN: [&str; 35] = [
    "Colour Picker",
    "Colour Appearance",
    "Colour Value",
    "Select Colour",
    "Type colour in % format",
    "Colour Presets",
    "Colour Defaults",
    "Format",
    "Alpha",
    "Hexadecimal",
    "Hue",
    "Whiteness",
    "Blackness",
    "Saturation",
    "Lightness",
    "Red",
    "Green",
    "Blue",
    "white",
    "black",
    "grey",
    "red",
    "orange",
    "brown",
    "gold",
    "olive",
    "yellow",
    "lime",
    "green",
    "teal",
    "cyan",
    "blue",
    "violet",
    "magenta",
    "pink",
];

const FR: [&str; 35] = [
    "Sélecteur de couleurs",
    "Apparence de la couleur",
    "Valeur de la couleur",
    "Choisir une couleur",
    "Saisir la couleur au format %",
    "Couleurs prédéfinies",
    "Couleurs par défaut",
    "Format",
    "Alpha",
    "Hexadécimal",
    "Teinte",
    "Blancheur",
    "Noirceur",
    "Saturation",
    "Luminosité",
    "Rouge",
    "Vert",
    "Bleu",
    "blanc",
    "noir",
    "gris",
    "rouge",
    "orange",
    "brun",
    "or",
    "olive",
    "jaune",
    "citron vert",
    "vert",
    "sarcelle",
    "cyan",
    "bleu",
    "violet",
    "magenta",
    "rose",
];

const DE: [&str; 35] = [
    "Farbwähler",
    "Farbaussehen",
    "Farbwert",
    "Farbe auswählen",
    "Farbe im %-Format eingeben",
    "Farbvorgaben",
    "Standardfarben",
    "Format",
    "Alpha",
    "Hexadezimal",
    "Farbton",
    "Weißanteil",
    "Schwarzanteil",
    "Sättigung",
    "Helligkeit",
    "Rot",
    "Grün",
    "Blau",
    "weiß",
    "schwarz",
    "grau",
    "rot",
    "orange",
    "braun",
    "gold",
    "oliv",
    "gelb",
    "limette",
    "grün",
    "petrol",
    "cyan",
    "blau",
    "violett",
    "magenta",
    "rosa",
];

const ES: [&str; 35] = [
    "Selector de color",
    "Apariencia del color",
    "Valor del color",
    "Seleccionar color",
    "Escriba el color en formato %",
    "Colores predefinidos",
    "Colores por defecto",
    "Formato",
    "Alfa",
    "Hexadecimal",
    "Tono",
    "Blancura",
    "Negrura",
    "Saturación",
    "Luminosidad",
    "Rojo",
    "Verde",
    "Azul",
    "blanco",
    "negro",
    "gris",
    "rojo",
    "naranja",
    "marrón",
    "oro",
    "oliva",
    "amarillo",
    "lima",
    "verde",
    "verde azulado",
    "cian",
    "azul",
    "violeta",
    "magenta",
    "rosa",
];

const RO: [&str; 35] = [
    "Selector de culoare",
    "Aspectul culorii",
    "Valoarea culorii",
    "Selectează culoarea",
    "Introdu culoarea în format %",
    "Culori presetate",
    "Culori implicite",
    "Format",
    "Alfa",
    "Hexazecimal",
    "Nuanță",
    "Alb",
    "Negru",
    "Saturație",
    "Luminozitate",
    "Roșu",
    "Verde",
    "Albastru",
    "alb",
    "negru",
    "gri",
    "roșu",
    "portocaliu",
    "maro",
    "auriu",
    "oliv",
    "galben",
    "verde lime",
    "verde",
    "turcoaz",
    "cyan",
    "albastru",
    "violet",
    "magenta",
    "roz",
];
