use std::collections::HashMap;

use floem_color_dropdown::{
    ColorKeyword, ConfigError, Format, Lang, LanguagePack, PickerController, PickerOptions,
    SequentialIds, StaticGeometry, Theme,
};

fn build(options: PickerOptions) -> PickerController<StaticGeometry> {
    PickerController::new(options, StaticGeometry::new(1280.0, 800.0), &SequentialIds::new("cp"))
}

#[test]
fn json_props_in_camel_case() {
    let options = PickerOptions::from_json(
        r##"{
            "id": "brand",
            "value": "#2554BD",
            "format": "hsl",
            "theme": "light",
            "lang": "fr",
            "className": "wide",
            "colorPresets": {"hue": 120, "hueSteps": 6, "lightSteps": 5},
            "colorKeywords": ["transparent", {"Default": "rgb(37, 84, 189)"}]
        }"##,
    )
    .unwrap();
    assert_eq!(options.id.as_deref(), Some("brand"));
    assert_eq!(options.format, Format::Hsl);
    assert_eq!(options.theme, Theme::Light);
    assert_eq!(options.lang, Lang::Fr);
    let presets = options.color_presets.unwrap();
    assert_eq!((presets.hue_steps, presets.light_steps, presets.saturation), (6, 5, None));
    assert_eq!(
        options.color_keywords.as_deref().unwrap()[1],
        ColorKeyword::labeled("Default", "rgb(37, 84, 189)")
    );

    let c = build(options);
    assert_eq!(c.id(), "brand");
    assert!(c.value().starts_with("hsl("));
    assert_eq!(c.presets().len(), 30);
    assert!(c.has_menu());
    assert!(c.snapshot().root_class.starts_with("color-picker wide"));
}

#[test]
fn missing_fields_use_defaults() {
    let options = PickerOptions::from_json("{}").unwrap();
    assert_eq!(options, PickerOptions::default());
    let c = build(options);
    assert_eq!(c.id(), "cp-1");
    assert_eq!(c.value(), "rgb(255, 0, 0)");
    assert!(!c.has_menu());
}

#[test]
fn zero_steps_are_rejected() {
    let err = PickerOptions::from_json(r#"{"colorPresets": {"hue": 0, "hueSteps": 0, "lightSteps": 10}}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPresets(_)));

    let err = PickerOptions::from_json(r#"{"format": "cmyk"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn transparent_keyword_is_selectable() {
    let options = PickerOptions::new().with_keywords(["transparent", "currentColor"]);
    let mut c = build(options);
    assert!(c.select_keyword(0));
    assert_eq!(c.value(), "rgba(0, 0, 0, 0)");
    assert!(c.select_keyword(1));
    assert_eq!(c.value(), "rgb(0, 0, 0)");
}

#[test]
fn complete_locale_override_wins() {
    let pack = serde_json::to_value(LanguagePack::builtin(Lang::En)).unwrap();
    let mut strings: HashMap<String, String> = serde_json::from_value(pack).unwrap();
    assert_eq!(strings.len(), 35);
    strings.insert("placeholder".into(), "Pick a % colour".into());
    let c = build(PickerOptions::new().with_lang(Lang::De).with_locale(strings.clone()));
    assert_eq!(c.snapshot().placeholder, "Pick a RGB colour");

    // A partial map falls back to the built-in language.
    strings.remove("pink");
    let partial = build(PickerOptions::new().with_lang(Lang::En).with_locale(strings));
    assert_eq!(partial.snapshot().placeholder, "Type colour in RGB format");
}

#[test]
fn caller_placeholder_is_used_verbatim() {
    let c = build(PickerOptions::new().with_placeholder("Brand colour"));
    assert_eq!(c.snapshot().placeholder, "Brand colour");
}
