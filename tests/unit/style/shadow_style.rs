use super::*;

#[test]
fn empty_object_uses_defaults() {
    let style = ShadowStyle::from_json_str("{}").unwrap();
    assert_eq!(style, ShadowStyle::default());

    let cfg = style.resolve().unwrap();
    assert_eq!(cfg.color, DEFAULT_SHADOW_COLOR);
    assert_eq!(cfg.blur_steps, 8);
    assert_eq!((cfg.offset_x, cfg.offset_y), (0.0, 0.0));
}

#[test]
fn blur_is_truncated_to_whole_rings() {
    let style = ShadowStyle::from_json_str(
        r##"{ "color": "#ff000080", "blur": 6.9, "dx": -2.5, "dy": 4 }"##,
    )
    .unwrap();
    let cfg = style.resolve().unwrap();
    assert_eq!(cfg.color, Rgba8::new(255, 0, 0, 128));
    assert_eq!(cfg.blur_steps, 6);
    assert_eq!((cfg.offset_x, cfg.offset_y), (-2.5, 4.0));
}

#[test]
fn zero_blur_resolves_to_a_disabled_shadow() {
    let cfg = ShadowStyle::from_json_str(r#"{ "blur": 0.4 }"#)
        .unwrap()
        .resolve()
        .unwrap();
    assert!(!cfg.is_enabled());
}

#[test]
fn invalid_values_are_rejected() {
    let neg = ShadowStyle {
        blur: -1.0,
        ..ShadowStyle::default()
    };
    assert!(neg.resolve().is_err());

    let nan = ShadowStyle {
        dx: f64::NAN,
        ..ShadowStyle::default()
    };
    assert!(nan.resolve().is_err());

    let err = ShadowStyle::from_json_str(r#"{ "radius": 3 }"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn missing_file_is_reported() {
    let err = ShadowStyle::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
