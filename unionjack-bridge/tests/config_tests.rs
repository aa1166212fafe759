// unionjack-bridge/tests/config_tests.rs
//
// Configuration surface:
//   BridgeConfig::default()   — built-in layout is valid
//   BridgeConfig::from_json() — defaults, placements, colors, validation
//   config::load()            — explicit path, missing file

use std::io::Write;

use unionjack_bridge::config::{self, BridgeConfig, ConfigError, DisplaySpec, Placement};
use unionjack_core::Rgba;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}

// ════════════════════════════════════════════════════════════════════
// Defaults
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_default_config_is_valid() {
    let config = BridgeConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.displays.len(), 3);
    assert_eq!(config.window.title, "UnionJack");
}

#[test]
fn test_empty_object_uses_defaults() {
    let config = BridgeConfig::from_json("{}").unwrap();
    assert_eq!(config, BridgeConfig::default());
}

#[test]
fn test_display_spec_defaults() {
    let config = BridgeConfig::from_json(r#"{ "displays": [ {} ] }"#).unwrap();
    let spec = &config.displays[0];
    assert_eq!(spec.length, 10);
    assert!(approx_eq(spec.scale, 1.0));
    assert!(approx_eq(spec.slant, 0.2));
    assert_eq!(spec.placement, Placement::At([0.0, 0.0]));
    assert!(spec.on.is_none() && spec.off.is_none());
    assert!(spec.text.is_none() && spec.clock.is_none());
}

#[test]
fn test_partial_window_keeps_other_defaults() {
    let config = BridgeConfig::from_json(r#"{ "window": { "width": 640 } }"#).unwrap();
    assert_eq!(config.window.width, 640);
    assert_eq!(config.window.height, 320);
}

// ════════════════════════════════════════════════════════════════════
// Placement
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_placements_parse() {
    let json = r#"{
        "displays": [
            { "placement": { "at": [10, 20] } },
            { "placement": { "below": 0 } },
            { "placement": { "right_of": 1 } }
        ]
    }"#;
    let config = BridgeConfig::from_json(json).unwrap();
    assert_eq!(config.displays[0].placement, Placement::At([10.0, 20.0]));
    assert_eq!(config.displays[1].placement, Placement::Below(0));
    assert_eq!(config.displays[2].placement, Placement::RightOf(1));
}

#[test]
fn test_forward_reference_rejected() {
    let json = r#"{ "displays": [ { "placement": { "below": 1 } }, {} ] }"#;
    let err = BridgeConfig::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ForwardReference { index: 0, target: 1 }
    ));
}

#[test]
fn test_self_reference_rejected() {
    let json = r#"{ "displays": [ {}, { "placement": { "right_of": 1 } } ] }"#;
    assert!(matches!(
        BridgeConfig::from_json(json),
        Err(ConfigError::ForwardReference { index: 1, target: 1 })
    ));
}

// ════════════════════════════════════════════════════════════════════
// Colors
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_color_forms() {
    let json = r##"{
        "clear_color": "#000000",
        "displays": [
            { "on": [1.0, 0.5, 0.0, 1.0], "off": [0.1, 0.1, 0.1] },
            { "on": "#00ff00", "off": { "r": 0.0, "g": 0.2, "b": 0.0, "a": 1.0 } }
        ]
    }"##;
    let config = BridgeConfig::from_json(json).unwrap();
    assert_eq!(config.clear_color, Rgba::rgb(0.0, 0.0, 0.0));
    assert_eq!(config.displays[0].on, Some(Rgba::new(1.0, 0.5, 0.0, 1.0)));
    assert_eq!(config.displays[0].off, Some(Rgba::rgb(0.1, 0.1, 0.1)));
    assert_eq!(config.displays[1].on, Some(Rgba::rgb(0.0, 1.0, 0.0)));
    assert_eq!(config.displays[1].off, Some(Rgba::rgb(0.0, 0.2, 0.0)));
}

#[test]
fn test_bad_hex_color_is_parse_error() {
    let json = r##"{ "displays": [ { "on": "#zz0000" } ] }"##;
    assert!(matches!(
        BridgeConfig::from_json(json),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_serialized_config_reloads() {
    let config = BridgeConfig::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let back = BridgeConfig::from_json(&json).unwrap();
    assert_eq!(back, config);
}

// ════════════════════════════════════════════════════════════════════
// Validation
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_text_and_clock_conflict() {
    let json = r#"{ "displays": [ { "text": "HI", "clock": "%H" } ] }"#;
    assert!(matches!(
        BridgeConfig::from_json(json),
        Err(ConfigError::TextAndClock { index: 0 })
    ));
}

#[test]
fn test_bad_clock_format_rejected() {
    let json = r#"{ "displays": [ { "clock": "%Q" } ] }"#;
    assert!(matches!(
        BridgeConfig::from_json(json),
        Err(ConfigError::ClockFormat { index: 0, .. })
    ));
}

#[test]
fn test_non_finite_scale_rejected() {
    let mut config = BridgeConfig::default();
    config.displays.push(DisplaySpec {
        scale: f32::INFINITY,
        ..DisplaySpec::default()
    });
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotFinite { field: "scale", .. })
    ));
}

#[test]
fn test_oversized_length_rejected_before_allocation() {
    let json = r#"{ "displays": [ { "length": 2305843009213693951 } ] }"#;
    assert!(matches!(
        BridgeConfig::from_json(json),
        Err(ConfigError::Length { index: 0, length: 2305843009213693951, .. })
    ));
}

#[test]
fn test_length_limit_is_inclusive() {
    let mut config = BridgeConfig::default();
    config.displays.push(DisplaySpec {
        length: config::MAX_DISPLAY_LENGTH,
        ..DisplaySpec::default()
    });
    assert!(config.validate().is_ok());

    config.displays[3].length += 1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Length { index: 3, .. })
    ));
}

#[test]
fn test_garbage_json_rejected() {
    assert!(matches!(
        BridgeConfig::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
}

// ════════════════════════════════════════════════════════════════════
// Loading
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_load_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "window": {{ "title": "Bench" }},
             "displays": [ {{ "length": 4, "text": "TEST" }} ] }}"#
    )
    .unwrap();

    let config = config::load(Some(file.path())).unwrap();
    assert_eq!(config.window.title, "Bench");
    assert_eq!(config.displays.len(), 1);
    assert_eq!(config.displays[0].text.as_deref(), Some("TEST"));
}

#[test]
fn test_load_missing_explicit_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = config::load(Some(&missing)).unwrap_err();
    assert!(format!("{err:#}").contains("reading config"));
}

#[test]
fn test_load_invalid_file_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "displays": [ {{ "placement": {{ "below": 3 }} }} ] }}"#).unwrap();
    let err = config::load(Some(file.path())).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("loading config"));
    assert!(msg.contains("display 0"));
}

#[test]
fn test_default_path_ends_with_file_name() {
    if let Some(path) = config::default_path() {
        assert!(path.ends_with(config::CONFIG_FILE_NAME));
    }
}
