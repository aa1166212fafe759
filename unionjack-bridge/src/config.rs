//! Bridge configuration.
//!
//! A JSON file describing the window and the displays to put in it. Looked
//! up from the first CLI argument, then `<config dir>/config.json`, and
//! falls back to the built-in layout when neither exists.
//!
//! ```json
//! {
//!   "window": { "title": "UnionJack", "width": 900, "height": 320 },
//!   "clear_color": "#101010",
//!   "displays": [
//!     { "length": 10, "text": "UNION JACK", "scale": 3.0, "placement": { "at": [20, 20] } },
//!     { "length": 8, "clock": "%H:%M:%S", "on": "#00ff66", "placement": { "below": 0 } }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use unionjack_core::Rgba;
use unionjack_core::display::DEFAULT_SLANT;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Longest display a config may ask for.
pub const MAX_DISPLAY_LENGTH: usize = 4096;

// ════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("display {index} is placed relative to display {target}, which is not before it")]
    ForwardReference { index: usize, target: usize },

    #[error("display {index}: length {length} exceeds the limit of {max}")]
    Length { index: usize, length: usize, max: usize },

    #[error("display {index} has both `text` and `clock`")]
    TextAndClock { index: usize },

    #[error("display {index}: {field} must be finite")]
    NotFinite { index: usize, field: &'static str },

    #[error("display {index}: invalid clock format {format:?}")]
    ClockFormat { index: usize, format: String },
}

// ════════════════════════════════════════════════════════════════════
// Schema
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "UnionJack".to_string(),
            width: 900,
            height: 320,
        }
    }
}

/// Where a display goes, absolutely or relative to an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    At([f32; 2]),
    Below(usize),
    RightOf(usize),
}

impl Default for Placement {
    fn default() -> Self {
        Placement::At([0.0, 0.0])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySpec {
    pub length: usize,
    /// Static text.
    pub text: Option<String>,
    /// strftime format; the display shows local time and updates itself.
    pub clock: Option<String>,
    pub scale: f32,
    pub slant: f32,
    #[serde(deserialize_with = "deserialize_color")]
    pub on: Option<Rgba>,
    #[serde(deserialize_with = "deserialize_color")]
    pub off: Option<Rgba>,
    pub placement: Placement,
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self {
            length: unionjack_core::DEFAULT_LENGTH,
            text: None,
            clock: None,
            scale: 1.0,
            slant: DEFAULT_SLANT,
            on: None,
            off: None,
            placement: Placement::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub window: WindowConfig,
    #[serde(deserialize_with = "deserialize_clear_color")]
    pub clear_color: Rgba,
    pub displays: Vec<DisplaySpec>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        let green_on = Rgba::rgb(0.2, 1.0, 0.4);
        let green_off = Rgba::rgb(0.03, 0.12, 0.05);
        Self {
            window: WindowConfig::default(),
            clear_color: Rgba::rgb(0.04, 0.04, 0.05),
            displays: vec![
                DisplaySpec {
                    length: 10,
                    text: Some("UNION JACK".to_string()),
                    scale: 3.0,
                    placement: Placement::At([24.0, 24.0]),
                    ..DisplaySpec::default()
                },
                DisplaySpec {
                    length: 8,
                    clock: Some("%H:%M:%S".to_string()),
                    scale: 3.0,
                    on: Some(green_on),
                    off: Some(green_off),
                    placement: Placement::Below(0),
                    ..DisplaySpec::default()
                },
                DisplaySpec {
                    length: 6,
                    text: Some("16-SEG".to_string()),
                    scale: 1.5,
                    on: Some(Rgba::rgb(1.0, 0.7, 0.1)),
                    off: Some(Rgba::rgb(0.15, 0.1, 0.02)),
                    placement: Placement::RightOf(1),
                    ..DisplaySpec::default()
                },
            ],
        }
    }
}

impl BridgeConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Relative placements must point backwards so displays can be laid out
    /// in one pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, spec) in self.displays.iter().enumerate() {
            if spec.length > MAX_DISPLAY_LENGTH {
                return Err(ConfigError::Length {
                    index,
                    length: spec.length,
                    max: MAX_DISPLAY_LENGTH,
                });
            }
            match spec.placement {
                Placement::Below(target) | Placement::RightOf(target) if target >= index => {
                    return Err(ConfigError::ForwardReference { index, target });
                }
                _ => {}
            }
            if spec.text.is_some() && spec.clock.is_some() {
                return Err(ConfigError::TextAndClock { index });
            }
            if let Some(format) = &spec.clock {
                let bad = StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
                if bad {
                    return Err(ConfigError::ClockFormat {
                        index,
                        format: format.clone(),
                    });
                }
            }
            if !spec.scale.is_finite() {
                return Err(ConfigError::NotFinite { index, field: "scale" });
            }
            if !spec.slant.is_finite() {
                return Err(ConfigError::NotFinite { index, field: "slant" });
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════
// Loading
// ════════════════════════════════════════════════════════════════════

/// Default config location, e.g. `~/.config/unionjack/config.json`.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("net", "UnionJack", "unionjack")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load from `explicit` if given, else the default location, else defaults.
///
/// A missing explicit path is an error; a missing default file is not.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<BridgeConfig> {
    if let Some(path) = explicit {
        return load_file(path);
    }
    match default_path() {
        Some(path) if path.is_file() => load_file(&path),
        _ => {
            tracing::info!("no config file, using built-in layout");
            Ok(BridgeConfig::default())
        }
    }
}

fn load_file(path: &Path) -> anyhow::Result<BridgeConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = BridgeConfig::from_json(&json)
        .with_context(|| format!("loading config {}", path.display()))?;
    tracing::info!(path = %path.display(), displays = config.displays.len(), "config loaded");
    Ok(config)
}

// ════════════════════════════════════════════════════════════════════
// Color Parsing
// ════════════════════════════════════════════════════════════════════

/// Colors may be written as `[r, g, b, a]`, `[r, g, b]`, `"#rrggbb[aa]"`,
/// or the `{ "r": .., "g": .., "b": .., "a": .. }` form the config saves.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Rgba([f32; 4]),
    Rgb([f32; 3]),
    Hex(String),
    Map(Rgba),
}

impl ColorSpec {
    fn resolve<E: serde::de::Error>(self) -> Result<Rgba, E> {
        match self {
            ColorSpec::Rgba(c) => Ok(Rgba::from(c)),
            ColorSpec::Rgb([r, g, b]) => Ok(Rgba::rgb(r, g, b)),
            ColorSpec::Map(c) => Ok(c),
            ColorSpec::Hex(s) => {
                Rgba::from_hex(&s).ok_or_else(|| E::custom(format!("invalid hex color {s:?}")))
            }
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Option<Rgba>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<ColorSpec>::deserialize(deserializer)? {
        Some(spec) => spec.resolve().map(Some),
        None => Ok(None),
    }
}

fn deserialize_clear_color<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    ColorSpec::deserialize(deserializer)?.resolve()
}
