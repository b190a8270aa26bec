//! Game settings from presets, YAML files and command-line overrides.
//!
//! Layers, lowest first: variant preset, config file, individual flags. A
//! config file only needs the keys it wants to change.

use anyhow::{Context, Result, bail};
use log::info;
use serde_yaml_ng::Value;
use std::path::Path;

use crate::game::GameConfig;

/// Flags that override single settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub ticks_per_second: Option<u32>,
}

/// Apply YAML `content` on top of `base`
pub fn merge_yaml(base: &GameConfig, content: &str) -> Result<GameConfig> {
    let layer: Value = serde_yaml_ng::from_str(content).context("Failed to parse config YAML")?;
    let mut merged = serde_yaml_ng::to_value(base).context("Failed to serialize base config")?;

    match (layer, &mut merged) {
        (Value::Null, _) => {}
        (Value::Mapping(layer), Value::Mapping(target)) => {
            for (key, value) in layer {
                target.insert(key, value);
            }
        }
        _ => bail!("Config file must be a mapping of setting names to values"),
    }

    serde_yaml_ng::from_value(merged).context("Invalid value in config file")
}

pub fn load_file(base: &GameConfig, path: &Path) -> Result<GameConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    merge_yaml(base, &content).with_context(|| format!("In config file {}", path.display()))
}

/// Build the final configuration and check it before any terminal setup
pub fn resolve(preset: GameConfig, file: Option<&Path>, overrides: &Overrides) -> Result<GameConfig> {
    let mut config = match file {
        Some(path) => load_file(&preset, path)?,
        None => preset,
    };

    if let Some(width) = overrides.width {
        config.grid_width = width;
    }
    if let Some(height) = overrides.height {
        config.grid_height = height;
    }
    if let Some(tps) = overrides.ticks_per_second {
        config.ticks_per_second = tps;
    }

    config.validate().context("Invalid game configuration")?;
    info!("Resolved config: {:?}", config);
    Ok(config)
}
