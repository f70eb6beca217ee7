//! Level definitions, either built in or parsed from a TOML table.

use std::{collections::BTreeMap, path::Path};

use anyhow::{bail, Context, Result};
use asteroid_attack_core::LevelConfig;
use serde::Deserialize;

/// Number of levels the built-in progression offers.
const BUILT_IN_LEVELS: u32 = 6;
/// Number of distinct backdrops the presentation layer ships with.
const BACKGROUND_COUNT: u32 = 6;

#[derive(Debug, Deserialize)]
struct LevelsFile {
    #[serde(default)]
    levels: Vec<LevelEntry>,
}

#[derive(Debug, Deserialize)]
struct LevelEntry {
    level: u32,
    asteroid_count: u32,
    base_speed: f32,
    background: u32,
}

/// Ordered lookup from level number to the parameters that level applies.
#[derive(Debug)]
pub(crate) struct LevelTable {
    entries: BTreeMap<u32, LevelConfig>,
}

impl Default for LevelTable {
    fn default() -> Self {
        let entries = (1..=BUILT_IN_LEVELS)
            .map(|level| {
                let config = LevelConfig {
                    asteroid_count: level,
                    base_speed: 2.0,
                    background: (level - 1) % BACKGROUND_COUNT,
                };
                (level, config)
            })
            .collect();
        Self { entries }
    }
}

impl LevelTable {
    /// Parses a level table from a TOML file on disk.
    pub(crate) fn from_toml_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read level table {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid level table {}", path.display()))
    }

    /// Parses a level table from TOML text.
    pub(crate) fn from_toml(text: &str) -> Result<Self> {
        let file: LevelsFile = toml::from_str(text).context("malformed level table")?;
        if file.levels.is_empty() {
            bail!("level table defines no levels");
        }
        let mut entries = BTreeMap::new();
        for entry in file.levels {
            if entry.level == 0 {
                bail!("level numbers start at 1");
            }
            let config = LevelConfig {
                asteroid_count: entry.asteroid_count,
                base_speed: entry.base_speed,
                background: entry.background,
            };
            if entries.insert(entry.level, config).is_some() {
                bail!("level {} is defined twice", entry.level);
            }
        }
        Ok(Self { entries })
    }

    /// Looks up the configuration for the requested level number.
    pub(crate) fn config(&self, level: u32) -> Option<LevelConfig> {
        self.entries.get(&level).copied()
    }
}
