// read on startup, written back on first run so there's a file to edit
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::editor::loop_config::UpperBound;
use crate::pipeline::macro_def::{Macro, MacroType};
use crate::shared::{LOOP_COUNT_MAX, LOOP_COUNT_MIN};

const MACROTYPE_DIR: &str = ".macrotype";
const CONFIG_FILE: &str = "config.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // false = trust the count field's clamping and let >10000 through the edit path
    pub enforce_max_loop_count: bool,
    pub debug: bool,
    pub log_file: PathBuf,
    pub tick_ms: u64,
    // what the demo store starts with
    pub seed: Macro,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enforce_max_loop_count: true,
            debug: false,
            log_file: PathBuf::from("/tmp/macrotype.log"),
            tick_ms: 16, // ~60fps
            seed: Macro::new(MacroType::Single, None),
        }
    }
}

impl Config {
    pub fn upper_bound(&self) -> UpperBound {
        if self.enforce_max_loop_count {
            UpperBound::Enforce
        } else {
            UpperBound::WidgetOnly
        }
    }

    // the file is hand-edited, pull a seed count back into 1..=10000
    fn clamp_seed(mut self) -> Self {
        if let Some(n) = self.seed.loop_count {
            let clamped = n.clamp(LOOP_COUNT_MIN, LOOP_COUNT_MAX);
            if clamped != n {
                log::warn!("seed loop_count {} out of range, using {}", n, clamped);
                self.seed.loop_count = Some(clamped);
            }
        }
        self
    }
}

// <config_dir>/.macrotype/config.json
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(MACROTYPE_DIR).join(CONFIG_FILE)
}

pub fn load_config(config_dir: &Path) -> Option<Config> {
    let path = config_file_path(config_dir);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str::<Config>(&data).ok().map(Config::clamp_seed)
}

// Save the config to disk, making the directory if it doesn't exist already
pub fn save_config(config_dir: &Path, config: &Config) -> anyhow::Result<()> {
    let path = config_file_path(config_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?; // create .macrotype/ if needed
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}
