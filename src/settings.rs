use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings file name, resolved next to the executable.
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Exact title of the window the decorations attach to.
    /// Defaults to `"Steam"` when the field is missing.
    #[serde(default = "default_target_title")]
    pub target_title: String,
    /// Approximate width of the target's centered content column in pixels.
    /// Everything left and right of it counts as margin.
    #[serde(default = "default_content_width")]
    pub content_width: i32,
    /// Number of decorations scattered into each side margin.
    #[serde(default = "default_per_side")]
    pub per_side: usize,
    /// Interval between target window polls in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Pixels left clear below the target's top edge so decorations never
    /// cover its title and menu band.
    #[serde(default = "default_top_margin")]
    pub top_margin: i32,
    /// Decoration image, resolved relative to the executable directory
    /// unless absolute.
    #[serde(default = "default_image_path")]
    pub image_path: String,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional log file. If `None`, log output goes to stderr only.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_target_title() -> String {
    "Steam".into()
}

fn default_content_width() -> i32 {
    1000
}

fn default_per_side() -> usize {
    2
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_top_margin() -> i32 {
    40
}

fn default_image_path() -> String {
    "buffalo.png".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_title: default_target_title(),
            content_width: default_content_width(),
            per_side: default_per_side(),
            poll_interval_ms: default_poll_interval_ms(),
            top_margin: default_top_margin(),
            image_path: default_image_path(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or empty file yields defaults;
    /// malformed JSON is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
