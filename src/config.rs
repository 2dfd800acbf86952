//! Picker configuration: TOML file loading, CLI overrides, and defaults.
//!
//! Resolution order (first found wins, values merge/override):
//! 1. CLI flags (`--theme`, `--row-height`, `--log-file`, start path)
//! 2. Explicit `--config` file
//! 3. `$PICK_CONFIG` environment variable (path to config file)
//! 4. Project-local `.pick.toml` in the current working directory
//! 5. Global `~/.config/pick/config.toml`
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

// ── Section configs ──────────────────────────────────────────────────────────

/// General dialog settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory to start browsing in (overridden by CLI positional arg).
    pub start_path: Option<PathBuf>,
    /// Frame period in milliseconds.
    pub tick_ms: Option<u64>,
}

/// Geometry and glyph settings for the entry list.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Terminal rows per entry. 3 or more draws bordered cells.
    pub row_height: Option<u16>,
    /// Use nerd font icons in front of entry names.
    pub use_icons: Option<bool>,
    /// Replacement for the key hint line at the bottom.
    pub help_text: Option<String>,
}

/// Color overrides for the `custom` theme scheme.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeColorsConfig {
    pub background: Option<String>,
    pub text_fg: Option<String>,
    pub directory_fg: Option<String>,
    pub cell_border_fg: Option<String>,
    pub highlight_fg: Option<String>,
    pub highlight_bg: Option<String>,
    pub separator_fg: Option<String>,
    pub scrollbar_track_fg: Option<String>,
    pub scrollbar_thumb_fg: Option<String>,
    pub help_fg: Option<String>,
}

/// Theme configuration section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "dark", "light", "classic", "custom".
    pub scheme: Option<String>,
    /// Custom color overrides.
    pub custom: Option<ThemeColorsConfig>,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path. Logging is off when unset.
    pub file: Option<PathBuf>,
    /// Default filter level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level picker configuration.
///
/// All fields are optional so that partial configs from different sources
/// can be merged together (CLI overrides file, file overrides defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

// ── Default constants ────────────────────────────────────────────────────────

/// Default frame period (about 60 frames per second).
pub const DEFAULT_TICK_MS: u64 = 16;
/// Default rows per entry: a bordered cell.
pub const DEFAULT_ROW_HEIGHT: u16 = 3;
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ── Config file locator ──────────────────────────────────────────────────────

/// Return the list of candidate config file paths in priority order.
///
/// Does NOT include the CLI `--config` path; that is handled separately.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("PICK_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".pick.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("pick").join("config.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning printed to stderr).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return None,
    };
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self`; `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                start_path: other
                    .general
                    .start_path
                    .clone()
                    .or(self.general.start_path),
                tick_ms: other.general.tick_ms.or(self.general.tick_ms),
            },
            layout: LayoutConfig {
                row_height: other.layout.row_height.or(self.layout.row_height),
                use_icons: other.layout.use_icons.or(self.layout.use_icons),
                help_text: other
                    .layout
                    .help_text
                    .clone()
                    .or(self.layout.help_text),
            },
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
                custom: other.theme.custom.clone().or(self.theme.custom),
            },
            logging: LoggingConfig {
                file: other.logging.file.clone().or(self.logging.file),
                level: other.logging.level.clone().or(self.logging.level),
            },
        }
    }

    /// Load the final merged configuration.
    ///
    /// `cli_config_path` is an explicit config file path from `--config`.
    /// `cli_overrides` are partial overrides derived from CLI flags.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        let mut config = AppConfig::default();

        // Walk in reverse so that highest-priority (env var) overwrites lower.
        for path in candidate_paths().iter().rev() {
            if let Some(file_cfg) = load_file(path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(cli_path) = cli_config_path {
            if let Some(file_cfg) = load_file(cli_path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(overrides) = cli_overrides {
            config = config.merge(overrides);
        }

        config
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    /// Starting directory, if one was configured.
    pub fn start_path(&self) -> Option<&Path> {
        self.general.start_path.as_deref()
    }

    /// Frame period in milliseconds. Never zero.
    pub fn tick_ms(&self) -> u64 {
        self.general.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(1)
    }

    /// Terminal rows per entry. Never zero.
    pub fn row_height(&self) -> u16 {
        self.layout.row_height.unwrap_or(DEFAULT_ROW_HEIGHT).max(1)
    }

    /// Whether to use nerd font icons.
    pub fn use_icons(&self) -> bool {
        self.layout.use_icons.unwrap_or(false)
    }

    /// Configured help line, if any.
    pub fn help_text(&self) -> Option<&str> {
        self.layout.help_text.as_deref()
    }

    /// Theme scheme: "dark", "light", "classic", or "custom".
    pub fn theme_scheme(&self) -> &str {
        self.theme.scheme.as_deref().unwrap_or("dark")
    }

    /// Log file path, if logging is enabled.
    pub fn log_file(&self) -> Option<&Path> {
        self.logging.file.as_deref()
    }

    /// Default log filter level.
    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
