//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tabdock/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::geometry::ArcLayout;
use crate::core::menu::{MenuTimings, TapPolicy};
use crate::core::navbar::NavbarSettings;
use crate::core::tab::Tab;
use crate::core::tab_bar::EmphasisTimings;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TabdockConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_tab: Option<Tab>,
    pub log_level: Option<String>,
    pub tap_policy: Option<TapPolicy>,
    pub fps: Option<u16>,
    pub ascii_glyphs: Option<bool>,
}

/// All values in milliseconds.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimationConfig {
    pub open_ms: Option<u64>,
    pub pop_ms: Option<u64>,
    pub open_stagger_ms: Option<u64>,
    pub close_ms: Option<u64>,
    pub retract_ms: Option<u64>,
    pub close_stagger_ms: Option<u64>,
    pub action_pause_ms: Option<u64>,
    pub emphasis_up_ms: Option<u64>,
    pub emphasis_settle_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub base_distance: Option<f32>,
    pub distance_step: Option<f32>,
    pub safe_area_bottom: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FPS: u16 = 60;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_SAFE_AREA_BOTTOM: u16 = 0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub initial_tab: Tab,
    pub log_level: LevelFilter,
    pub fps: u16,
    pub ascii_glyphs: bool,
    pub safe_area_bottom: u16,
    pub navbar: NavbarSettings,
    /// Values that were rejected during resolution. Resolution can run
    /// before the logger exists, so the caller logs these.
    pub warnings: Vec<String>,
}

impl ResolvedConfig {
    /// Time between redraws while something is animating.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tabdock/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tabdock").join("config.toml"))
}

/// Load config from `override_path`, or `~/.tabdock/config.toml` by default.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `TabdockConfig::default()`. An explicit path that doesn't exist is
/// an I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(override_path: Option<&Path>) -> Result<TabdockConfig, ConfigError> {
    if let Some(path) = override_path {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TabdockConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TabdockConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<TabdockConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TabdockConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Tabdock Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_tab = "home"        # "home", "stats", "plan", "profile" (or TABDOCK_TAB)
# log_level = "debug"         # "off", "error", "warn", "info", "debug", "trace"
# tap_policy = "ignore"       # taps during a transition: "ignore" or "queue" (or TABDOCK_TAP_POLICY)
# fps = 60
# ascii_glyphs = false

# [animation]
# open_ms = 300               # FAB rotation + overlay fade-in
# pop_ms = 350                # per-button pop-in
# open_stagger_ms = 100
# close_ms = 200              # FAB rotation + overlay fade-out
# retract_ms = 200            # per-button retraction
# close_stagger_ms = 60
# action_pause_ms = 100       # pause between fade-out and retraction after an action
# emphasis_up_ms = 150
# emphasis_settle_ms = 150

# [layout]
# base_distance = 120.0       # distance of the first action button from the FAB
# distance_step = 20.0        # added per button
# safe_area_bottom = 0        # blank rows below the tab bar
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Values that can come from the environment (or a `.env` file).
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub tab: Option<String>,
    pub tap_policy: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            tab: std::env::var("TABDOCK_TAB").ok(),
            tap_policy: std::env::var("TABDOCK_TAP_POLICY").ok(),
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_tab` and `cli_ascii` come from CLI flags (None / false = not specified).
pub fn resolve(
    config: &TabdockConfig,
    env: &EnvOverrides,
    cli_tab: Option<Tab>,
    cli_ascii: bool,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Tab: CLI → env → config → default
    let env_tab = env.tab.as_deref().and_then(|raw| match raw.parse::<Tab>() {
        Ok(tab) => Some(tab),
        Err(e) => {
            warnings.push(format!("Ignoring TABDOCK_TAB: {e}"));
            None
        }
    });
    let initial_tab = cli_tab
        .or(env_tab)
        .or(config.general.default_tab)
        .unwrap_or_default();

    // Tap policy: env → config → default
    let env_policy = env
        .tap_policy
        .as_deref()
        .and_then(|raw| match raw.parse::<TapPolicy>() {
            Ok(policy) => Some(policy),
            Err(e) => {
                warnings.push(format!("Ignoring TABDOCK_TAP_POLICY: {e}"));
                None
            }
        });
    let tap_policy = env_policy
        .or(config.general.tap_policy)
        .unwrap_or_default();

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|raw| match raw.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warnings.push(format!("Unknown log level '{raw}', using {DEFAULT_LOG_LEVEL}"));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        initial_tab,
        log_level,
        fps: config.general.fps.unwrap_or(DEFAULT_FPS),
        ascii_glyphs: cli_ascii || config.general.ascii_glyphs.unwrap_or(false),
        safe_area_bottom: config
            .layout
            .safe_area_bottom
            .unwrap_or(DEFAULT_SAFE_AREA_BOTTOM),
        navbar: NavbarSettings {
            menu: resolve_menu_timings(&config.animation),
            emphasis: resolve_emphasis_timings(&config.animation),
            layout: resolve_layout(&config.layout),
            tap_policy,
        },
        warnings,
    }
}

fn millis_or(value: Option<u64>, default: Duration) -> Duration {
    value.map(Duration::from_millis).unwrap_or(default)
}

fn resolve_menu_timings(animation: &AnimationConfig) -> MenuTimings {
    let defaults = MenuTimings::default();
    MenuTimings {
        open: millis_or(animation.open_ms, defaults.open),
        pop: millis_or(animation.pop_ms, defaults.pop),
        open_stagger: millis_or(animation.open_stagger_ms, defaults.open_stagger),
        close: millis_or(animation.close_ms, defaults.close),
        retract: millis_or(animation.retract_ms, defaults.retract),
        close_stagger: millis_or(animation.close_stagger_ms, defaults.close_stagger),
        action_pause: millis_or(animation.action_pause_ms, defaults.action_pause),
    }
}

fn resolve_emphasis_timings(animation: &AnimationConfig) -> EmphasisTimings {
    let defaults = EmphasisTimings::default();
    EmphasisTimings {
        up: millis_or(animation.emphasis_up_ms, defaults.up),
        settle: millis_or(animation.emphasis_settle_ms, defaults.settle),
    }
}

fn resolve_layout(layout: &LayoutConfig) -> ArcLayout {
    let defaults = ArcLayout::default();
    ArcLayout {
        base_distance: layout.base_distance.unwrap_or(defaults.base_distance),
        distance_step: layout.distance_step.unwrap_or(defaults.distance_step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = TabdockConfig::default();
        assert!(config.general.default_tab.is_none());
        assert!(config.animation.open_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&TabdockConfig::default(), &EnvOverrides::default(), None, false);
        assert_eq!(resolved.initial_tab, Tab::Home);
        assert_eq!(resolved.fps, DEFAULT_FPS);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert!(!resolved.ascii_glyphs);
        assert_eq!(resolved.navbar, NavbarSettings::default());
    }

    #[test]
    fn test_toml_values_override_defaults() {
        let toml_str = r#"
[general]
default_tab = "plan"
log_level = "warn"
tap_policy = "queue"
fps = 30

[animation]
open_stagger_ms = 80
close_stagger_ms = 40

[layout]
base_distance = 100.0
safe_area_bottom = 2
"#;
        let config = parse_config(toml_str).unwrap();
        let resolved = resolve(&config, &EnvOverrides::default(), None, false);
        assert_eq!(resolved.initial_tab, Tab::Plan);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.navbar.tap_policy, TapPolicy::Queue);
        assert_eq!(resolved.fps, 30);
        assert_eq!(resolved.navbar.menu.open_stagger, Duration::from_millis(80));
        assert_eq!(resolved.navbar.menu.close_stagger, Duration::from_millis(40));
        assert_eq!(resolved.navbar.menu.pop, MenuTimings::default().pop);
        assert_eq!(resolved.navbar.layout.base_distance, 100.0);
        assert_eq!(resolved.navbar.layout.distance_step, 20.0);
        assert_eq!(resolved.safe_area_bottom, 2);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = parse_config("[general]\ndefault_tab = \"plan\"\ntap_policy = \"ignore\"").unwrap();
        let env = EnvOverrides {
            tab: Some("stats".to_string()),
            tap_policy: Some("queue".to_string()),
        };

        let resolved = resolve(&config, &env, None, false);
        assert_eq!(resolved.initial_tab, Tab::Stats);
        assert_eq!(resolved.navbar.tap_policy, TapPolicy::Queue);

        let resolved = resolve(&config, &env, Some(Tab::Profile), true);
        assert_eq!(resolved.initial_tab, Tab::Profile);
        assert!(resolved.ascii_glyphs);
    }

    #[test]
    fn test_bad_env_values_fall_through() {
        let config = parse_config("[general]\ndefault_tab = \"profile\"").unwrap();
        let env = EnvOverrides {
            tab: Some("settings".to_string()),
            tap_policy: Some("sometimes".to_string()),
        };
        let resolved = resolve(&config, &env, None, false);
        assert_eq!(resolved.initial_tab, Tab::Profile);
        assert_eq!(resolved.navbar.tap_policy, TapPolicy::Ignore);
        assert_eq!(resolved.warnings.len(), 2);
        assert!(resolved.warnings[0].starts_with("Ignoring TABDOCK_TAB"));
        assert!(resolved.warnings[0].contains("settings"));
        assert!(resolved.warnings[1].starts_with("Ignoring TABDOCK_TAP_POLICY"));
    }

    #[test]
    fn test_clean_resolve_has_no_warnings() {
        let env = EnvOverrides {
            tab: Some("plan".to_string()),
            tap_policy: None,
        };
        let resolved = resolve(&TabdockConfig::default(), &env, None, false);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_unknown_log_level_uses_default() {
        let config = parse_config("[general]\nlog_level = \"loud\"").unwrap();
        let resolved = resolve(&config, &EnvOverrides::default(), None, false);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.warnings, vec!["Unknown log level 'loud', using DEBUG".to_string()]);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nfps = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_unknown_tab_in_file_is_parse_error() {
        assert!(parse_config("[general]\ndefault_tab = \"settings\"").is_err());
    }

    #[test]
    fn test_missing_override_path_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/tabdock.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_frame_interval_from_fps() {
        let mut resolved = resolve(&TabdockConfig::default(), &EnvOverrides::default(), None, false);
        assert_eq!(resolved.frame_interval(), Duration::from_millis(16));
        resolved.fps = 0;
        assert_eq!(resolved.frame_interval(), Duration::from_millis(1000));
    }
}
