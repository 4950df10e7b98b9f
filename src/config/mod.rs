// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! read-only `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - UI language
//! - `[boot]` - Boot screen timers and dismissal delay
//! - `[animation]` - Section transition and cursor trail
//! - `[contact]` - Simulated contact form send
//!
//! Every key is optional. Missing keys fall back to [`defaults`], and
//! out-of-range values are clamped by the accessors on [`Config`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `NEON_PORTFOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use neon_portfolio::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let timings = config.boot_timings();
//! assert!(timings.progress_step > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Boot screen timing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BootConfig {
    #[serde(default)]
    pub dismiss_delay_ms: Option<u64>,

    #[serde(default)]
    pub progress_interval_ms: Option<u64>,

    #[serde(default)]
    pub progress_step: Option<f32>,

    #[serde(default)]
    pub log_interval_ms: Option<u64>,
}

/// Animation settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Length of each transition phase (exit, then enter).
    #[serde(default)]
    pub transition_ms: Option<u64>,

    /// Whether the plasma cursor trail is drawn.
    #[serde(default)]
    pub cursor_trail: Option<bool>,
}

/// Contact form settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ContactConfig {
    #[serde(default)]
    pub send_delay_ms: Option<u64>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub boot: BootConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

/// Boot timer settings after defaults and clamping are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootTimings {
    pub dismiss_delay: Duration,
    pub progress_interval: Duration,
    pub progress_step: f32,
    pub log_interval: Duration,
}

impl Default for BootTimings {
    fn default() -> Self {
        Config::default().boot_timings()
    }
}

fn clamp_interval(value: Option<u64>, default: u64) -> Duration {
    Duration::from_millis(
        value
            .unwrap_or(default)
            .clamp(MIN_TIMER_INTERVAL_MS, MAX_TIMER_INTERVAL_MS),
    )
}

impl Config {
    /// Boot timings with defaults applied and values clamped to sane bounds.
    #[must_use]
    pub fn boot_timings(&self) -> BootTimings {
        let step = self
            .boot
            .progress_step
            .filter(|step| step.is_finite())
            .unwrap_or(DEFAULT_BOOT_PROGRESS_STEP)
            .clamp(MIN_BOOT_PROGRESS_STEP, MAX_BOOT_PROGRESS_STEP);

        BootTimings {
            dismiss_delay: Duration::from_millis(
                self.boot
                    .dismiss_delay_ms
                    .unwrap_or(DEFAULT_BOOT_DISMISS_DELAY_MS)
                    .clamp(MIN_BOOT_DISMISS_DELAY_MS, MAX_BOOT_DISMISS_DELAY_MS),
            ),
            progress_interval: clamp_interval(
                self.boot.progress_interval_ms,
                DEFAULT_BOOT_PROGRESS_INTERVAL_MS,
            ),
            progress_step: step,
            log_interval: clamp_interval(self.boot.log_interval_ms, DEFAULT_BOOT_LOG_INTERVAL_MS),
        }
    }

    /// Length of one transition phase.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(
            self.animation
                .transition_ms
                .unwrap_or(DEFAULT_TRANSITION_MS)
                .clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS),
        )
    }

    #[must_use]
    pub fn cursor_trail_enabled(&self) -> bool {
        self.animation.cursor_trail.unwrap_or(true)
    }

    /// Artificial delay of the simulated contact send.
    #[must_use]
    pub fn contact_send_delay(&self) -> Duration {
        Duration::from_millis(
            self.contact
                .send_delay_ms
                .unwrap_or(DEFAULT_CONTACT_SEND_DELAY_MS)
                .min(MAX_CONTACT_SEND_DELAY_MS),
        )
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default config"
                    );
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_sectioned_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"

[boot]
dismiss_delay_ms = 1500
progress_step = 2.0

[animation]
transition_ms = 300
cursor_trail = false

[contact]
send_delay_ms = 10
"#,
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(
            loaded.boot_timings().dismiss_delay,
            Duration::from_millis(1500)
        );
        assert_eq!(loaded.boot_timings().progress_step, 2.0);
        assert_eq!(loaded.transition_duration(), Duration::from_millis(300));
        assert!(!loaded.cursor_trail_enabled());
        assert_eq!(loaded.contact_send_delay(), Duration::from_millis(10));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, Config::default());
        assert_eq!(
            loaded.boot_timings().progress_interval,
            Duration::from_millis(DEFAULT_BOOT_PROGRESS_INTERVAL_MS)
        );
        assert_eq!(
            loaded.transition_duration(),
            Duration::from_millis(DEFAULT_TRANSITION_MS)
        );
        assert!(loaded.cursor_trail_enabled());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            boot: BootConfig {
                dismiss_delay_ms: Some(u64::MAX),
                progress_interval_ms: Some(0),
                progress_step: Some(f32::NAN),
                log_interval_ms: Some(999_999),
            },
            animation: AnimationConfig {
                transition_ms: Some(60_000),
                cursor_trail: None,
            },
            ..Config::default()
        };

        let timings = config.boot_timings();
        assert_eq!(
            timings.dismiss_delay,
            Duration::from_millis(MAX_BOOT_DISMISS_DELAY_MS)
        );
        assert_eq!(
            timings.progress_interval,
            Duration::from_millis(MIN_TIMER_INTERVAL_MS)
        );
        assert_eq!(timings.progress_step, DEFAULT_BOOT_PROGRESS_STEP);
        assert_eq!(
            timings.log_interval,
            Duration::from_millis(MAX_TIMER_INTERVAL_MS)
        );
        assert_eq!(
            config.transition_duration(),
            Duration::from_millis(MAX_TRANSITION_MS)
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[boot\nbroken")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
