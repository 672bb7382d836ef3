//! Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::event::DEFAULT_TICK_RATE;
use crate::state::{HourFormat, DATE_FORMAT_PRESETS, DEFAULT_DATE_FORMAT, DEFAULT_FILL_SPEED};

/// Application configuration, loaded from an optional JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interval between refresh ticks.
    pub tick_rate_ms: u64,
    /// Easing rate of the timer fill bar.
    pub fill_speed: f64,
    pub hour_format: HourFormat,
    /// Starting date line format, strftime syntax.
    pub date_format: String,
    /// Date formats the Clock section cycles through.
    pub date_formats: Vec<String>,
    /// Ring the terminal bell when a countdown ends.
    pub bell: bool,
    /// Countdown presets offered by the Add section, in seconds.
    pub presets: Vec<u32>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE.as_millis() as u64,
            fill_speed: DEFAULT_FILL_SPEED,
            hour_format: HourFormat::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            date_formats: DATE_FORMAT_PRESETS.iter().map(|f| f.to_string()).collect(),
            bell: true,
            presets: vec![60, 300, 600, 1500],
            log_file: PathBuf::from("watch-tui.log"),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        Self::from_json(&raw).wrap_err_with(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// Tick interval, never shorter than one millisecond.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_path_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.presets, vec![60, 300, 600, 1500]);
        assert!(config.bell);
        assert_eq!(config.date_format, "%d / %m / %y");
        assert_eq!(config.date_formats.len(), 4);
    }

    #[test]
    fn date_formats_from_json() {
        let config = AppConfig::from_json(
            r#"{ "date_format": "%Y-%m-%d", "date_formats": ["%Y-%m-%d", "%d.%m.%Y"] }"#,
        )
        .unwrap();
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.date_formats, vec!["%Y-%m-%d", "%d.%m.%Y"]);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            AppConfig::from_json(r#"{ "hour_format": "twelve", "tick_rate_ms": 0 }"#).unwrap();
        assert_eq!(config.hour_format, HourFormat::Twelve);
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
        assert_eq!(config.fill_speed, DEFAULT_FILL_SPEED);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/watch.json"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }
}
