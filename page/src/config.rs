//! Tunable thresholds and timings.
//!
//! Every field defaults to the value in [`crate::consts`]; a host page can
//! override any subset with a JSON object (camelCase keys).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::parallax::ParallaxFactors;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be in (0, 1], got {value}")]
    Threshold { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("storageKey must not be empty")]
    EmptyStorageKey,
    #[error("logLevel must be one of error, warn, info, debug, trace; got {0:?}")]
    LogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    pub storage_key: String,
    pub scroll_threshold: f64,
    pub menu_breakpoint: f64,
    pub resize_debounce_ms: u32,
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub counter_duration_ms: f64,
    pub stagger_ms: u32,
    pub preload_delay_ms: u32,
    pub section_offset: f64,
    pub gradient_factor: f64,
    pub particle_factor: f64,
    pub tilt_divisor: f64,
    pub typewriter_speed_ms: u32,
    /// `log` level name: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            scroll_threshold: consts::SCROLL_THRESHOLD_PX,
            menu_breakpoint: consts::MENU_BREAKPOINT_PX,
            resize_debounce_ms: consts::RESIZE_DEBOUNCE_MS,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            counter_threshold: consts::COUNTER_THRESHOLD,
            counter_duration_ms: consts::COUNTER_DURATION_MS,
            stagger_ms: consts::REVEAL_STAGGER_MS,
            preload_delay_ms: consts::PRELOAD_DELAY_MS,
            section_offset: consts::SECTION_OFFSET_PX,
            gradient_factor: consts::PARALLAX_GRADIENT_FACTOR,
            particle_factor: consts::PARALLAX_PARTICLE_FACTOR,
            tilt_divisor: consts::TILT_DIVISOR,
            typewriter_speed_ms: consts::TYPEWRITER_SPEED_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides from JSON and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, unknown keys, or values
    /// outside their valid range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if !LOG_LEVELS.iter().any(|level| level.eq_ignore_ascii_case(&self.log_level)) {
            return Err(ConfigError::LogLevel(self.log_level.clone()));
        }
        for (field, value) in [
            ("revealThreshold", self.reveal_threshold),
            ("counterThreshold", self.counter_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Threshold { field, value });
            }
        }
        for (field, value) in [
            ("counterDurationMs", self.counter_duration_ms),
            ("tiltDivisor", self.tilt_divisor),
            ("resizeDebounceMs", f64::from(self.resize_debounce_ms)),
            ("typewriterSpeedMs", f64::from(self.typewriter_speed_ms)),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn parallax(&self) -> ParallaxFactors {
        ParallaxFactors { gradient: self.gradient_factor, particles: self.particle_factor }
    }
}
